use anyhow::Result;
use log::info;
use scraper::Html;

use crate::config::ScraperSettings;
use crate::http::PageClient;

/// Build and guide pages of one champion
pub struct ChampionPages {
    pub build: Html,
    pub guide: Html,
}

/// Downloads the pages a query needs
pub struct PageFetcher {
    client: PageClient,
    settings: ScraperSettings,
}

impl PageFetcher {
    pub fn new(settings: ScraperSettings) -> Result<Self> {
        let client = PageClient::new(settings.user_agent)?;
        Ok(Self { client, settings })
    }

    /// Fetch the tier list page
    pub async fn fetch_meta_page(&self) -> Result<Html> {
        info!("Fetching tier list...");
        self.client.get_document(self.settings.meta_url).await
    }

    /// Fetch the build page, then the guide page, of `champion`
    pub async fn fetch_champion_pages(&self, champion: &str) -> Result<ChampionPages> {
        info!("Fetching build page for {}...", champion);
        let build = self.client.get_document(&self.settings.build_url(champion)).await?;

        info!("Fetching guide page for {}...", champion);
        let guide = self.client.get_document(&self.settings.guide_url(champion)).await?;

        Ok(ChampionPages { build, guide })
    }
}
