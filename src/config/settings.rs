pub struct ScraperSettings {
    pub user_agent: &'static str,
    pub meta_url: &'static str,
    pub champions_base_url: &'static str,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: "ChampionScout/0.1",
            meta_url: "https://mobalytics.gg/blog/lol-tier-list-for-climbing-solo-queue/",
            champions_base_url: "https://app.mobalytics.gg/lol/champions",
        }
    }
}

impl ScraperSettings {
    pub fn build_url(&self, champion: &str) -> String {
        self.champion_page_url(champion, "build")
    }

    pub fn guide_url(&self, champion: &str) -> String {
        self.champion_page_url(champion, "guide")
    }

    fn champion_page_url(&self, champion: &str, page: &str) -> String {
        format!(
            "{}/{}/{}",
            self.champions_base_url,
            urlencoding::encode(champion),
            page
        )
    }
}

pub struct AppConfig {
    pub scraper: ScraperSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
        }
    }
}
