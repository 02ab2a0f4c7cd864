use anyhow::{Context, Result};
use log::info;
use scraper::Html;

use crate::config::AppConfig;
use crate::domain::{Character, Meta, Query, Report};
use crate::errors::parse_context;
use crate::fetchers::{ChampionPages, PageFetcher};
use crate::parsers::{extract_build, extract_guide, extract_meta};

/// Runs one query: fetch the pages, extract the records, fold them into a report
pub struct QueryService {
    fetcher: PageFetcher,
}

impl QueryService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config.scraper)?,
        })
    }

    pub async fn run(&self, query: &Query) -> Result<Report> {
        match query {
            Query::Meta => self.run_meta().await.map(Report::Meta),
            Query::Character { name } => self.run_character(name).await.map(Report::Character),
        }
    }

    async fn run_meta(&self) -> Result<Meta> {
        info!("=== Looking up the current meta ===");
        let page = self.fetcher.fetch_meta_page().await?;
        meta_from_page(&page)
    }

    async fn run_character(&self, name: &str) -> Result<Character> {
        info!("=== Looking up champion: {} ===", name);
        let pages = self.fetcher.fetch_champion_pages(name).await?;
        character_from_pages(name, &pages)
    }
}

/// Extract the tier list page into a meta report
pub fn meta_from_page(page: &Html) -> Result<Meta> {
    let data = extract_meta(page).with_context(|| parse_context("tier list page"))?;
    Ok(Meta::from(data))
}

/// Extract both champion pages and flatten them into one champion
pub fn character_from_pages(name: &str, pages: &ChampionPages) -> Result<Character> {
    let build = extract_build(&pages.build)
        .with_context(|| parse_context(&format!("build page of {}", name)))?;
    let guide = extract_guide(&pages.guide)
        .with_context(|| parse_context(&format!("guide page of {}", name)))?;

    Character::from_records(name, build, guide)
        .with_context(|| parse_context(&format!("guide page of {}", name)))
}
