use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use scraper::Html;

use crate::errors::fetch_context;

/// HTTP client that downloads pages and parses them as HTML.
///
/// One instance holds one connection pool, so consecutive requests to the
/// same host reuse the connection.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Self::build_client(user_agent)?;
        Ok(Self { client })
    }

    /// GET `url` and parse the body as an HTML document
    pub async fn get_document(&self, url: &str) -> Result<Html> {
        debug!("GET {}", url);

        let response = self.send_get_request(url).await?;
        Self::check_response_status(&response, url)?;

        let html_text = Self::extract_html_text(response, url).await?;
        debug!("Received {} bytes from {}", html_text.len(), url);

        Ok(Html::parse_document(&html_text))
    }

    fn build_client(user_agent: &str) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))
    }

    fn check_response_status(response: &reqwest::Response, url: &str) -> Result<()> {
        if !response.status().is_success() {
            anyhow::bail!("HTTP error {} from: {}", response.status(), url);
        }
        Ok(())
    }

    async fn extract_html_text(response: reqwest::Response, url: &str) -> Result<String> {
        response
            .text()
            .await
            .with_context(|| fetch_context(url))
    }
}
