use thiserror::Error;

/// Markup that the extractors expected but did not find.
///
/// Every variant is fatal: a record is either built completely or not at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("expected block #{index} matching `{selector}`, found {found}")]
    MissingBlock {
        selector: String,
        index: usize,
        found: usize,
    },

    #[error("link without a champion reference: {href:?}")]
    MalformedChampionLink { href: Option<String> },

    #[error("expected 3 phase strength ratings, found {found}")]
    MissingPhaseRatings { found: usize },

    #[error("no tips for {stage}")]
    MissingStageTips { stage: String },
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
