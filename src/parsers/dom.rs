use scraper::{ElementRef, Selector};

use crate::errors::ExtractionError;

pub fn selector(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|e| ExtractionError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// All descendants of `scope` matching `css`, in document order
pub fn select_all<'a>(
    scope: ElementRef<'a>,
    css: &str,
) -> Result<Vec<ElementRef<'a>>, ExtractionError> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).collect())
}

/// First descendant of `scope` matching `css`
pub fn select_first<'a>(
    scope: ElementRef<'a>,
    css: &str,
) -> Result<ElementRef<'a>, ExtractionError> {
    let selector = selector(css)?;
    scope
        .select(&selector)
        .next()
        .ok_or_else(|| ExtractionError::MissingElement {
            selector: css.to_string(),
        })
}

/// Block at a fixed position among the matches of `css`
pub fn nth_block<'a>(
    blocks: &[ElementRef<'a>],
    index: usize,
    css: &str,
) -> Result<ElementRef<'a>, ExtractionError> {
    blocks
        .get(index)
        .copied()
        .ok_or_else(|| ExtractionError::MissingBlock {
            selector: css.to_string(),
            index,
            found: blocks.len(),
        })
}

/// Text of the element and all its descendants, surrounding whitespace removed
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
