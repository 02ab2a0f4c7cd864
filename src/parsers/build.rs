use scraper::{ElementRef, Html};
use std::collections::BTreeMap;

use super::dom::{nth_block, select_all, select_first, trimmed_text};
use super::markup::build::*;
use crate::domain::Build;
use crate::errors::ExtractionError;

/// Parse a champion build page
pub fn extract_build(document: &Html) -> Result<Build, ExtractionError> {
    let root = document.root_element();

    let matchups = select_all(root, MATCHUP_BLOCKS)?;
    let weak_against = champions_in(nth_block(&matchups, WEAK_AGAINST_BLOCK, MATCHUP_BLOCKS)?)?;
    let strong_against = champions_in(nth_block(&matchups, STRONG_AGAINST_BLOCK, MATCHUP_BLOCKS)?)?;

    let skill_dict = extract_skill_order(root)?;
    let tips = trimmed_text(select_first(root, TIPS)?);

    Ok(Build {
        strong_against,
        weak_against,
        skill_dict,
        tips,
    })
}

// --- Matchups ---

fn champions_in(block: ElementRef<'_>) -> Result<Vec<String>, ExtractionError> {
    select_all(block, MATCHUP_LINK)?
        .into_iter()
        .map(|link| champion_from_href(link.value().attr("href")))
        .collect()
}

/// `/lol/champions/ahri/build` -> `ahri`
fn champion_from_href(href: Option<&str>) -> Result<String, ExtractionError> {
    let malformed = || ExtractionError::MalformedChampionLink {
        href: href.map(str::to_string),
    };

    let path = href.ok_or_else(malformed)?;
    let champion = path.split(CHAMPION_PATH_PREFIX).nth(1).ok_or_else(malformed)?;
    Ok(champion.replace(BUILD_PATH_SUFFIX, ""))
}

// --- Skill Order ---

fn extract_skill_order(root: ElementRef<'_>) -> Result<BTreeMap<u32, String>, ExtractionError> {
    let diagram = select_first(root, SKILL_ORDER)?;
    let entries = select_all(diagram, SKILL_ENTRY)?;

    Ok((1..).zip(entries).map(|(level, entry)| (level, trimmed_text(entry))).collect())
}
