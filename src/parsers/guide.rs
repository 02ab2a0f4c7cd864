use scraper::{ElementRef, Html};
use std::collections::BTreeMap;

use super::dom::{nth_block, select_all, select_first, trimmed_text};
use super::markup::guide::*;
use crate::domain::{ByStage, GameStage, Guide, PhaseStrength};
use crate::errors::ExtractionError;

/// Parse a champion guide page
pub fn extract_guide(document: &Html) -> Result<Guide, ExtractionError> {
    let root = document.root_element();

    let blocks = select_all(root, STRENGTH_WEAKNESS_BLOCKS)?;
    let strengths = trimmed_text(nth_block(&blocks, STRENGTHS_BLOCK, STRENGTH_WEAKNESS_BLOCKS)?);
    let weaknesses = trimmed_text(nth_block(&blocks, WEAKNESSES_BLOCK, STRENGTH_WEAKNESS_BLOCKS)?);

    let when_strong = extract_when_strong(root)?;
    let tips_for_stage_of_game = extract_stage_tips(root)?;

    Ok(Guide {
        when_strong,
        tips_for_stage_of_game,
        strengths,
        weaknesses,
    })
}

/// The first three strength labels are early, mid and late game
fn extract_when_strong(root: ElementRef<'_>) -> Result<ByStage<PhaseStrength>, ExtractionError> {
    let gameplay = select_first(root, PHASE_STRENGTH)?;

    let ratings: Vec<PhaseStrength> = select_all(gameplay, PHASE_LABEL)?
        .into_iter()
        .filter_map(|label| PhaseStrength::from_label(&trimmed_text(label)))
        .collect();

    match ratings.as_slice() {
        [early_game, mid_game, late_game, ..] => Ok(ByStage {
            early_game: *early_game,
            mid_game: *mid_game,
            late_game: *late_game,
        }),
        _ => Err(ExtractionError::MissingPhaseRatings {
            found: ratings.len(),
        }),
    }
}

/// Every tips block is written to all three stages, so the last block wins.
fn extract_stage_tips(
    root: ElementRef<'_>,
) -> Result<BTreeMap<GameStage, String>, ExtractionError> {
    let mut tips = BTreeMap::new();

    for block in select_all(root, STAGE_TIPS)? {
        let text = trimmed_text(block);
        for stage in GameStage::ALL {
            tips.insert(stage, text.clone());
        }
    }

    Ok(tips)
}
