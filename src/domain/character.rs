use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::models::{Build, ByStage, GameStage, Guide, PhaseStrength};
use crate::errors::ExtractionError;

const SEPARATOR: &str = "-----------------------------------------";

/// Everything known about one champion, flattened from its build and guide pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    pub skill_order: BTreeMap<u32, String>,
    pub strong_against: Vec<String>,
    pub weak_against: Vec<String>,
    pub tips: String,
    pub when_strong: ByStage<PhaseStrength>,
    pub tips_for_stage_of_game: ByStage<String>,
    pub strengths: String,
    pub weaknesses: String,
}

impl Character {
    /// Fold both page records into one champion.
    ///
    /// Fails if the guide has no tips for one of the three stages.
    pub fn from_records(name: &str, build: Build, guide: Guide) -> Result<Self, ExtractionError> {
        let Guide {
            when_strong,
            mut tips_for_stage_of_game,
            strengths,
            weaknesses,
        } = guide;

        let mut take_tips = |stage: GameStage| {
            tips_for_stage_of_game
                .remove(&stage)
                .ok_or_else(|| ExtractionError::MissingStageTips {
                    stage: stage.to_string(),
                })
        };

        let tips_for_stage_of_game = ByStage {
            early_game: take_tips(GameStage::EarlyGame)?,
            mid_game: take_tips(GameStage::MidGame)?,
            late_game: take_tips(GameStage::LateGame)?,
        };

        Ok(Self {
            name: name.to_string(),
            skill_order: build.skill_dict,
            strong_against: build.strong_against,
            weak_against: build.weak_against,
            tips: build.tips,
            when_strong,
            tips_for_stage_of_game,
            strengths,
            weaknesses,
        })
    }

    fn skill_order_line(&self) -> String {
        self.skill_order
            .iter()
            .map(|(level, ability)| format!("{}: {}", level, ability))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn when_strong_line(&self) -> String {
        self.when_strong
            .iter()
            .map(|(stage, strength)| format!("{}: {}", stage, strength))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Here is the info for {}", self.name)?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Skill order: {}", self.skill_order_line())?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Strong against: {}", self.strong_against.join(", "))?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Weak against: {}", self.weak_against.join(", "))?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Tips: {}", self.tips)?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "{} is typically: {}", self.name, self.when_strong_line())?;
        for (stage, tips) in self.tips_for_stage_of_game.iter() {
            writeln!(f, "{}", SEPARATOR)?;
            writeln!(f, "Tips for {}: {}", stage, tips)?;
        }
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Strengths: {}", self.strengths)?;
        writeln!(f, "{}", SEPARATOR)?;
        write!(f, "Weaknesses: {}", self.weaknesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_build() -> Build {
        Build {
            strong_against: vec!["z".to_string()],
            weak_against: vec!["x".to_string(), "y".to_string()],
            skill_dict: BTreeMap::from([
                (1, "Q".to_string()),
                (2, "W".to_string()),
                (3, "E".to_string()),
            ]),
            tips: "Play safe".to_string(),
        }
    }

    fn sample_guide(stage_tips: &[GameStage]) -> Guide {
        Guide {
            when_strong: ByStage {
                early_game: PhaseStrength::Weak,
                mid_game: PhaseStrength::Average,
                late_game: PhaseStrength::Strong,
            },
            tips_for_stage_of_game: stage_tips
                .iter()
                .map(|stage| (*stage, "Farm up".to_string()))
                .collect(),
            strengths: "Scaling".to_string(),
            weaknesses: "Immobile".to_string(),
        }
    }

    #[test]
    fn test_from_records_flattens_both_pages() {
        let character =
            Character::from_records("ahri", sample_build(), sample_guide(&GameStage::ALL)).unwrap();

        assert_eq!(character.name, "ahri");
        assert_eq!(character.skill_order.len(), 3);
        assert_eq!(character.weak_against, vec!["x", "y"]);
        assert_eq!(character.strong_against, vec!["z"]);
        assert_eq!(character.tips, "Play safe");
        assert_eq!(character.when_strong.late_game, PhaseStrength::Strong);
        assert_eq!(character.tips_for_stage_of_game.mid_game, "Farm up");
        assert_eq!(character.strengths, "Scaling");
        assert_eq!(character.weaknesses, "Immobile");
    }

    #[test]
    fn test_from_records_fails_without_stage_tips() {
        let result = Character::from_records("ahri", sample_build(), sample_guide(&[]));

        assert_eq!(
            result,
            Err(ExtractionError::MissingStageTips {
                stage: "early game".to_string()
            })
        );
    }

    #[test]
    fn test_from_records_fails_on_partial_stage_tips() {
        let guide = sample_guide(&[GameStage::EarlyGame, GameStage::MidGame]);

        let result = Character::from_records("ahri", sample_build(), guide);

        assert_eq!(
            result,
            Err(ExtractionError::MissingStageTips {
                stage: "late game".to_string()
            })
        );
    }

    #[test]
    fn test_display_covers_every_section() {
        let character =
            Character::from_records("ahri", sample_build(), sample_guide(&GameStage::ALL)).unwrap();

        let report = character.to_string();

        assert!(report.starts_with("Here is the info for ahri\n"));
        assert!(report.contains("Skill order: 1: Q, 2: W, 3: E\n"));
        assert!(report.contains("Strong against: z\n"));
        assert!(report.contains("Weak against: x, y\n"));
        assert!(report.contains("Tips: Play safe\n"));
        assert!(report.contains(
            "ahri is typically: early game: Weak, mid game: Average, late game: Strong\n"
        ));
        assert!(report.contains("Tips for early game: Farm up\n"));
        assert!(report.contains("Tips for mid game: Farm up\n"));
        assert!(report.contains("Tips for late game: Farm up\n"));
        assert!(report.contains("Strengths: Scaling\n"));
        assert!(report.ends_with("Weaknesses: Immobile"));
    }
}
