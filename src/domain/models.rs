use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GameStage {
    #[serde(rename = "early game")]
    EarlyGame,
    #[serde(rename = "mid game")]
    MidGame,
    #[serde(rename = "late game")]
    LateGame,
}

impl GameStage {
    pub const ALL: [GameStage; 3] = [GameStage::EarlyGame, GameStage::MidGame, GameStage::LateGame];

    pub fn label(&self) -> &'static str {
        match self {
            GameStage::EarlyGame => "early game",
            GameStage::MidGame => "mid game",
            GameStage::LateGame => "late game",
        }
    }
}

impl fmt::Display for GameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How strong a champion is during one stage of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhaseStrength {
    Weak,
    Average,
    Strong,
}

impl PhaseStrength {
    /// Parse the exact label shown on guide pages
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Weak" => Some(PhaseStrength::Weak),
            "Average" => Some(PhaseStrength::Average),
            "Strong" => Some(PhaseStrength::Strong),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhaseStrength::Weak => "Weak",
            PhaseStrength::Average => "Average",
            PhaseStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PhaseStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per game stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByStage<T> {
    #[serde(rename = "early game")]
    pub early_game: T,
    #[serde(rename = "mid game")]
    pub mid_game: T,
    #[serde(rename = "late game")]
    pub late_game: T,
}

impl<T> ByStage<T> {
    pub fn get(&self, stage: GameStage) -> &T {
        match stage {
            GameStage::EarlyGame => &self.early_game,
            GameStage::MidGame => &self.mid_game,
            GameStage::LateGame => &self.late_game,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameStage, &T)> {
        GameStage::ALL.into_iter().map(move |stage| (stage, self.get(stage)))
    }
}

/// Lane in the tier list, in the order the tier list presents them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Bot => "bot",
            Role::Support => "support",
        }
    }
}

// --- Extracted Page Records ---

/// Matchups, ability order and tips from a champion's build page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Build {
    pub strong_against: Vec<String>,
    pub weak_against: Vec<String>,
    /// Ability label per champion level, keyed 1..=N
    pub skill_dict: BTreeMap<u32, String>,
    pub tips: String,
}

/// Phase strength and strategy from a champion's guide page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guide {
    pub when_strong: ByStage<PhaseStrength>,
    /// Empty when the page has no stage tips block
    pub tips_for_stage_of_game: BTreeMap<GameStage, String>,
    pub strengths: String,
    pub weaknesses: String,
}

/// Champion names per role from the tier list page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaData {
    pub top: Vec<String>,
    pub jungle: Vec<String>,
    pub mid: Vec<String>,
    pub bot: Vec<String>,
    pub support: Vec<String>,
}

impl MetaData {
    pub fn role_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Top => &mut self.top,
            Role::Jungle => &mut self.jungle,
            Role::Mid => &mut self.mid,
            Role::Bot => &mut self.bot,
            Role::Support => &mut self.support,
        }
    }
}
