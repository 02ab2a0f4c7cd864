//! Class names and block positions of the scraped pages.
//!
//! The site ships generated class names that change between releases. When a
//! page layout moves, this table is the only place that should need editing.
//!
//! Anchors with two classes compare the whole `class` attribute, so a block
//! carrying an extra class is not counted. Single-class anchors match any
//! element that has the class.

/// Champion build page (`/lol/champions/<name>/build`)
pub mod build {
    /// Matchup lists; the page carries one block per side
    pub const MATCHUP_BLOCKS: &str = r#"div[class="m-1nhoed7 ez6mgdl1"]"#;
    pub const WEAK_AGAINST_BLOCK: usize = 0;
    pub const STRONG_AGAINST_BLOCK: usize = 1;
    pub const MATCHUP_LINK: &str = "a";

    pub const CHAMPION_PATH_PREFIX: &str = "/lol/champions/";
    pub const BUILD_PATH_SUFFIX: &str = "/build";

    pub const SKILL_ORDER: &str = "div.m-1uv578k";
    pub const SKILL_ENTRY: &str = "div.m-af8mp8";

    pub const TIPS: &str = r#"div[class="m-17ylhtw e1n6zbyc1"]"#;
}

/// Champion guide page (`/lol/champions/<name>/guide`)
pub mod guide {
    pub const STRENGTH_WEAKNESS_BLOCKS: &str = "div.m-1s0gpse";
    pub const STRENGTHS_BLOCK: usize = 0;
    pub const WEAKNESSES_BLOCK: usize = 1;

    pub const PHASE_STRENGTH: &str = r#"div[class="m-11kzyeb e1n6zbyc1"]"#;
    pub const PHASE_LABEL: &str = "span";

    pub const STAGE_TIPS: &str = "div.m-10295yi";
}

/// Tier list blog post
pub mod meta {
    use crate::domain::Role;

    pub const SECTIONS: &str = "div.section";
    /// Leading sections before the first role (page intro)
    pub const SKIPPED_SECTIONS: usize = 1;
    pub const ROLE_ORDER: [Role; 5] = Role::ALL;

    pub const CHAMPION_LIST: &str = "div.champions";
    pub const CHAMPION: &str = "div.champion";
}
