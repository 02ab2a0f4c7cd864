use serde::Serialize;
use std::fmt;

use super::character::Character;
use super::meta::Meta;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Meta,
    Character { name: String },
}

impl Query {
    /// Champion query; names are matched case-insensitively by the site
    pub fn character(name: &str) -> Self {
        Query::Character {
            name: name.to_lowercase(),
        }
    }
}

/// Result of a query, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Meta(Meta),
    Character(Character),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Meta(meta) => meta.fmt(f),
            Report::Character(character) => character.fmt(f),
        }
    }
}
