use serde::Serialize;
use std::fmt;

use super::models::{MetaData, Role};

/// Lanes in the order the report lists them
const REPORT_ORDER: [Role; 5] = [Role::Top, Role::Mid, Role::Jungle, Role::Bot, Role::Support];

/// Current tier list, one champion list per role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub top: Vec<String>,
    pub jungle: Vec<String>,
    pub mid: Vec<String>,
    pub bot: Vec<String>,
    pub support: Vec<String>,
}

impl Meta {
    pub fn role(&self, role: Role) -> &[String] {
        match role {
            Role::Top => &self.top,
            Role::Jungle => &self.jungle,
            Role::Mid => &self.mid,
            Role::Bot => &self.bot,
            Role::Support => &self.support,
        }
    }
}

impl From<MetaData> for Meta {
    fn from(data: MetaData) -> Self {
        Self {
            top: data.top,
            jungle: data.jungle,
            mid: data.mid,
            bot: data.bot,
            support: data.support,
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This is the meta for each lane:")?;
        for role in REPORT_ORDER {
            write!(f, "\n    {}: {}", role.label(), self.role(role).join(", "))?;
        }
        Ok(())
    }
}
