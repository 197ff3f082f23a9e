//! Portal roles.

use super::validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Strategist,
    Editor,
    Writer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Strategist, Role::Editor, Role::Writer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Strategist => "strategist",
            Self::Editor => "editor",
            Self::Writer => "writer",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value.trim())
            .ok_or_else(|| ValidationError::UnknownValue {
                field: "role",
                value: value.to_string(),
            })
    }
}
