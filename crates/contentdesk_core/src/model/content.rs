//! Content pieces moving through the editorial workflow.

use super::ids::{ForeignKey, RecordId};
use super::validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Editorial workflow state. Any state may move to any other; the policy
/// decides who may move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Review,
    Approved,
    Published,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 4] = [
        ContentStatus::Draft,
        ContentStatus::Review,
        ContentStatus::Approved,
        ContentStatus::Published,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approved => "approved",
            Self::Published => "published",
        }
    }
}

impl Display for ContentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value.trim())
            .ok_or_else(|| ValidationError::UnknownValue {
                field: "content status",
                value: value.to_string(),
            })
    }
}

/// Content types offered by the create form. Stored records may carry
/// other values; `kind` stays a plain string.
pub const CONTENT_TYPES: &[&str] = &[
    "blog",
    "article",
    "social",
    "email",
    "whitepaper",
    "case-study",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub status: ContentStatus,
    #[serde(default)]
    pub project_id: ForeignKey,
    #[serde(rename = "content", default)]
    pub body: String,
    /// Display name of the creating user; ownership is matched by name.
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Editable form fields. Status changes go through a separate operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDraft {
    pub title: String,
    pub kind: String,
    pub project_id: ForeignKey,
    pub body: String,
}

impl Content {
    pub fn apply(&mut self, draft: ContentDraft) {
        self.title = draft.title;
        self.kind = draft.kind;
        self.project_id = draft.project_id;
        self.body = draft.body;
    }
}
