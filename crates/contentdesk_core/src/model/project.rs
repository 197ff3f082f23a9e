//! Client projects.

use super::ids::{ForeignKey, RecordId};
use super::validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Pending,
    InProgress,
    Completed,
    Published,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Published,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Published => "published",
        }
    }

    /// Chart label used by the dashboard breakdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Published => "Published",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value.trim())
            .ok_or_else(|| ValidationError::UnknownValue {
                field: "project status",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub client_id: ForeignKey,
    pub status: ProjectStatus,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub client_id: ForeignKey,
    pub status: ProjectStatus,
    pub due_date: String,
    pub assigned_to: String,
    pub description: String,
}

impl Project {
    pub fn from_draft(id: RecordId, draft: ProjectDraft, created_at: String) -> Self {
        Self {
            id,
            title: draft.title,
            client_id: draft.client_id,
            status: draft.status,
            due_date: draft.due_date,
            assigned_to: draft.assigned_to,
            description: draft.description,
            created_at: Some(created_at),
        }
    }

    pub fn apply(&mut self, draft: ProjectDraft) {
        self.title = draft.title;
        self.client_id = draft.client_id;
        self.status = draft.status;
        self.due_date = draft.due_date;
        self.assigned_to = draft.assigned_to;
        self.description = draft.description;
    }
}
