//! Agency clients.

use super::ids::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub goals: String,
    /// Display name of the assigned strategist.
    #[serde(default)]
    pub strategist: String,
    /// Free-form marker present on seeded clients only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub industry: String,
    pub goals: String,
    pub strategist: String,
}

impl Client {
    pub fn from_draft(id: RecordId, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            industry: draft.industry,
            goals: draft.goals,
            strategist: draft.strategist,
            status: None,
        }
    }

    /// Replaces every form field; untouched extras (`status`) survive.
    pub fn apply(&mut self, draft: ClientDraft) {
        self.name = draft.name;
        self.industry = draft.industry;
        self.goals = draft.goals;
        self.strategist = draft.strategist;
    }
}
