//! Team tasks.

use super::ids::{ForeignKey, RecordId};
use super::validate::{parse_iso_date, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value.trim())
            .ok_or_else(|| ValidationError::UnknownValue {
                field: "task status",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::UnknownValue {
                field: "task priority",
                value: value.to_string(),
            }),
        }
    }
}

/// Task type that editors see regardless of assignment.
pub const REVIEW_TASK_TYPE: &str = "review";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Display name of the assignee; ownership is matched by name.
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub project_id: ForeignKey,
    #[serde(default)]
    pub due_date: String,
    /// `content`, `review`, `meeting`, ...
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assigned_to: String,
    pub project_id: ForeignKey,
    pub due_date: String,
    pub kind: String,
}

impl Task {
    /// A task is overdue once its due day has started (UTC) and it is not
    /// completed. Blank or unparseable due dates are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.status == TaskStatus::Completed {
            return false;
        }
        parse_iso_date(&self.due_date).is_some_and(|due| due <= today)
    }

    pub fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.priority = draft.priority;
        self.status = draft.status;
        self.assigned_to = draft.assigned_to;
        self.project_id = draft.project_id;
        self.due_date = draft.due_date;
        self.kind = draft.kind;
    }
}
