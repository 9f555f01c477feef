//! Task Entity
//!
//! Tasks from the doing API. Read-only in the list views.

use serde::{Deserialize, Serialize};

use super::entity::{null_as_default, Entity};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub task_number: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Creation timestamp as sent by the server
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<String>,
    #[serde(default)]
    pub created_by_label: Option<String>,
    #[serde(default)]
    pub assigned_to_id: Option<String>,
    #[serde(default)]
    pub assigned_to_label: Option<String>,
    #[serde(default)]
    pub associated_with_label: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Task {
    pub fn is_assigned_to(&self, person_id: &str) -> bool {
        self.assigned_to_id.as_deref() == Some(person_id)
    }

    pub fn is_created_by(&self, person_id: &str) -> bool {
        self.created_by_id.as_deref() == Some(person_id)
    }
}

impl Entity for Task {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Status filter for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Open,
    Closed,
}

impl TaskStatus {
    /// Only the exact filter `"Closed"` selects closed tasks
    pub fn from_filter(filter: &str) -> Self {
        if filter == "Closed" {
            TaskStatus::Closed
        } else {
            TaskStatus::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::Closed => "Closed",
        }
    }

    /// Listing endpoint on the doing API
    pub fn path(&self) -> &'static str {
        match self {
            TaskStatus::Open => "/tasks",
            TaskStatus::Closed => "/tasks/closed",
        }
    }
}

/// Payload for the task-creation form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_label: Option<String>,
}
