//! Permissions
//!
//! Capabilities gate the mutating affordances of each component. The policy
//! is injected, so components never reach for a global user helper.

use serde::{Deserialize, Serialize};

/// A permission on one content type of one API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub api: String,
    pub content_type: String,
    pub action: String,
}

impl Capability {
    pub fn new(api: &str, content_type: &str, action: &str) -> Self {
        Self {
            api: api.to_string(),
            content_type: content_type.to_string(),
            action: action.to_string(),
        }
    }

    /// Add notes to people and other records
    pub fn notes_edit() -> Self {
        Self::new("MembershipApi", "Notes", "Edit")
    }

    pub fn groups_edit() -> Self {
        Self::new("MembershipApi", "Groups", "Edit")
    }
}

/// Answers whether the current actor may perform an action
pub trait PermissionPolicy: Send + Sync {
    fn check_access(&self, capability: &Capability) -> bool;
}
