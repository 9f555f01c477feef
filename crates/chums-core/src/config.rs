//! Application Configuration
//!
//! Service endpoints, the signed-in actor and demo targets. The browser shell
//! reads this from a global JS object at startup; everything has a default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Actor, DomainError, DomainResult, TaskStatus};
use crate::gateway::ServiceName;

/// Base URL and credentials of one backend service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    pub base_url: String,
    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ServiceEndpoint {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            token: None,
        }
    }

    /// Join the base URL and an absolute API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// Records the demo shell opens on startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoTargets {
    pub content_type: String,
    pub content_id: Option<String>,
    pub group_id: Option<String>,
    pub task_status: String,
}

impl Default for DemoTargets {
    fn default() -> Self {
        Self {
            content_type: "person".to_string(),
            content_id: None,
            group_id: None,
            task_status: TaskStatus::Open.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub membership_api: ServiceEndpoint,
    pub doing_api: ServiceEndpoint,
    pub actor: Actor,
    pub demo: DemoTargets,
    /// Image URLs offered by the gallery picker
    pub gallery: Vec<String>,
    /// Label overrides applied on top of the English table
    pub labels: HashMap<String, String>,
    /// How long a failure notice stays on screen
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            membership_api: ServiceEndpoint::new("/membership"),
            doing_api: ServiceEndpoint::new("/doing"),
            actor: Actor::default(),
            demo: DemoTargets::default(),
            gallery: Vec::new(),
            labels: HashMap::new(),
            notice_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> DomainResult<Self> {
        serde_json::from_str(text).map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn endpoint(&self, service: ServiceName) -> &ServiceEndpoint {
        match service {
            ServiceName::MembershipApi => &self.membership_api,
            ServiceName::DoingApi => &self.doing_api,
        }
    }
}
