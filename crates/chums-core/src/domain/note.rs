//! Note Entity
//!
//! A free-text note attached to another record, addressed by
//! (content type, content id).

use serde::{Deserialize, Serialize};

use super::entity::{null_as_default, Entity};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contents: String,
    /// Server timestamp, kept as text and parsed at display time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

impl Note {
    /// Unsaved note for the given parent record
    pub fn draft(content_type: &str, content_id: &str, contents: &str) -> Self {
        Self {
            content_id: Some(content_id.to_string()),
            content_type: Some(content_type.to_string()),
            contents: contents.to_string(),
            ..Default::default()
        }
    }
}

impl Entity for Note {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
