//! Group Entity
//!
//! A small group, class or team. Fields this client does not model are kept
//! in `extra` so a save sends the record back unchanged apart from the edits.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{null_as_default, Entity};

/// Tag that switches a group into team mode
pub const TEAM_TAG: &str = "team";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub track_attendance: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_pickup: bool,
    /// Markdown description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<GroupTags>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Group {
    pub fn new(category_name: &str, name: &str) -> Self {
        Self {
            category_name: category_name.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Team mode, derived from the tag list on every call
    pub fn is_team(&self) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.contains(TEAM_TAG))
    }
}

impl Entity for Group {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Group tags.
///
/// The API sends either a JSON array or a comma-delimited string; whichever
/// form arrived is the form written back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupTags {
    values: Vec<String>,
    delimited: bool,
}

impl GroupTags {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            delimited: false,
        }
    }

    pub fn delimited(text: &str) -> Self {
        Self {
            values: text
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            delimited: true,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.values.iter().any(|t| t.trim() == tag)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Serialize for GroupTags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.delimited {
            serializer.serialize_str(&self.values.join(","))
        } else {
            self.values.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for GroupTags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            List(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => GroupTags::delimited(&text),
            Raw::List(values) => GroupTags::list(values),
        })
    }
}
