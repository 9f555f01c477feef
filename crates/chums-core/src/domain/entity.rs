//! Domain Layer - Core Entity Trait
//!
//! Every record carries an optional server-assigned string id. An id that is
//! absent, empty or `"0"` means the record has never been persisted.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

/// Core trait for all domain records
pub trait Entity: Clone {
    /// Server-assigned identifier, if any
    fn id(&self) -> Option<&str>;

    /// True once the server has assigned a usable id
    fn is_persisted(&self) -> bool {
        !is_missing(self.id())
    }
}

/// Missing-id check shared by every component
pub fn is_missing(id: Option<&str>) -> bool {
    match id {
        None => true,
        Some(id) => id.is_empty() || id == "0",
    }
}

/// Drop later records whose id was already seen. Unpersisted records are kept.
pub fn dedupe_by_id<T: Entity>(records: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| match record.id() {
            Some(id) if !is_missing(Some(id)) => seen.insert(id.to_string()),
            _ => true,
        })
        .collect()
}

/// Treat an explicit JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered with a non-success status
    #[error("{path} returned status {status}")]
    Status { status: u16, path: String },
    /// The response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// A mutating call was attempted on an unpersisted record
    #[error("Record has no id")]
    MissingId,
    /// Another save or delete is still in flight
    #[error("Record is busy")]
    Busy,
    /// Local validation failed; one message per problem
    #[error("Invalid input: {}", .0.join("; "))]
    Invalid(Vec<String>),
    /// Startup configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),
}
