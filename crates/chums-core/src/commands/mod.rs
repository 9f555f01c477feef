//! Endpoint Wrappers
//!
//! Typed calls over the [`Gateway`](crate::gateway::Gateway), organized by domain.

mod groups;
mod notes;
mod tasks;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{DomainError, DomainResult};

pub use groups::*;
pub use notes::*;
pub use tasks::*;

fn decode<T: DeserializeOwned>(value: Value) -> DomainResult<T> {
    serde_json::from_value(value).map_err(|e| DomainError::Decode(e.to_string()))
}

/// Batch endpoints answer with an array; single-record endpoints with an object.
fn decode_first<T: DeserializeOwned>(value: Value) -> DomainResult<T> {
    match value {
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => decode(first),
            None => Err(DomainError::Decode("empty batch response".to_string())),
        },
        other => decode(other),
    }
}

fn batch<T: serde::Serialize>(records: &[T]) -> DomainResult<Value> {
    serde_json::to_value(records).map_err(|e| DomainError::Decode(e.to_string()))
}
