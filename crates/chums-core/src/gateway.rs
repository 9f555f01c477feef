//! Remote Data Gateway
//!
//! Contract for the HTTP client that talks to the named backend services.
//! The browser implementation lives in the UI crate; tests use a mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainResult;

/// Backend service a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceName {
    MembershipApi,
    DoingApi,
}

impl ServiceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceName::MembershipApi => "MembershipApi",
            ServiceName::DoingApi => "DoingApi",
        }
    }
}

/// JSON-over-HTTP access to a backend service.
///
/// Futures are not `Send`: the browser client runs on the single UI thread.
#[async_trait(?Send)]
pub trait Gateway: Send + Sync {
    /// GET `path` and return the parsed body
    async fn get(&self, path: &str, service: ServiceName) -> DomainResult<Value>;

    /// POST a batch of records to `path` and return the parsed body
    async fn post(&self, path: &str, records: Value, service: ServiceName) -> DomainResult<Value>;

    /// DELETE `path`
    async fn delete(&self, path: &str, service: ServiceName) -> DomainResult<()>;
}
