//! In-memory gateway for tests.
//!
//! Records every call and replays scripted responses per (method, path).
//! Unscripted GETs answer `[]`, POSTs echo the body and DELETEs succeed.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::DomainResult;
use crate::gateway::{Gateway, ServiceName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub service: ServiceName,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct MockGateway {
    calls: Mutex<Vec<Call>>,
    scripted: Mutex<HashMap<(Method, String), VecDeque<DomainResult<Value>>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next matching call
    pub fn respond(&self, method: Method, path: &str, result: DomainResult<Value>) {
        self.scripted
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    fn record(&self, method: Method, path: &str, service: ServiceName, body: Option<Value>) -> Option<DomainResult<Value>> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            service,
            body,
        });
        self.scripted
            .lock()
            .unwrap()
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front)
    }
}

#[async_trait(?Send)]
impl Gateway for MockGateway {
    async fn get(&self, path: &str, service: ServiceName) -> DomainResult<Value> {
        self.record(Method::Get, path, service, None).unwrap_or_else(|| Ok(json!([])))
    }

    async fn post(&self, path: &str, records: Value, service: ServiceName) -> DomainResult<Value> {
        self.record(Method::Post, path, service, Some(records.clone()))
            .unwrap_or(Ok(records))
    }

    async fn delete(&self, path: &str, service: ServiceName) -> DomainResult<()> {
        self.record(Method::Delete, path, service, None)
            .unwrap_or(Ok(Value::Null))
            .map(|_| ())
    }
}
