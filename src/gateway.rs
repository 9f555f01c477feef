//! HTTP Gateway
//!
//! Browser implementation of [`Gateway`] over `fetch` (gloo-net). Each
//! service has its own base URL and optional bearer token.

use async_trait::async_trait;
use chums_core::{AppConfig, DomainError, DomainResult, Gateway, ServiceEndpoint, ServiceName};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

pub struct HttpGateway {
    membership_api: ServiceEndpoint,
    doing_api: ServiceEndpoint,
}

impl HttpGateway {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            membership_api: config.endpoint(ServiceName::MembershipApi).clone(),
            doing_api: config.endpoint(ServiceName::DoingApi).clone(),
        }
    }

    fn endpoint(&self, service: ServiceName) -> &ServiceEndpoint {
        match service {
            ServiceName::MembershipApi => &self.membership_api,
            ServiceName::DoingApi => &self.doing_api,
        }
    }
}

fn authorize(builder: RequestBuilder, endpoint: &ServiceEndpoint) -> RequestBuilder {
    match &endpoint.token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network(error: gloo_net::Error) -> DomainError {
    DomainError::Network(error.to_string())
}

fn check_status(response: &Response, path: &str) -> DomainResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(DomainError::Status {
            status: response.status(),
            path: path.to_string(),
        })
    }
}

/// Empty bodies read as `null`
async fn read_json(response: Response, path: &str) -> DomainResult<Value> {
    check_status(&response, path)?;
    let text = response.text().await.map_err(network)?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| DomainError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn get(&self, path: &str, service: ServiceName) -> DomainResult<Value> {
        let endpoint = self.endpoint(service);
        log::debug!("[HTTP] GET {} ({})", path, service.as_str());
        let response = authorize(Request::get(&endpoint.url(path)), endpoint)
            .send()
            .await
            .map_err(network)?;
        read_json(response, path).await
    }

    async fn post(&self, path: &str, records: Value, service: ServiceName) -> DomainResult<Value> {
        let endpoint = self.endpoint(service);
        log::debug!("[HTTP] POST {} ({})", path, service.as_str());
        let response = authorize(Request::post(&endpoint.url(path)), endpoint)
            .json(&records)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(response, path).await
    }

    async fn delete(&self, path: &str, service: ServiceName) -> DomainResult<()> {
        let endpoint = self.endpoint(service);
        log::debug!("[HTTP] DELETE {} ({})", path, service.as_str());
        let response = authorize(Request::delete(&endpoint.url(path)), endpoint)
            .send()
            .await
            .map_err(network)?;
        check_status(&response, path)
    }
}
