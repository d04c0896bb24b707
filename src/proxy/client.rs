//! HTTP client for the proxy endpoint.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::Transport;
use crate::config::Config;
use crate::constants::UNKNOWN_PROXY_ERROR;
use crate::request::GenerationRequest;

/// Failures talking to the proxy.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The request never produced a response (DNS, refused connection, ...).
    #[error("Could not reach the proxy: {0}")]
    Transport(#[from] reqwest::Error),
    /// The proxy answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// A success status carried a body that is not JSON.
    #[error("The proxy returned an unreadable response: {0}")]
    Body(#[source] serde_json::Error),
}

/// Posts generation requests to `{base_url}/api/proxy-api`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProxyClient {
    /// Creates a client for an explicit endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a client for the configured proxy.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.proxy_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for ProxyClient {
    async fn send(&self, request: &GenerationRequest) -> Result<Value, ProxyError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request.payload())
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "proxy responded");
        interpret_response(status, &body)
    }
}

/// Turns a proxy status and body into the envelope or an error.
///
/// Non-2xx responses surface the body's `error` string verbatim, or a
/// generic message when there is none.
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ProxyError> {
    let parsed = serde_json::from_str::<Value>(body);

    if !(200..300).contains(&status) {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(|v| v.get("error"))
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(UNKNOWN_PROXY_ERROR)
            .to_string();
        tracing::warn!(status, %message, "proxy returned an error");
        return Err(ProxyError::Server { status, message });
    }

    parsed.map_err(ProxyError::Body)
}
