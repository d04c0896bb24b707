//! Proxy endpoint access for prompt-studio.
//!
//! All model invocation happens behind a server-side proxy. This module
//! defines the [`Transport`] seam the studio talks through, the reqwest
//! backed [`ProxyClient`], and [`generate`], which performs one call and
//! unwraps the provider envelope into plain text.

mod client;

pub use client::{ProxyClient, ProxyError};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::provider::envelope::EnvelopeError;
use crate::request::GenerationRequest;

/// Sends a generation request and returns the provider's raw envelope.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &GenerationRequest) -> Result<Value, ProxyError>;
}

/// Anything that ended a generation cycle without text to render.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Proxy(#[from] ProxyError),
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

/// Performs one proxy call and extracts the generated text.
pub async fn generate<T>(transport: &T, request: &GenerationRequest) -> Result<String, GenerationError>
where
    T: Transport + ?Sized,
{
    tracing::info!(
        provider = %request.provider,
        model = %request.model,
        count = request.count,
        "sending generation request"
    );
    let envelope = transport.send(request).await?;
    let text = request.provider.extract(&envelope)?;
    tracing::debug!(chars = text.len(), "received generated text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderKind;
    use serde_json::json;

    struct Canned(Result<Value, u16>);

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, _request: &GenerationRequest) -> Result<Value, ProxyError> {
            match &self.0 {
                Ok(v) => Ok(v.clone()),
                Err(status) => Err(ProxyError::Server {
                    status: *status,
                    message: "quota exceeded".into(),
                }),
            }
        }
    }

    fn request(provider: ProviderKind) -> GenerationRequest {
        GenerationRequest::new(provider, "m", "sys", "owl", 2).unwrap()
    }

    #[tokio::test]
    async fn test_generate_unwraps_envelope() {
        let transport = Canned(Ok(json!({"content": [{"text": " 1. A\n2. B "}]})));
        let text = generate(&transport, &request(ProviderKind::Anthropic))
            .await
            .unwrap();
        assert_eq!(text, "1. A\n2. B");
    }

    #[tokio::test]
    async fn test_generate_dispatches_on_request_provider() {
        let body = json!({"candidates": [{"content": {"parts": [{"text": "1. dunes"}]}}]});
        let text = generate(&Canned(Ok(body.clone())), &request(ProviderKind::Google))
            .await
            .unwrap();
        assert_eq!(text, "1. dunes");

        let err = generate(&Canned(Ok(body)), &request(ProviderKind::OpenAI))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Envelope(EnvelopeError::MissingText {
                provider: ProviderKind::OpenAI,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_generate_surfaces_server_message() {
        let transport = Canned(Err(429));
        let err = generate(&transport, &request(ProviderKind::OpenAI))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Proxy(_)));
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[tokio::test]
    async fn test_generate_reports_shape_mismatch() {
        let transport = Canned(Ok(json!({"choices": []})));
        let err = generate(&transport, &request(ProviderKind::OpenAI))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Envelope(_)));
    }
}
