//! Provider response envelope unwrapping.
//!
//! The proxy returns each vendor's native JSON body untouched. Every shape
//! carries the same logical "generated text" string at a different path;
//! [`ProviderKind::text_pointer`] names it and [`ProviderKind::extract`]
//! pulls it out. [`extract_text`] is the entry point for callers holding a
//! bare wire id.

use serde_json::Value;
use thiserror::Error;

use super::ProviderKind;
use crate::constants::UNSUPPORTED_PROVIDER_NOTICE;

/// A recognized provider's envelope did not have the expected shape.
#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    #[error("{provider} response is missing text at `{path}`")]
    MissingText {
        provider: ProviderKind,
        path: &'static str,
    },
}

impl ProviderKind {
    /// Extracts the trimmed generated text from this provider's envelope.
    pub fn extract(&self, envelope: &Value) -> Result<String, EnvelopeError> {
        let path = self.text_pointer();
        envelope
            .pointer(path)
            .and_then(Value::as_str)
            .map(|text| text.trim().to_string())
            .ok_or(EnvelopeError::MissingText {
                provider: *self,
                path,
            })
    }
}

/// Extracts generated text for a provider given by wire id.
///
/// Unrecognized ids yield [`UNSUPPORTED_PROVIDER_NOTICE`] rather than an
/// error, so the result area always has something to show.
#[allow(dead_code)]
pub fn extract_text(provider: &str, envelope: &Value) -> Result<String, EnvelopeError> {
    match provider.parse::<ProviderKind>() {
        Ok(kind) => kind.extract(envelope),
        Err(_) => {
            tracing::warn!(provider, "no envelope shape known for provider");
            Ok(UNSUPPORTED_PROVIDER_NOTICE.to_string())
        }
    }
}
