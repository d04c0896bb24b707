//! Environment variable substitution and effective-value accessors.

use super::types::Config;

use crate::constants::{
    DEFAULT_PROMPT_COUNT, DEFAULT_PROXY_BASE_URL, DEFAULT_TEMPLATE, PROXY_PATH, PROXY_URL_ENV,
};

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        for field in [
            &mut self.proxy.base_url,
            &mut self.default_provider,
            &mut self.default_model,
            &mut self.default_template,
        ] {
            if let Some(value) = field.as_mut() {
                *value = Self::resolve_str(value);
            }
            // An unset env var leaves an empty string; treat it as absent.
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        while let Some(start) = result.find("{env:") {
            if let Some(end) = result[start..].find('}') {
                let var_name = &result[start + 5..start + end];
                let value = std::env::var(var_name).unwrap_or_default();
                result = format!(
                    "{}{}{}",
                    &result[..start],
                    value,
                    &result[start + end + 1..]
                );
            } else {
                break;
            }
        }
        result
    }

    /// Proxy base URL: env var first, then config, then the default.
    pub fn proxy_base_url(&self) -> String {
        if let Ok(val) = std::env::var(PROXY_URL_ENV) {
            if !val.trim().is_empty() {
                return val.trim().trim_end_matches('/').to_string();
            }
        }
        self.proxy
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_PROXY_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Full URL of the proxy endpoint.
    pub fn proxy_endpoint(&self) -> String {
        format!("{}{}", self.proxy_base_url(), PROXY_PATH)
    }

    /// Get the configured default provider name, if any.
    pub fn provider_name(&self) -> Option<&str> {
        self.default_provider.as_deref()
    }

    /// Get the configured default model, stripping a provider prefix if present.
    pub fn model_name(&self) -> Option<String> {
        let m = self.default_model.as_deref()?;
        match m.split_once('/') {
            Some((_prov, model)) => Some(model.to_string()),
            None => Some(m.to_string()),
        }
    }

    /// Template selected at startup.
    pub fn template_name(&self) -> &str {
        self.default_template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
    }

    /// Number of variations requested by default.
    pub fn prompt_count(&self) -> u32 {
        self.default_count.unwrap_or(DEFAULT_PROMPT_COUNT)
    }
}
