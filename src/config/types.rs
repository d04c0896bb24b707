//! Struct definitions for prompt-studio configuration.

use serde::{Deserialize, Serialize};

/// Root configuration, deserialized from `config.toml`.
///
/// Every field is optional so the studio runs with sensible defaults
/// when no config file exists.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Proxy endpoint settings.
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// Provider selected at startup (e.g. "openai", "google").
    #[serde(default)]
    pub default_provider: Option<String>,
    /// Model selected at startup when it belongs to the default provider.
    #[serde(default)]
    pub default_model: Option<String>,
    /// Template selected at startup (e.g. "photography", "custom").
    #[serde(default)]
    pub default_template: Option<String>,
    /// Number of variations requested by default.
    #[serde(default)]
    pub default_count: Option<u32>,
}

/// Where the proxy service lives.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProxyConfig {
    /// Base URL; the fixed proxy path is appended to it.
    pub base_url: Option<String>,
}
