//! File loading and merging for prompt-studio configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::{Config, ProxyConfig};
use crate::constants::{DEFAULT_PROMPT_COUNT, DEFAULT_PROVIDER, DEFAULT_TEMPLATE, PROXY_URL_ENV};

impl Config {
    /// Loads the global config from `~/.config/prompt-studio/config.toml`.
    ///
    /// If no config file exists, creates one with defaults (including an
    /// `{env:VAR}` placeholder for the proxy URL) and returns it.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Self::write_default(&path);
        }
        Self::read_from(&path)
    }

    /// Writes the default config file to `path` and returns its parsed form.
    pub(super) fn write_default(path: &Path) -> Result<Self> {
        let default_toml = format!(
            r#"default_provider = "{DEFAULT_PROVIDER}"
default_template = "{DEFAULT_TEMPLATE}"
default_count = {DEFAULT_PROMPT_COUNT}

[proxy]
base_url = "{{env:{PROXY_URL_ENV}}}"
"#
        );
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &default_toml)
            .with_context(|| format!("Failed to write default config to {:?}", path))?;
        tracing::info!(path = %path.display(), "wrote default config");
        let config: Config = toml::from_str(&default_toml)
            .with_context(|| "Failed to parse default config".to_string())?;
        Ok(config)
    }

    /// Reads and parses a config file.
    pub(super) fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }

    /// Look for studio.toml in current dir, then walk up to git root.
    pub(super) fn load_project() -> Result<Option<Config>> {
        let mut dir = std::env::current_dir()?;
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "using project config");
                return Self::read_from(&candidate).map(Some);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        Config {
            proxy: ProxyConfig {
                base_url: project.proxy.base_url.or(global.proxy.base_url),
            },
            default_provider: project.default_provider.or(global.default_provider),
            default_model: project.default_model.or(global.default_model),
            default_template: project.default_template.or(global.default_template),
            default_count: project.default_count.or(global.default_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let written = Config::write_default(&path).unwrap();
        assert!(path.exists());
        assert_eq!(Config::read_from(&path).unwrap(), written);
        assert_eq!(written.default_provider.as_deref(), Some("openai"));
        assert_eq!(written.default_count, Some(DEFAULT_PROMPT_COUNT));
    }

    #[test]
    fn test_read_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_count = \"many\"").unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test]
    fn test_project_values_win() {
        let global = Config {
            proxy: ProxyConfig {
                base_url: Some("http://global".into()),
            },
            default_provider: Some("openai".into()),
            default_count: Some(3),
            ..Config::default()
        };
        let project = Config {
            default_provider: Some("google".into()),
            ..Config::default()
        };
        let merged = Config::merge(global, project);
        assert_eq!(merged.default_provider.as_deref(), Some("google"));
        assert_eq!(merged.proxy.base_url.as_deref(), Some("http://global"));
        assert_eq!(merged.default_count, Some(3));
    }
}
