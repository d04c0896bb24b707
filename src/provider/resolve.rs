//! Model resolution logic for prompt-studio.
//!
//! Resolves which provider and model to use based on CLI flags, config file,
//! and the catalog. Supports `provider/model` shorthand syntax.

use anyhow::{bail, Result};

use super::kind::ProviderKind;
use crate::catalog::Catalog;
use crate::config::Config;

use crate::constants::DEFAULT_PROVIDER;

/// Resolved provider + model pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSelection {
    pub provider: ProviderKind,
    pub model: String,
}

/// Resolve which provider and model to use.
/// Priority: CLI flags > config.toml > catalog defaults.
///
/// Accepts these formats:
///   --model anthropic/claude-sonnet-4-20250514  (shorthand, only when --provider is omitted)
///   --provider google --model gemini-1.5-pro-latest
///   --provider google  (uses the provider's first catalog model)
///   (nothing)  (uses config.toml, then the hardcoded default)
pub fn resolve_model(
    cli_provider: Option<&str>,
    cli_model: Option<&str>,
    config: &Config,
    catalog: &Catalog,
) -> Result<ModelSelection> {
    if cli_provider.is_none() {
        if let Some(model_str) = cli_model {
            if let Some((prov, model)) = model_str.split_once('/') {
                let provider = prov.parse::<ProviderKind>()?;
                return selection(provider, model.to_string(), catalog);
            }
        }
    }

    let provider_str = cli_provider
        .or(config.provider_name())
        .unwrap_or(DEFAULT_PROVIDER);
    let provider = provider_str.parse::<ProviderKind>()?;

    // A configured model only applies if it belongs to the resolved provider.
    let model = cli_model.map(String::from).or_else(|| {
        config
            .model_name()
            .filter(|m| catalog.models_for(provider).contains(&m.as_str()))
    });

    let model = model.unwrap_or_else(|| catalog.models_for(provider)[0].to_string());
    selection(provider, model, catalog)
}

/// Only catalog models can be selected.
fn selection(provider: ProviderKind, model: String, catalog: &Catalog) -> Result<ModelSelection> {
    let models = catalog.models_for(provider);
    if !models.contains(&model.as_str()) {
        bail!(
            "Unknown model {model} for {provider}. Available: {}",
            models.join(", ")
        );
    }
    Ok(ModelSelection { provider, model })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_catalog_model() {
        let sel = resolve_model(None, None, &Config::default(), &Catalog::builtin()).unwrap();
        assert_eq!(sel.provider, ProviderKind::OpenAI);
        assert_eq!(sel.model, "gpt-4o");
    }

    #[test]
    fn test_shorthand() {
        let sel = resolve_model(
            None,
            Some("google/gemini-1.5-flash-latest"),
            &Config::default(),
            &Catalog::builtin(),
        )
        .unwrap();
        assert_eq!(sel.provider, ProviderKind::Google);
        assert_eq!(sel.model, "gemini-1.5-flash-latest");
    }

    #[test]
    fn test_config_model_ignored_for_other_provider() {
        let config = Config {
            default_model: Some("gpt-4-turbo".into()),
            ..Config::default()
        };
        let sel = resolve_model(Some("anthropic"), None, &config, &Catalog::builtin()).unwrap();
        assert_eq!(sel.model, "claude-opus-4-20250514");

        let sel = resolve_model(None, None, &config, &Catalog::builtin()).unwrap();
        assert_eq!(sel.model, "gpt-4-turbo");
    }

    #[test]
    fn test_model_outside_catalog_is_rejected() {
        let err = resolve_model(
            Some("openai"),
            Some("claude-3-5-haiku-20241022"),
            &Config::default(),
            &Catalog::builtin(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown model"));
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        assert!(resolve_model(Some("mistral"), None, &Config::default(), &Catalog::builtin())
            .is_err());
    }
}
