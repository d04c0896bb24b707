//! Model listing.
//!
//! Displays the catalog's models grouped by provider, marking the
//! currently resolved default. Isolates display concerns from the catalog.

use anyhow::Result;
use colored::Colorize;

use super::resolve::resolve_model;
use crate::catalog::Catalog;
use crate::config::Config;

/// List all catalog models, grouped by provider.
pub fn list_models(config: &Config, catalog: &Catalog) -> Result<()> {
    let selection = resolve_model(None, None, config, catalog)?;

    println!("Available models:\n");

    for provider in catalog.providers() {
        println!("  {}:", provider.as_str().bold());
        for model in catalog.models_for(*provider) {
            let marker = if *provider == selection.provider && *model == selection.model {
                " (default)".dimmed().to_string()
            } else {
                String::new()
            };
            println!("    {model}{marker}");
        }
        println!();
    }

    Ok(())
}
