//! Template listing and custom system prompt management.

use anyhow::Result;
use colored::Colorize;

use super::{CustomAction, TemplateAction};
use crate::catalog::{is_custom, Catalog};
use crate::constants::{CUSTOM_PROMPT_KEY, CUSTOM_PROMPT_PLACEHOLDER};
use crate::store::{FileStore, PromptStore};

/// Width of the preview column in `studio templates`.
const PREVIEW_CHARS: usize = 72;

/// Handles `studio templates [show <name>]`.
pub(super) fn handle_templates(action: Option<TemplateAction>) -> Result<()> {
    let catalog = Catalog::builtin();
    match action {
        None => {
            println!("Templates:\n");
            for id in catalog.template_ids() {
                let summary = match catalog.template_text(id) {
                    Some(text) => preview(text),
                    None => "(editable, see `studio custom show`)".to_string(),
                };
                println!("  {} {}", format!("{id:<16}").bold(), summary.dimmed());
            }
            Ok(())
        }
        Some(TemplateAction::Show { name }) => {
            let id = catalog.resolve_template(&name)?;
            if is_custom(id) {
                return handle_custom(CustomAction::Show);
            }
            println!("{}", catalog.template_text(id).unwrap_or_default());
            Ok(())
        }
    }
}

/// Handles `studio custom show|set|clear`.
pub(super) fn handle_custom(action: CustomAction) -> Result<()> {
    let mut store = FileStore::open_default()?;
    match action {
        CustomAction::Show => {
            match store.load(CUSTOM_PROMPT_KEY)? {
                Some(text) => println!("{text}"),
                None => println!("{}", CUSTOM_PROMPT_PLACEHOLDER.dimmed()),
            }
            Ok(())
        }
        CustomAction::Set { text } => {
            save_custom(&mut store, &text.join(" "))?;
            println!("{}", "Custom system prompt saved.".green());
            Ok(())
        }
        CustomAction::Clear => {
            store.remove(CUSTOM_PROMPT_KEY)?;
            println!("{}", "Custom system prompt cleared.".green());
            Ok(())
        }
    }
}

/// Writes the custom slot. Independent of any configured provider or model.
fn save_custom(store: &mut impl PromptStore, text: &str) -> Result<()> {
    store.save(CUSTOM_PROMPT_KEY, text)
}

/// `text` shortened to [`PREVIEW_CHARS`].
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}
