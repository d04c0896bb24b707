//! View binding: keeps dependent form fields in sync with selections.

use anyhow::Result;

use super::Studio;
use crate::catalog::is_custom;
use crate::constants::{CUSTOM_PROMPT_KEY, CUSTOM_PROMPT_PLACEHOLDER};
use crate::provider::ProviderKind;
use crate::store::PromptStore;

impl<S: PromptStore> Studio<'_, S> {
    /// Replaces the model options with `provider`'s catalog list and
    /// selects the first one.
    pub fn refresh_model_options(&mut self, provider: ProviderKind) {
        self.form.provider = provider;
        self.form.models = self.catalog.models_for(provider).to_vec();
        self.form.model_index = 0;
    }

    /// Selects `model` if it is one of the current options.
    pub fn select_model(&mut self, model: &str) -> bool {
        match self.form.models.iter().position(|m| *m == model) {
            Some(idx) => {
                self.form.model_index = idx;
                true
            }
            None => false,
        }
    }

    /// Moves the model selection by `step`, wrapping around.
    pub fn cycle_model(&mut self, step: isize) {
        let len = self.form.models.len() as isize;
        if len == 0 {
            return;
        }
        let idx = (self.form.model_index as isize + step).rem_euclid(len);
        self.form.model_index = idx as usize;
    }

    /// Loads `template`'s text into the system-prompt field.
    ///
    /// The custom slot loads the saved text (or a placeholder) and becomes
    /// editable; fixed templates load their catalog text read-only.
    pub fn refresh_system_prompt(&mut self, template: &'static str) {
        self.form.template = template;
        if is_custom(template) {
            let saved = self.store.load(CUSTOM_PROMPT_KEY).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not load custom system prompt");
                None
            });
            self.form.system_prompt =
                saved.unwrap_or_else(|| CUSTOM_PROMPT_PLACEHOLDER.to_string());
            self.form.prompt_editable = true;
        } else {
            self.form.system_prompt = self
                .catalog
                .template_text(template)
                .unwrap_or_default()
                .to_string();
            self.form.prompt_editable = false;
        }
    }

    /// Writes `text` to the store while the custom template is active.
    /// No-op for fixed templates.
    pub fn persist_custom_prompt(&mut self, text: &str) -> Result<()> {
        if !is_custom(self.form.template) {
            return Ok(());
        }
        self.store.save(CUSTOM_PROMPT_KEY, text)
    }

    /// Provider selection changed.
    pub fn on_provider_change(&mut self, provider: ProviderKind) {
        tracing::debug!(%provider, "provider changed");
        self.refresh_model_options(provider);
    }

    /// Template selection changed. Unknown names are rejected.
    pub fn on_template_change(&mut self, name: &str) -> Result<()> {
        let template = self.catalog.resolve_template(name)?;
        tracing::debug!(template, "template changed");
        self.refresh_system_prompt(template);
        Ok(())
    }

    /// Moves the template selection by `step`, wrapping around.
    pub fn cycle_template(&mut self, step: isize) {
        let ids = self.catalog.template_ids();
        let len = ids.len() as isize;
        let current = ids
            .iter()
            .position(|id| *id == self.form.template)
            .unwrap_or(0) as isize;
        let next = ids[(current + step).rem_euclid(len) as usize];
        if let Err(e) = self.on_template_change(next) {
            tracing::warn!(error = %e, "template change failed");
        }
    }

    /// The system-prompt field was edited.
    ///
    /// Returns false, leaving the field untouched, when the active template
    /// is read-only. Persistence failures are logged and do not undo the edit.
    pub fn on_prompt_edit(&mut self, text: String) -> bool {
        if !self.form.prompt_editable {
            return false;
        }
        if let Err(e) = self.persist_custom_prompt(&text) {
            tracing::warn!(error = %e, "could not save custom system prompt");
        }
        self.form.system_prompt = text;
        true
    }
}
