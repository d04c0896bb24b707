//! The prompt studio controller.
//!
//! [`Studio`] owns the form state (provider, model, template, system prompt,
//! keyword, count), the submit control and the result area. Front-ends (the
//! TUI and the one-shot CLI) feed it UI events through explicit handler
//! methods and read its state back to draw. It never touches the terminal
//! itself.
//!
//! - [`binder`] keeps the model list and system-prompt field in sync with
//!   the provider and template selections.
//! - [`orchestrator`] runs the Idle → Submitting → Idle generation cycle.

mod binder;
mod orchestrator;

#[cfg(test)]
mod tests;

pub use orchestrator::SubmitError;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::provider::{resolve_model, ProviderKind};
use crate::render::ResultView;
use crate::store::PromptStore;

/// Whether a generation request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// The generate button: disabled for exactly the duration of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    enabled: bool,
    disables: usize,
    enables: usize,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            disables: 0,
            enables: 0,
        }
    }
}

impl SubmitControl {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Times the control has been disabled and re-enabled.
    pub fn toggles(&self) -> (usize, usize) {
        (self.disables, self.enables)
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.disables += 1;
    }

    fn enable(&mut self) {
        self.enabled = true;
        self.enables += 1;
    }
}

/// Form field values.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    provider: ProviderKind,
    models: Vec<&'static str>,
    model_index: usize,
    template: &'static str,
    system_prompt: String,
    prompt_editable: bool,
    /// Free-text keyword field.
    pub keyword: String,
    /// Free-text count field, parsed on submit.
    pub count: String,
}

impl Form {
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// Model options for the selected provider.
    pub fn models(&self) -> &[&'static str] {
        &self.models
    }

    pub fn model_index(&self) -> usize {
        self.model_index
    }

    /// The selected model id.
    pub fn model(&self) -> &'static str {
        self.models.get(self.model_index).copied().unwrap_or_default()
    }

    /// The active template id.
    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// False while a fixed template is active.
    pub fn prompt_editable(&self) -> bool {
        self.prompt_editable
    }
}

/// Startup selections, resolved from config.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioDefaults {
    pub provider: ProviderKind,
    pub model: String,
    pub template: &'static str,
    pub count: u32,
}

impl StudioDefaults {
    pub fn from_config(config: &Config, catalog: &Catalog) -> Result<Self> {
        let selection = resolve_model(None, None, config, catalog)?;
        Ok(Self {
            provider: selection.provider,
            model: selection.model,
            template: catalog.resolve_template(config.template_name())?,
            count: config.prompt_count(),
        })
    }
}

/// UI-independent controller state.
pub struct Studio<'c, S: PromptStore> {
    catalog: &'c Catalog,
    store: S,
    form: Form,
    phase: Phase,
    control: SubmitControl,
    results: ResultView,
}

impl<'c, S: PromptStore> Studio<'c, S> {
    /// Builds the studio and runs the initial model and system-prompt refresh.
    pub fn new(catalog: &'c Catalog, store: S, defaults: &StudioDefaults) -> Self {
        let mut studio = Self {
            catalog,
            store,
            form: Form {
                provider: defaults.provider,
                models: Vec::new(),
                model_index: 0,
                template: defaults.template,
                system_prompt: String::new(),
                prompt_editable: false,
                keyword: String::new(),
                count: defaults.count.to_string(),
            },
            phase: Phase::Idle,
            control: SubmitControl::default(),
            results: ResultView::Idle,
        };
        studio.refresh_model_options(defaults.provider);
        studio.select_model(&defaults.model);
        studio.refresh_system_prompt(defaults.template);
        studio
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn results(&self) -> &ResultView {
        &self.results
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
