//! The generation cycle: Idle → Submitting → Idle.
//!
//! [`Studio::begin_submit`] validates the form and enters Submitting;
//! [`Studio::finish_submit`] renders the outcome and always returns to Idle.
//! Front-ends that cannot hold `&mut Studio` across an await (the TUI) call
//! the two halves around a spawned request; everything else uses
//! [`Studio::submit`].

use std::time::Instant;

use thiserror::Error;

use super::{Phase, Studio};
use crate::clipboard::Clipboard;
use crate::proxy::{self, GenerationError, Transport};
use crate::render::ResultView;
use crate::request::{parse_count, GenerationRequest, ValidationError};
use crate::store::PromptStore;

/// Why a submit did not start.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A generation is already in progress.")]
    Busy,
}

impl<S: PromptStore> Studio<'_, S> {
    /// Validates the form and, on success, disables submit and shows the
    /// loading placeholder. On failure nothing changes.
    pub fn begin_submit(&mut self) -> Result<GenerationRequest, SubmitError> {
        if self.phase == Phase::Submitting {
            return Err(SubmitError::Busy);
        }
        let request = GenerationRequest::new(
            self.form.provider,
            self.form.model(),
            &self.form.system_prompt,
            &self.form.keyword,
            parse_count(&self.form.count),
        )?;

        self.phase = Phase::Submitting;
        self.control.disable();
        self.results = ResultView::Loading;
        Ok(request)
    }

    /// Renders a settled request and re-enables submit.
    ///
    /// Ignored outside Submitting so a stray outcome cannot re-enable twice.
    pub fn finish_submit(&mut self, outcome: Result<String, GenerationError>) {
        if self.phase != Phase::Submitting {
            tracing::debug!("dropping generation outcome received while idle");
            return;
        }
        self.results = match outcome {
            Ok(text) => ResultView::from_text(&text),
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                ResultView::Error(e.to_string())
            }
        };
        self.phase = Phase::Idle;
        self.control.enable();
        tracing::debug!(cycles = self.control.toggles().1, "generation cycle finished");
    }

    /// Runs one complete cycle against `transport`.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<(), SubmitError>
    where
        T: Transport + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = proxy::generate(transport, &request).await;
        self.finish_submit(outcome);
        Ok(())
    }

    /// Copies result `index` to the clipboard and flags its copy feedback.
    ///
    /// Clipboard failures are logged only. Returns whether the copy succeeded.
    pub fn copy_result(
        &mut self,
        index: usize,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> bool {
        let Some(item) = self.results.items_mut().get_mut(index) else {
            return false;
        };
        match clipboard.set_text(&item.text) {
            Ok(()) => {
                item.mark_copied(now);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, index, "copy failed");
                false
            }
        }
    }
}
