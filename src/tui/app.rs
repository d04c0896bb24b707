//! TUI application state.
//!
//! Wraps the [`Studio`] controller with the purely visual state the screen
//! needs: which field has focus, which result is highlighted, the blocking
//! notice, and the spinner frame. Key events are translated into studio
//! handler calls here; side effects the event loop must perform (spawning a
//! request, touching the clipboard) come back as an [`Action`].

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clipboard::Clipboard;
use crate::request::GenerationRequest;
use crate::store::PromptStore;
use crate::studio::{Phase, Studio, SubmitError};

/// Focusable form fields, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Provider,
    Model,
    Template,
    SystemPrompt,
    Keyword,
    Count,
    Results,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Provider,
        Focus::Model,
        Focus::Template,
        Focus::SystemPrompt,
        Focus::Keyword,
        Focus::Count,
        Focus::Results,
    ];

    fn step(self, delta: isize) -> Self {
        let len = Self::ORDER.len() as isize;
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ORDER[(idx + delta).rem_euclid(len) as usize]
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq)]
pub enum Action {
    Continue,
    Quit,
    /// Send this request; the outcome goes back to [`Studio::finish_submit`].
    Generate(GenerationRequest),
    /// Copy the result at this index.
    Copy(usize),
}

/// Core application state for the TUI.
pub struct App<'c, S: PromptStore> {
    pub studio: Studio<'c, S>,
    pub focus: Focus,
    /// Highlighted entry in the result list.
    pub selected: usize,
    /// Blocking notice; must be dismissed before anything else.
    pub notice: Option<String>,
    pub spinner_frame: usize,
}

impl<'c, S: PromptStore> App<'c, S> {
    pub fn new(studio: Studio<'c, S>) -> Self {
        Self {
            studio,
            focus: Focus::Keyword,
            selected: 0,
            notice: None,
            spinner_frame: 0,
        }
    }

    /// Advances the spinner while a request is in flight.
    pub fn tick_spinner(&mut self) {
        if self.studio.phase() == Phase::Submitting {
            self.spinner_frame = (self.spinner_frame + 1) % crate::constants::SPINNER_FRAMES.len();
        }
    }

    /// Processes a single key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return Action::Continue;
        }

        if ctrl && key.code == KeyCode::Char('g') {
            return self.submit();
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.step(1);
                return Action::Continue;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.step(-1);
                return Action::Continue;
            }
            _ => {}
        }

        match self.focus {
            Focus::Provider | Focus::Model | Focus::Template => self.handle_selector(key.code),
            Focus::SystemPrompt => self.handle_prompt_edit(key.code),
            Focus::Keyword => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Char(c) => {
                    self.studio.form_mut().keyword.push(c);
                    Action::Continue
                }
                KeyCode::Backspace => {
                    self.studio.form_mut().keyword.pop();
                    Action::Continue
                }
                _ => Action::Continue,
            },
            Focus::Count => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.studio.form_mut().count.push(c);
                    Action::Continue
                }
                KeyCode::Backspace => {
                    self.studio.form_mut().count.pop();
                    Action::Continue
                }
                _ => Action::Continue,
            },
            Focus::Results => self.handle_results(key.code),
        }
    }

    fn handle_selector(&mut self, code: KeyCode) -> Action {
        let step = match code {
            KeyCode::Left => -1,
            KeyCode::Right => 1,
            KeyCode::Enter => return self.submit(),
            _ => return Action::Continue,
        };
        match self.focus {
            Focus::Provider => {
                let current = self.studio.form().provider();
                let next = if step > 0 { current.next() } else { current.prev() };
                self.studio.on_provider_change(next);
            }
            Focus::Model => self.studio.cycle_model(step),
            Focus::Template => {
                self.studio.cycle_template(step);
                if self.studio.form().prompt_editable() {
                    self.focus = Focus::SystemPrompt;
                }
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_prompt_edit(&mut self, code: KeyCode) -> Action {
        let mut text = self.studio.form().system_prompt().to_string();
        match code {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Enter => text.push('\n'),
            KeyCode::Backspace => {
                text.pop();
            }
            _ => return Action::Continue,
        }
        self.studio.on_prompt_edit(text);
        Action::Continue
    }

    fn handle_results(&mut self, code: KeyCode) -> Action {
        let count = self.studio.results().items().len();
        match code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::Continue
            }
            KeyCode::Down => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                Action::Continue
            }
            KeyCode::Enter | KeyCode::Char('c') if self.selected < count => {
                Action::Copy(self.selected)
            }
            _ => Action::Continue,
        }
    }

    /// Starts a generation cycle, or raises the blocking notice.
    fn submit(&mut self) -> Action {
        match self.studio.begin_submit() {
            Ok(request) => {
                self.selected = 0;
                Action::Generate(request)
            }
            Err(SubmitError::Invalid(e)) => {
                self.notice = Some(e.to_string());
                Action::Continue
            }
            Err(SubmitError::Busy) => Action::Continue,
        }
    }

    /// Copies a result, logging (not surfacing) clipboard failures.
    pub fn copy(&mut self, index: usize, clipboard: &mut dyn Clipboard) {
        self.studio.copy_result(index, clipboard, Instant::now());
    }
}
