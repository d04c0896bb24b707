//! Response rendering.
//!
//! Turns generated text into a [`ResultView`]: the numbered list is split
//! into individual prompts, each carrying its own copy-feedback state.
//! Every generation cycle builds a fresh view, replacing the previous one.

use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;

use crate::constants::{
    COPIED_LABEL, COPY_FEEDBACK_DURATION, COPY_LABEL, EMPTY_RESPONSE_NOTICE, NO_RESULTS_NOTICE,
};

/// Numbered-list marker: optional newline, digits, a period, whitespace.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n?\d+\.\s").expect("marker pattern is valid"));

/// Splits generated text into trimmed, non-empty prompt entries.
///
/// Text without a single numbered marker did not follow the requested
/// format and yields no entries.
pub fn parse_prompts(text: &str) -> Vec<String> {
    if !MARKER.is_match(text) {
        return Vec::new();
    }
    MARKER
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// One generated prompt with its copy action state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub text: String,
    copied_at: Option<Instant>,
}

impl ResultItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            copied_at: None,
        }
    }

    /// Records a successful copy at `now`.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// The copy action label, reverting after [`COPY_FEEDBACK_DURATION`].
    pub fn copy_label(&self, now: Instant) -> &'static str {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < COPY_FEEDBACK_DURATION => COPIED_LABEL,
            _ => COPY_LABEL,
        }
    }
}

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultView {
    /// Nothing generated yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Parsed prompts, in response order.
    Prompts(Vec<ResultItem>),
    /// A human-readable notice (no results, empty response, ...).
    Notice(String),
    /// A failed cycle; shown styled as an error.
    Error(String),
}

impl ResultView {
    /// Builds the view for a response's generated text.
    ///
    /// Blank text and text without usable entries get distinct notices.
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Notice(EMPTY_RESPONSE_NOTICE.to_string());
        }
        let prompts = parse_prompts(text);
        if prompts.is_empty() {
            return Self::Notice(NO_RESULTS_NOTICE.to_string());
        }
        Self::Prompts(prompts.into_iter().map(ResultItem::new).collect())
    }

    /// The rendered prompts, if any.
    pub fn items(&self) -> &[ResultItem] {
        match self {
            Self::Prompts(items) => items,
            _ => &[],
        }
    }

    pub fn items_mut(&mut self) -> &mut [ResultItem] {
        match self {
            Self::Prompts(items) => items,
            _ => &mut [],
        }
    }
}
