//! Clipboard access for result copy actions.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};

use crate::constants::CLIPBOARD_HOLD_DURATION;

/// Destination for copied prompt text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard, opened on first use.
///
/// Headless sessions have no clipboard; opening fails there and every
/// copy reports an error instead of aborting the studio.
///
/// On Linux the selection is owned by this process and disappears when the
/// handle is dropped. A process that exits right after copying should use
/// [`SystemClipboard::holding`], which blocks in `set_text` until a clipboard
/// manager or another application takes the contents over, or `hold` elapses.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard for one-shot commands that exit after copying.
    pub fn holding() -> Self {
        Self {
            inner: None,
            hold: Some(CLIPBOARD_HOLD_DURATION),
        }
    }

    /// Latest time a copy made at `now` keeps serving the selection.
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    fn hold_deadline(&self, now: Instant) -> Option<Instant> {
        self.hold.map(|hold| now + hold)
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| anyhow!("Clipboard unavailable: {e}"))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| anyhow!("Clipboard unavailable"))
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn set_text(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        let deadline = self.hold_deadline(Instant::now());
        let clipboard = self.handle()?;
        let result = match deadline {
            Some(deadline) => {
                tracing::debug!("holding clipboard selection until taken over");
                clipboard.set().wait_until(deadline).text(text.to_string())
            }
            None => clipboard.set_text(text.to_string()),
        };
        result.map_err(|e| anyhow!("Copy failed: {e}"))
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| anyhow!("Copy failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_clipboard_does_not_hold() {
        let clipboard = SystemClipboard::new();
        assert!(clipboard.hold_deadline(Instant::now()).is_none());
    }

    #[test]
    fn test_one_shot_clipboard_holds_selection() {
        let clipboard = SystemClipboard::holding();
        let now = Instant::now();
        assert_eq!(
            clipboard.hold_deadline(now),
            Some(now + CLIPBOARD_HOLD_DURATION)
        );
    }
}
