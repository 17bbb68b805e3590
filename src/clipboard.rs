use crate::error::ClipboardError;
use std::time::Duration;
use tokio::time::Instant;

/// How long the "copied" indicator stays up.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Something that can receive text, normally the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Copies text and remembers what was copied last for a short while.
pub struct Copier<C: ClipboardWriter> {
    clipboard: C,
    last_copied: Option<(String, Instant)>,
}

impl<C: ClipboardWriter> Copier<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            last_copied: None,
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Err(e) = self.clipboard.write_text(text) {
            tracing::warn!(error = %e, "copy to clipboard failed");
            return Err(e);
        }
        self.last_copied = Some((text.to_string(), Instant::now() + COPIED_INDICATOR_DURATION));
        Ok(())
    }

    /// Whether `text` was copied within the last [`COPIED_INDICATOR_DURATION`].
    pub fn is_copied(&self, text: &str) -> bool {
        matches!(
            &self.last_copied,
            Some((copied, deadline)) if copied == text && Instant::now() < *deadline
        )
    }
}
