//! System clipboard access.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Text access to a clipboard.
///
/// Implemented by [`SystemClipboard`] for the real clipboard; tests use an
/// in-memory implementation.
pub trait ClipboardAccess {
    /// Read the current text. An empty or non-text clipboard reads as `""`.
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard, opened once and reused for every poll.
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard.
    pub fn open() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Read(e.to_string())),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
