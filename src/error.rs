//! Error types for clipboard access.

/// Failure talking to the system clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened at all.
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    Read(String),

    #[error("Failed to copy to clipboard: {0}")]
    Write(String),
}
