//! Clipboard number obfuscation.
//!
//! Watches the system clipboard, and when a number is copied replaces it
//! with a rescaled, digit-scrambled, space-grouped version tagged with `+`.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod obfuscate;
pub mod watcher;

pub use clipboard::{ClipboardAccess, SystemClipboard};
pub use error::ClipboardError;
pub use watcher::{ClipboardWatcher, PollOutcome};
