//! Clipboard polling loop.
//!
//! The watcher remembers the last clipboard text it inspected and only
//! runs the obfuscation pipeline when the text changes. Results are written
//! back with a leading [`SENTINEL`] so the next poll recognises them as its
//! own output. Text the user copies that happens to start with `+` is
//! skipped the same way.

use rand::Rng;
use tracing::{debug, error, info};

use crate::clipboard::ClipboardAccess;
use crate::config::{SENTINEL, WatchConfig};
use crate::error::ClipboardError;
use crate::obfuscate::{is_number, process_line};

/// What a single poll did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Clipboard text is the same as on the previous poll.
    Unchanged,
    /// Clipboard text carries the sentinel and was left alone.
    Tagged,
    /// New clipboard text that is not a number.
    Ignored,
    /// A number was obfuscated and written back.
    Replaced {
        /// The text that was copied.
        original: String,
        /// The text written to the clipboard, sentinel included.
        result: String,
    },
}

/// Polls a clipboard and replaces copied numbers.
pub struct ClipboardWatcher<C, R> {
    clipboard: C,
    rng: R,
    config: WatchConfig,
    last_seen: String,
}

impl<C: ClipboardAccess, R: Rng> ClipboardWatcher<C, R> {
    pub fn new(clipboard: C, rng: R, config: WatchConfig) -> Self {
        Self {
            clipboard,
            rng,
            config,
            last_seen: String::new(),
        }
    }

    /// Last clipboard text the watcher inspected.
    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    /// Inspect the clipboard once.
    pub fn poll(&mut self) -> Result<PollOutcome, ClipboardError> {
        let current = self.clipboard.read_text()?;

        if current == self.last_seen {
            return Ok(PollOutcome::Unchanged);
        }
        if current.trim().starts_with(SENTINEL) {
            return Ok(PollOutcome::Tagged);
        }

        let outcome = if is_number(&current) {
            info!("Number detected in clipboard: {}", current);
            let result = format!("{}{}", SENTINEL, process_line(&current, &mut self.rng));
            info!("Processed result: {}", result);

            self.clipboard.write_text(&result)?;
            info!("Result copied to clipboard: {}", result);

            PollOutcome::Replaced {
                original: current.clone(),
                result,
            }
        } else {
            debug!("Clipboard changed, not a number");
            PollOutcome::Ignored
        };

        self.last_seen = current;
        Ok(outcome)
    }

    /// Poll until the future is dropped.
    ///
    /// A failed poll is logged and followed by the error backoff instead of
    /// the regular interval; it never ends the loop.
    pub async fn run(&mut self) {
        loop {
            let delay = match self.poll() {
                Ok(_) => self.config.poll_interval,
                Err(e) => {
                    error!("Clipboard processing failed: {}", e);
                    self.config.error_backoff
                }
            };

            tokio::time::sleep(delay).await;
        }
    }
}
