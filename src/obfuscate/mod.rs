//! Number obfuscation pipeline.
//!
//! This module provides functionality to:
//! - Normalize grouped numbers copied from documents and spreadsheets
//! - Detect if clipboard text is a number
//! - Rescale it by magnitude and scramble its digits
//! - Format the result with space grouping and a decimal comma

mod detection;
mod format;
mod normalize;
mod pipeline;
mod rescale;
mod scramble;

pub use detection::{is_number, parse_number};
pub use format::format_result;
pub use normalize::{canonical_decimal, normalize};
pub use pipeline::process_line;
pub use rescale::{HALVING_THRESHOLD, Scaled, TENTH_THRESHOLD, rescale};
pub use scramble::scramble_digits;
