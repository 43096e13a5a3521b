//! Number detection for clipboard text.
//!
//! Decides whether copied text represents a plain decimal number once
//! grouping spaces are removed and a comma is read as the decimal point.

use super::normalize::canonical_decimal;

/// Parse text as a number, `inf` and `nan` spellings included.
pub fn parse_number(text: &str) -> Option<f64> {
    canonical_decimal(text).parse::<f64>().ok()
}

/// Check if the text looks like a number.
///
/// Empty and whitespace-only input is never a number.
pub fn is_number(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    parse_number(text).is_some()
}
