//! Whitespace and decimal separator normalization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of Unicode whitespace, non-breaking and narrow spaces included.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove every whitespace character from the text.
///
/// Grouping spaces such as `1 234 567` or `1\u{a0}234` collapse into a
/// contiguous run of digits. Nothing else is touched.
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}

/// Normalize the text and treat a comma as the decimal separator.
pub fn canonical_decimal(text: &str) -> String {
    normalize(text).replace(',', ".")
}
