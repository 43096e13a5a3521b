//! Magnitude-based rescaling.

use std::fmt;

use super::detection::parse_number;

/// Values at or above this are halved.
pub const HALVING_THRESHOLD: f64 = 1_000.0;

/// Values at or above this are divided by ten.
pub const TENTH_THRESHOLD: f64 = 1_000_000.0;

/// Result of rescaling clipboard text.
#[derive(Clone, Debug, PartialEq)]
pub enum Scaled {
    /// The text parsed as a number and was rescaled.
    Number(f64),
    /// The text did not parse and is passed through untouched.
    Text(String),
}

/// Numbers render as `500.0`, `617.25`, `2e16`, `inf` or `nan`.
impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.is_nan() => f.write_str("nan"),
            Self::Number(value) => write!(f, "{value:?}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Rescale the number in `text` according to its magnitude bracket.
///
/// - below 1 000: unchanged
/// - below 1 000 000: halved
/// - otherwise: divided by ten
///
/// The bracket is chosen from the signed value, so large negative numbers
/// stay in the lowest bracket and are returned unchanged.
pub fn rescale(text: &str) -> Scaled {
    let Some(number) = parse_number(text) else {
        return Scaled::Text(text.to_string());
    };

    let scaled = if number < HALVING_THRESHOLD {
        number
    } else if number < TENTH_THRESHOLD {
        number / 2.0
    } else {
        number / 10.0
    };

    Scaled::Number(scaled)
}
