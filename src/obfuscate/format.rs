//! Result formatting with space grouping and a decimal comma.

/// Separator placed between groups of three integer digits.
const GROUP_SEPARATOR: char = ' ';

/// Separator placed before the two fractional digits.
const DECIMAL_SEPARATOR: char = ',';

/// Format scrambled text as a grouped two-decimal number.
///
/// Text that is not a plain number once `.` and `-` are ignored, or that
/// fails to parse (`1.2.3`, `5-3`), is returned unchanged.
pub fn format_result(text: &str) -> String {
    if !is_plain_number(text) {
        return text.to_string();
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => format_grouped(value),
        Ok(value) => value.to_string(),
        Err(_) => text.to_string(),
    }
}

/// Check that only digits remain after stripping `.` and `-`.
fn is_plain_number(text: &str) -> bool {
    let mut digits = text.chars().filter(|&c| c != '.' && c != '-').peekable();

    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

/// Render a value as `1 234 567,00`.
fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    let int_part: String = grouped.chars().rev().collect();

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{int_part}{DECIMAL_SEPARATOR}{frac_part}")
}
