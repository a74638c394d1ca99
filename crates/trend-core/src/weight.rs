// File: crates/trend-core/src/weight.rs
// Summary: Weight value codec; strips a unit suffix and coerces bad input to zero.

use crate::types::DEFAULT_UNIT;

/// Parse a value such as `"185.5 lbs"`. Total: malformed text yields `0.0`.
pub fn parse_weight(text: &str) -> f64 {
    parse_weight_with(text, DEFAULT_UNIT)
}

/// Like [`parse_weight`] with a caller-chosen unit suffix.
pub fn parse_weight_with(text: &str, unit: &str) -> f64 {
    try_parse_weight(text, unit).unwrap_or(0.0)
}

/// Strip `unit` (case-insensitive, surrounding whitespace allowed) and parse the
/// remaining decimal. Non-finite results (`NaN`, `inf`) count as failures.
pub fn try_parse_weight(text: &str, unit: &str) -> Option<f64> {
    let number = strip_unit(text.trim(), unit).trim();
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn strip_unit<'a>(text: &'a str, unit: &str) -> &'a str {
    if unit.is_empty() || text.len() < unit.len() {
        return text;
    }
    let split = text.len() - unit.len();
    match text.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(unit) => &text[..split],
        _ => text,
    }
}

/// Render a value for storage, e.g. `150 lbs` or `185.5 lbs`.
pub fn format_weight(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{value}")
    } else {
        format!("{value} {unit}")
    }
}
