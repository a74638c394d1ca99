// File: crates/trend-core/src/date.rs
// Summary: Month/day/year date codec; malformed text maps to a sentinel instead of failing.

use chrono::{Datelike, NaiveDate};

/// Substituted for any date text that does not parse. Sorts before every real date.
pub const DATE_SENTINEL: NaiveDate = NaiveDate::MIN;

/// Parse `M/D/YYYY` text. Total: returns [`DATE_SENTINEL`] on any failure.
pub fn parse_date(text: &str) -> NaiveDate {
    try_parse_date(text).unwrap_or(DATE_SENTINEL)
}

/// Strict parse: one `/` between three numeric components, month and day
/// 1-2 digits, year exactly 4 digits, and the result must be a real calendar day.
pub fn try_parse_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let month = component(parts.next()?, 1, 2)?;
    let day = component(parts.next()?, 1, 2)?;
    let year = component(parts.next()?, 4, 4)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn component(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Format as `M/D/YYYY` without zero padding, the form records are stored in.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{:04}", date.month(), date.day(), date.year())
}

#[inline]
pub fn is_sentinel(date: NaiveDate) -> bool { date == DATE_SENTINEL }
