// File: crates/trend-core/src/sort.rs
// Summary: Stable chronological ordering of records (top-down merge sort keyed by date).

use chrono::NaiveDate;

use crate::date::parse_date;
use crate::types::{Record, SortOrder};

/// Order `records` by date in the requested direction. The input is left untouched.
///
/// Dates are decoded once up front; malformed dates take the sentinel and so
/// land first in ascending order (last in descending order). Ascending output
/// keeps records sharing a date in input order. A descending result is the
/// ascending one reversed once after the merge sort, so it is its exact mirror.
pub fn sort_records(records: &[Record], order: SortOrder) -> Vec<Record> {
    let keyed: Vec<(NaiveDate, &Record)> =
        records.iter().map(|r| (parse_date(&r.date_text), r)).collect();
    let mut ordered = merge_sort(&keyed);
    if !order.is_ascending() {
        ordered.reverse();
    }
    ordered.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Boolean form: `ascending == true` is oldest first.
pub fn sort(records: &[Record], ascending: bool) -> Vec<Record> {
    sort_records(records, SortOrder::from_ascending(ascending))
}

/// Stable ascending merge sort over `(key, item)` pairs.
pub fn merge_sort<K: Ord + Copy, T: Copy>(items: &[(K, T)]) -> Vec<(K, T)> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

// Left wins ties; that is what keeps equal keys in input order.
fn merge<K: Ord, T>(left: Vec<(K, T)>, right: Vec<(K, T)>) -> Vec<(K, T)> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut l = left.into_iter().peekable();
    let mut r = right.into_iter().peekable();
    loop {
        let take_left = match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => a.0 <= b.0,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        out.extend(if take_left { l.next() } else { r.next() });
    }
    out
}

/// True when `records` already appear in `order` by date (ties in any order).
pub fn is_chronological(records: &[Record], order: SortOrder) -> bool {
    records.windows(2).all(|w| {
        let (a, b) = (parse_date(&w[0].date_text), parse_date(&w[1].date_text));
        if order.is_ascending() { a <= b } else { a >= b }
    })
}
