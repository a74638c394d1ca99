// File: crates/trend-core/src/types.rs
// Summary: Shared record types and constants (unit suffix, ordering).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::weight::parse_weight_with;

/// Unit suffix written after every stored weight value.
pub const DEFAULT_UNIT: &str = "lbs";

/// Identifier assigned by storage. Opaque to the engine.
pub type RecordId = i64;

/// One logged measurement as handed over by storage.
/// Contract: `id` never changes once assigned; text fields are passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub date_text: String,
    pub value_text: String,
}

impl Record {
    pub fn new(id: RecordId, date_text: impl Into<String>, value_text: impl Into<String>) -> Self {
        Self { id, date_text: date_text.into(), value_text: value_text.into() }
    }
}

/// Record with its date and value decoded.
/// Built on demand for each ordering/plotting pass and dropped afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub value: f64,
}

impl ParsedRecord {
    pub fn from_record(record: &Record) -> Self {
        Self::from_record_with_unit(record, DEFAULT_UNIT)
    }

    pub fn from_record_with_unit(record: &Record, unit: &str) -> Self {
        Self {
            id: record.id,
            date: parse_date(&record.date_text),
            value: parse_weight_with(&record.value_text, unit),
        }
    }

    /// False when the date text was malformed and the sentinel was substituted.
    pub fn has_valid_date(&self) -> bool { !crate::date::is_sentinel(self.date) }
}

/// Requested direction for the weight log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending by date.
    OldestFirst,
    /// Descending by date.
    #[default]
    NewestFirst,
}

impl SortOrder {
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { SortOrder::OldestFirst } else { SortOrder::NewestFirst }
    }
    pub const fn is_ascending(self) -> bool { matches!(self, SortOrder::OldestFirst) }
}
