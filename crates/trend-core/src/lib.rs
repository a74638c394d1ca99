// File: crates/trend-core/src/lib.rs
// Summary: Weight-trend engine entry point; exports record ordering, axis bounds and series building.

pub mod types;
pub mod date;
pub mod weight;
pub mod sort;
pub mod axis;
pub mod series;
pub mod view;
pub mod config;
pub mod store;
pub mod tracker;

pub use types::{ParsedRecord, Record, RecordId, SortOrder, DEFAULT_UNIT};
pub use date::{format_date, parse_date, DATE_SENTINEL};
pub use weight::{format_weight, parse_weight, parse_weight_with};
pub use sort::{sort, sort_records};
pub use axis::{compute_bounds, AxisBounds, AxisPolicy};
pub use series::{build_series, ChartSeries, SeriesBuilder};
pub use view::{ViewState, WindowPolicy};
pub use config::{ConfigError, TrackerConfig};
pub use store::{ActionOutcome, MemoryStore, RecordAction, RecordStore, StoreError};
pub use tracker::WeightTracker;
