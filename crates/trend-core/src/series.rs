// File: crates/trend-core/src/series.rs
// Summary: Builds the plottable weight series (points, date labels, axis bounds) from raw records.
// Notes:
// - X is the position in the ordered log, not elapsed time, so entries are evenly spaced.

use log::debug;

use crate::axis::{AxisBounds, AxisPolicy};
use crate::config::TrackerConfig;
use crate::sort::sort_records;
use crate::types::{ParsedRecord, Record, SortOrder, DEFAULT_UNIT};

/// Everything a renderer needs to draw the weight line.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    /// `(index, value)` pairs, index running `0..n`.
    pub points: Vec<(f64, f64)>,
    /// Original date text per point, indexed like `points`.
    pub labels: Vec<String>,
    pub bounds: AxisBounds,
}

impl ChartSeries {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn values(&self) -> Vec<f64> { self.points.iter().map(|&(_, y)| y).collect() }

    /// Label for the point nearest to `x` (tap marker lookup).
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if !x.is_finite() {
            return None;
        }
        let i = x.round();
        if i < 0.0 || i >= self.labels.len() as f64 {
            return None;
        }
        self.labels.get(i as usize).map(String::as_str)
    }

    pub fn goal_line(&self) -> Option<f64> { self.bounds.goal_line() }
}

/// Sorts, decodes and bounds a record set. Holds only configuration.
#[derive(Clone, Debug)]
pub struct SeriesBuilder {
    unit: String,
    policy: AxisPolicy,
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        Self { unit: DEFAULT_UNIT.to_string(), policy: AxisPolicy::default() }
    }
}

impl SeriesBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self { unit: config.unit_suffix.clone(), policy: config.axis }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_policy(mut self, policy: AxisPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn unit(&self) -> &str { &self.unit }
    pub fn policy(&self) -> &AxisPolicy { &self.policy }

    pub fn build(&self, records: &[Record], order: SortOrder, goal: Option<f64>) -> ChartSeries {
        let sorted = sort_records(records, order);
        let parsed: Vec<ParsedRecord> =
            sorted.iter().map(|r| ParsedRecord::from_record_with_unit(r, &self.unit)).collect();

        let points: Vec<(f64, f64)> = parsed.iter().enumerate().map(|(i, p)| (i as f64, p.value)).collect();
        let labels: Vec<String> = sorted.into_iter().map(|r| r.date_text).collect();

        let values: Vec<f64> = parsed.iter().map(|p| p.value).collect();
        let bounds = self.policy.compute(&values, goal);

        let bad_dates = parsed.iter().filter(|p| !p.has_valid_date()).count();
        let zero_values = parsed.iter().filter(|p| p.value == 0.0).count();
        debug!(
            "built series: points={} bad_dates={} zero_values={} has_goal={}",
            points.len(),
            bad_dates,
            zero_values,
            bounds.has_goal()
        );

        ChartSeries { points, labels, bounds }
    }
}

/// Build with default unit and axis policy; `ascending == true` is oldest first.
pub fn build_series(records: &[Record], ascending: bool, goal: Option<f64>) -> ChartSeries {
    SeriesBuilder::default().build(records, SortOrder::from_ascending(ascending), goal)
}
