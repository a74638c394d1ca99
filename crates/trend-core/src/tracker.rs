// File: crates/trend-core/src/tracker.rs
// Summary: Service tying a record store to ordering, chart building and view resolution.

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::axis::effective_goal;
use crate::config::TrackerConfig;
use crate::date::format_date;
use crate::series::{ChartSeries, SeriesBuilder};
use crate::sort::sort_records;
use crate::store::{ActionOutcome, RecordAction, RecordStore, StoreError};
use crate::types::{Record, RecordId, SortOrder};
use crate::view::ViewState;
use crate::weight::format_weight;

pub struct WeightTracker<S: RecordStore> {
    store: S,
    config: TrackerConfig,
    builder: SeriesBuilder,
}

impl<S: RecordStore> WeightTracker<S> {
    pub fn new(store: S, config: TrackerConfig) -> Self {
        let builder = SeriesBuilder::from_config(&config);
        Self { store, config, builder }
    }

    pub fn store(&self) -> &S { &self.store }
    pub fn config(&self) -> &TrackerConfig { &self.config }

    pub fn sort_order(&self) -> SortOrder { self.config.sort_order }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        debug!("sort order changed: {:?} -> {:?}", self.config.sort_order, order);
        self.config.sort_order = order;
    }

    /// The weight log in the configured order.
    pub fn entries(&self, user: &str) -> Result<Vec<Record>, StoreError> {
        self.entries_ordered(user, self.config.sort_order)
    }

    pub fn entries_ordered(&self, user: &str, order: SortOrder) -> Result<Vec<Record>, StoreError> {
        let records = self.store.records_for(user)?;
        Ok(sort_records(&records, order))
    }

    /// Goal to draw for `user`. Lookup failures and non-positive goals both read as unset.
    pub fn goal(&self, user: &str) -> Option<f64> {
        match self.store.goal_for(user) {
            Ok(goal) => effective_goal(goal),
            Err(err) => {
                warn!("goal lookup failed for chart, drawing without goal: {err}");
                None
            }
        }
    }

    /// Chart series for `user`, always oldest first so time runs left to right.
    pub fn chart(&self, user: &str) -> Result<ChartSeries, StoreError> {
        let records = self.store.records_for(user)?;
        Ok(self.builder.build(&records, SortOrder::OldestFirst, self.goal(user)))
    }

    pub fn view(&self, user: &str) -> Result<Option<ViewState>, StoreError> {
        let series = self.chart(user)?;
        Ok(ViewState::from_series(&series, &self.config.window))
    }

    pub fn apply(&mut self, user: &str, action: &RecordAction) -> Result<ActionOutcome, StoreError> {
        let outcome = action.apply(&mut self.store, user)?;
        info!("record action applied: {outcome:?}");
        Ok(outcome)
    }

    /// Store a typed entry using the canonical date and value text forms.
    pub fn add_entry(&mut self, user: &str, date: NaiveDate, weight: f64) -> Result<RecordId, StoreError> {
        let date_text = format_date(date);
        let value_text = format_weight(weight, &self.config.unit_suffix);
        let id = self.store.insert(user, &date_text, &value_text)?;
        info!("record action applied: {:?}", ActionOutcome::Added(id));
        Ok(id)
    }

    pub fn set_goal(&mut self, user: &str, goal: f64) -> Result<(), StoreError> {
        self.store.set_goal(user, goal)
    }
}
