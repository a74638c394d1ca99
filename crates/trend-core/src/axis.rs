// File: crates/trend-core/src/axis.rs
// Summary: Vertical axis range for the weight series, keeping an optional goal line in view.

use serde::{Deserialize, Serialize};

/// Tunables for [`AxisPolicy::compute`]. Defaults match the weight chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisPolicy {
    /// Fraction of the goal-inclusive span added above and below.
    pub pad_ratio: f64,
    /// Lower bound on that padding, so a goal sitting on the data still gets room.
    pub min_pad: f64,
    /// Lowest allowed axis minimum when `clamp_floor` is set.
    pub floor: f64,
    /// Off lets the axis go below `floor`, for domains with negative values.
    pub clamp_floor: bool,
    /// Extra headroom (percent of span) the renderer should reserve when auto-scaling.
    pub auto_top_padding: f64,
}

impl Default for AxisPolicy {
    fn default() -> Self {
        Self { pad_ratio: 0.10, min_pad: 2.0, floor: 0.0, clamp_floor: true, auto_top_padding: 30.0 }
    }
}

/// How the renderer should scale the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisBounds {
    /// Nothing to plot. The renderer should clear the chart or pick its own range.
    NoData,
    /// Data-driven scaling with no forced limits and no goal line.
    Auto { top_padding: f64 },
    /// Fixed limits that contain both the data and the goal line.
    Goal { goal: f64, minimum: f64, maximum: f64 },
}

impl AxisBounds {
    pub fn has_goal(&self) -> bool { matches!(self, AxisBounds::Goal { .. }) }
    pub fn is_no_data(&self) -> bool { matches!(self, AxisBounds::NoData) }

    pub fn minimum(&self) -> Option<f64> {
        match *self {
            AxisBounds::Goal { minimum, .. } => Some(minimum),
            _ => None,
        }
    }

    pub fn maximum(&self) -> Option<f64> {
        match *self {
            AxisBounds::Goal { maximum, .. } => Some(maximum),
            _ => None,
        }
    }

    /// Zero for goal bounds; the padding is already inside `minimum..maximum`.
    pub fn top_padding(&self) -> f64 {
        match *self {
            AxisBounds::Auto { top_padding } => top_padding,
            _ => 0.0,
        }
    }

    /// Value at which to draw the goal threshold, if any.
    pub fn goal_line(&self) -> Option<f64> {
        match *self {
            AxisBounds::Goal { goal, .. } => Some(goal),
            _ => None,
        }
    }
}

impl AxisPolicy {
    /// Derive bounds for `values` and an optional goal.
    ///
    /// Non-finite values are ignored; if none remain the result is `NoData`.
    /// A goal that is absent, non-finite or not positive counts as unset.
    pub fn compute(&self, values: &[f64], goal: Option<f64>) -> AxisBounds {
        let Some((data_min, data_max)) = finite_range(values) else {
            return AxisBounds::NoData;
        };
        let Some(goal) = effective_goal(goal) else {
            return AxisBounds::Auto { top_padding: self.auto_top_padding };
        };
        let low = goal.min(data_min);
        let high = goal.max(data_max);
        let pad = self.min_pad.max((high - low) * self.pad_ratio);
        let minimum = if self.clamp_floor { (low - pad).max(self.floor) } else { low - pad };
        AxisBounds::Goal { goal, minimum, maximum: high + pad }
    }
}

/// [`AxisPolicy::compute`] with the default policy.
pub fn compute_bounds(values: &[f64], goal: Option<f64>) -> AxisBounds {
    AxisPolicy::default().compute(values, goal)
}

/// Positive, finite goal or nothing.
pub fn effective_goal(goal: Option<f64>) -> Option<f64> {
    goal.filter(|g| g.is_finite() && *g > 0.0)
}

/// Min/max over the finite entries of `values`.
pub fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any = false;
    for &v in values.iter().filter(|v| v.is_finite()) {
        y_min = y_min.min(v);
        y_max = y_max.max(v);
        any = true;
    }
    if any { Some((y_min, y_max)) } else { None }
}
