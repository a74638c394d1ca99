// File: crates/trend-core/src/view.rs
// Visible window for a built series: x extent with edge margins and a resolved y range.

use serde::{Deserialize, Serialize};

use crate::axis::{finite_range, AxisBounds};
use crate::series::ChartSeries;

/// Horizontal window settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPolicy {
    /// Space left of the first point and right of the last, in index units.
    pub edge_margin: f64,
    /// Maximum number of points shown at once; the rest is reached by panning.
    pub visible_points: usize,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self { edge_margin: 0.9, visible_points: 6 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Widest x span the viewport may show.
    pub visible_span: f64,
}

impl ViewState {
    /// `None` when the series has nothing to show.
    pub fn from_series(series: &ChartSeries, window: &WindowPolicy) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        let (y_min, y_max) = resolve_y_range(&series.bounds, &series.values())?;
        let last = (series.len() - 1) as f64;
        let visible = window.visible_points.max(1) as f64;
        Some(Self {
            x_min: -window.edge_margin,
            x_max: last + window.edge_margin,
            y_min,
            y_max,
            visible_span: visible,
        })
    }

    /// Initial viewport, anchored at the first point.
    pub fn initial_window(&self) -> (f64, f64) {
        self.window_at(self.x_min)
    }

    /// Viewport starting at `start`, clamped to the series extent.
    pub fn window_at(&self, start: f64) -> (f64, f64) {
        let span = self.visible_span.min(self.x_max - self.x_min);
        let start = start.clamp(self.x_min, self.x_max - span);
        (start, start + span)
    }

    pub fn scrollable(&self) -> bool {
        self.x_max - self.x_min > self.visible_span
    }
}

/// Concrete y range for `bounds`. Goal bounds are used as-is; auto bounds span the
/// finite data with `top_padding` percent added above.
pub fn resolve_y_range(bounds: &AxisBounds, values: &[f64]) -> Option<(f64, f64)> {
    match *bounds {
        AxisBounds::NoData => None,
        AxisBounds::Goal { minimum, maximum, .. } => Some((minimum, maximum)),
        AxisBounds::Auto { top_padding } => {
            let (y_min, mut y_max) = finite_range(values)?;
            if (y_max - y_min).abs() < 1e-9 {
                y_max = y_min + 1.0;
            }
            let span = y_max - y_min;
            Some((y_min, y_max + span * top_padding / 100.0))
        }
    }
}
