// File: crates/trend-core/tests/bounds.rs
// Purpose: Axis bounds keep the goal line visible, pad sensibly and degrade on bad input.

use trend_core::axis::{effective_goal, finite_range};
use trend_core::{compute_bounds, AxisBounds, AxisPolicy};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_values_signal_no_data() {
    for goal in [None, Some(140.0), Some(0.0)] {
        let b = compute_bounds(&[], goal);
        assert_eq!(b, AxisBounds::NoData);
        assert!(!b.has_goal());
        assert!(b.minimum().is_none() && b.maximum().is_none());
    }
}

#[test]
fn goal_below_data_extends_range() {
    let b = compute_bounds(&[150.0, 160.0, 170.0], Some(140.0));
    assert!(b.has_goal());
    assert!(approx(b.minimum().unwrap(), 137.0), "{b:?}");
    assert!(approx(b.maximum().unwrap(), 173.0), "{b:?}");
    assert_eq!(b.top_padding(), 0.0);
    assert_eq!(b.goal_line(), Some(140.0));
}

#[test]
fn goal_above_data_extends_range() {
    let b = compute_bounds(&[150.0, 160.0], Some(200.0));
    assert!(approx(b.minimum().unwrap(), 145.0));
    assert!(approx(b.maximum().unwrap(), 205.0));
}

#[test]
fn unset_goal_means_auto_scale() {
    let values = [150.0, 160.0, 170.0];
    for goal in [None, Some(0.0), Some(-5.0), Some(f64::NAN), Some(f64::INFINITY)] {
        let b = compute_bounds(&values, goal);
        assert_eq!(b, AxisBounds::Auto { top_padding: 30.0 }, "goal {goal:?}");
        assert!(!b.has_goal());
        assert!(b.goal_line().is_none());
    }
}

#[test]
fn minimum_pad_applies_when_goal_meets_data() {
    let b = compute_bounds(&[150.0], Some(150.0));
    assert!(approx(b.minimum().unwrap(), 148.0));
    assert!(approx(b.maximum().unwrap(), 152.0));
}

#[test]
fn floor_keeps_axis_non_negative() {
    let b = compute_bounds(&[1.0], Some(1.5));
    assert_eq!(b.minimum(), Some(0.0));
    assert!(approx(b.maximum().unwrap(), 3.5));

    let zeros = compute_bounds(&[0.0, 0.0], Some(140.0));
    assert_eq!(zeros.minimum(), Some(0.0));
    assert!(approx(zeros.maximum().unwrap(), 154.0));
}

#[test]
fn floor_can_be_disabled() {
    let policy = AxisPolicy { clamp_floor: false, ..AxisPolicy::default() };
    let b = policy.compute(&[1.0], Some(1.5));
    assert!(approx(b.minimum().unwrap(), -1.0));
}

#[test]
fn non_finite_values_are_ignored() {
    let b = compute_bounds(&[f64::NAN, 150.0, f64::INFINITY, 170.0, f64::NEG_INFINITY], Some(140.0));
    assert!(approx(b.minimum().unwrap(), 137.0));
    assert!(approx(b.maximum().unwrap(), 173.0));
    assert_eq!(compute_bounds(&[f64::NAN], Some(140.0)), AxisBounds::NoData);
}

#[test]
fn single_zero_is_data_not_absence() {
    assert_eq!(compute_bounds(&[0.0], None), AxisBounds::Auto { top_padding: 30.0 });
    assert!(!compute_bounds(&[0.0], None).is_no_data());
}

#[test]
fn helpers() {
    assert_eq!(finite_range(&[3.0, f64::NAN, -1.0]), Some((-1.0, 3.0)));
    assert_eq!(finite_range(&[]), None);
    assert_eq!(effective_goal(Some(120.0)), Some(120.0));
    assert_eq!(effective_goal(Some(0.0)), None);
}
