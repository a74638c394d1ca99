// File: crates/trend-core/tests/codecs.rs
// Purpose: Date and weight codecs are total and strict about the canonical forms.

use chrono::NaiveDate;
use proptest::prelude::*;
use trend_core::date::{format_date, is_sentinel, parse_date, try_parse_date, DATE_SENTINEL};
use trend_core::weight::{format_weight, parse_weight, parse_weight_with, try_parse_weight};
use trend_core::{ParsedRecord, Record};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn parses_month_day_year() {
    assert_eq!(parse_date("3/1/2024"), ymd(2024, 3, 1));
    assert_eq!(parse_date("12/31/1999"), ymd(1999, 12, 31));
    assert_eq!(parse_date("03/09/2024"), ymd(2024, 3, 9));
    assert_eq!(parse_date("2/29/2024"), ymd(2024, 2, 29));
}

#[test]
fn malformed_dates_map_to_sentinel() {
    for bad in [
        "", "13/40/2024", "2/30/2024", "2/29/2023", "0/1/2024", "1/0/2024", "1/1/24", "1/1/20245",
        "1-1-2024", "1/1/2024/1", "1//2024", " 1/1/2024", "1/1/2024 ", "+1/1/2024", "001/1/2024", "abc",
    ] {
        assert_eq!(parse_date(bad), DATE_SENTINEL, "{bad:?} should not parse");
        assert!(try_parse_date(bad).is_none());
    }
    assert!(is_sentinel(parse_date("nope")));
    assert!(parse_date("nope") < parse_date("1/1/0001"));
}

#[test]
fn format_matches_stored_form() {
    assert_eq!(format_date(ymd(2024, 3, 1)), "3/1/2024");
    assert_eq!(format_date(ymd(2023, 11, 25)), "11/25/2023");
    assert_eq!(format_date(parse_date("7/4/2021")), "7/4/2021");
}

#[test]
fn weight_strips_unit_suffix() {
    assert_eq!(parse_weight("185.5 lbs"), 185.5);
    assert_eq!(parse_weight("150 LBS"), 150.0);
    assert_eq!(parse_weight("150lbs"), 150.0);
    assert_eq!(parse_weight("  160.25  lbs  "), 160.25);
    assert_eq!(parse_weight("172"), 172.0);
    assert_eq!(parse_weight_with("72.5 kg", "kg"), 72.5);
}

#[test]
fn malformed_weights_coerce_to_zero() {
    assert_eq!(parse_weight("abc"), 0.0);
    assert_eq!(parse_weight(""), 0.0);
    assert_eq!(parse_weight("lbs"), 0.0);
    assert_eq!(parse_weight("1.2.3 lbs"), 0.0);
    assert_eq!(parse_weight("NaN"), 0.0);
    assert_eq!(parse_weight("inf lbs"), 0.0);
    assert_eq!(parse_weight("72 kg"), 0.0);
    assert_eq!(parse_weight("150 lb\u{20ac}"), 0.0);
    assert!(try_parse_weight("abc", "lbs").is_none());
}

#[test]
fn format_weight_uses_shortest_decimal() {
    assert_eq!(format_weight(150.0, "lbs"), "150 lbs");
    assert_eq!(format_weight(185.5, "lbs"), "185.5 lbs");
    assert_eq!(format_weight(72.0, ""), "72");
    assert_eq!(parse_weight(&format_weight(147.5, "lbs")), 147.5);
}

#[test]
fn parsed_record_decodes_both_fields() {
    let p = ParsedRecord::from_record(&Record::new(7, "3/1/2024", "150.5 lbs"));
    assert_eq!((p.id, p.date, p.value), (7, ymd(2024, 3, 1), 150.5));
    assert!(p.has_valid_date());

    let bad = ParsedRecord::from_record_with_unit(&Record::new(8, "soon", "70 kg"), "kg");
    assert!(!bad.has_valid_date());
    assert_eq!(bad.value, 70.0);
}

proptest! {
    #[test]
    fn prop_parse_date_is_total(text in ".*") {
        let _ = parse_date(&text);
    }

    #[test]
    fn prop_parse_weight_is_finite(text in ".*") {
        prop_assert!(parse_weight(&text).is_finite());
    }

    #[test]
    fn prop_canonical_dates_round_trip(m in 1u32..=12, d in 1u32..=28, y in 1000i32..=9999) {
        let text = format!("{m}/{d}/{y}");
        prop_assert_eq!(format_date(parse_date(&text)), text);
    }
}
