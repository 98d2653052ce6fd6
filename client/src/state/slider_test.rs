#![allow(clippy::float_cmp)]

use super::*;

const RANGE: SliderRange = SliderRange::new(30.0, 150.0);

#[test]
fn clamp_keeps_in_range_values() {
    assert_eq!(RANGE.clamp(60.0), 60.0);
    assert_eq!(RANGE.clamp(30.0), 30.0);
    assert_eq!(RANGE.clamp(150.0), 150.0);
}

#[test]
fn clamp_pins_out_of_range_values() {
    assert_eq!(RANGE.clamp(10.0), 30.0);
    assert_eq!(RANGE.clamp(170.0), 150.0);
    assert_eq!(RANGE.clamp(f64::INFINITY), 150.0);
    assert_eq!(RANGE.clamp(f64::NEG_INFINITY), 30.0);
}

#[test]
fn clamp_maps_nan_to_min() {
    assert_eq!(RANGE.clamp(f64::NAN), 30.0);
}

#[test]
fn parse_accepts_numbers_and_clamps() {
    assert_eq!(RANGE.parse("75"), Some(75.0));
    assert_eq!(RANGE.parse(" 200 "), Some(150.0));
    assert_eq!(RANGE.parse("abc"), None);
    assert_eq!(RANGE.parse(""), None);
}

#[test]
fn contains_is_inclusive() {
    assert!(RANGE.contains(30.0));
    assert!(RANGE.contains(150.0));
    assert!(!RANGE.contains(29.9));
}
