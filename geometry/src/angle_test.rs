#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn degree_radian_round_trip_for_common_angle() {
    let back = rad_to_deg(deg_to_rad(60.0));
    assert!((back - 60.0).abs() < 1e-12);
}

#[test]
fn heading_uses_y_down_convention() {
    let origin = Point::new(0.0, 0.0);
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert_eq!(heading_deg(origin, Point::new(10.0, 0.0)), 0.0);
    assert!(close(heading_deg(origin, Point::new(0.0, 10.0)), 90.0));
    assert!(close(heading_deg(origin, Point::new(0.0, -10.0)), -90.0));
    assert!(close(heading_deg(origin, Point::new(-10.0, 0.0)), 180.0));
}

#[test]
fn atan_deg_of_equal_legs_is_45() {
    assert!((atan_deg(100.0, 100.0) - 45.0).abs() < 1e-12);
}

#[test]
fn round_tenths_keeps_one_decimal() {
    assert_eq!(round_tenths(36.869_897), 36.9);
    assert_eq!(round_tenths(53.130_102), 53.1);
}
