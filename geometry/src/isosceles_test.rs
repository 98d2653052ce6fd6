#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

#[test]
fn default_slider_values_place_the_apex_at_100() {
    let t = IsoscelesTriangle::new(200.0, 200.0);
    assert_eq!(t.apex(), Point::new(200.0, 100.0));
    assert_eq!(t.left_corner(), Point::new(100.0, 300.0));
    assert_eq!(t.right_corner(), Point::new(300.0, 300.0));
    assert_eq!(t.points_attr(), "200,100 100,300 300,300");
}

#[test]
fn legs_are_equal_by_construction() {
    let t = IsoscelesTriangle::new(120.0, 80.0);
    assert!((t.apex().distance_to(t.left_corner()) - t.leg()).abs() < EPSILON);
    assert!((t.apex().distance_to(t.right_corner()) - t.leg()).abs() < EPSILON);
    assert!((t.leg() - 100.0).abs() < EPSILON);
}

#[test]
fn angles_sum_to_180() {
    for height in (50..=280).step_by(10) {
        for base in (50..=300).step_by(10) {
            let t = IsoscelesTriangle::new(f64::from(base), f64::from(height));
            let sum = t.vertex_angle() + 2.0 * t.base_angle();
            assert!((sum - 180.0).abs() < EPSILON);
        }
    }
}

#[test]
fn displayed_angles_at_defaults_sum_to_180() {
    let (base, vertex) = IsoscelesTriangle::new(200.0, 200.0).displayed_angles();
    assert_eq!(base, 63.4);
    assert_eq!(vertex, 53.2);
    assert!((2.0 * base + vertex - 180.0).abs() < EPSILON);
}

#[test]
fn displayed_angles_always_sum_to_180() {
    for height in (50..=280).step_by(10) {
        for base in (50..=300).step_by(10) {
            let (b, v) = IsoscelesTriangle::new(f64::from(base), f64::from(height)).displayed_angles();
            assert!((2.0 * b + v - 180.0).abs() < 1e-6, "base={base} height={height}: {b} {v}");
        }
    }
}

#[test]
fn near_equilateral_height_is_classified_equilateral() {
    let t = IsoscelesTriangle::new(200.0, 173.0);
    assert!((t.leg() - 199.82).abs() < 0.01);
    assert_eq!(t.kind(), TriangleKind::Equilateral);
    assert_eq!(t.kind().title(), "Equilateral Triangle!");
}

#[test]
fn other_heights_stay_isosceles() {
    for height in [100.0, 200.0, 280.0] {
        let t = IsoscelesTriangle::new(200.0, height);
        assert_eq!(t.kind(), TriangleKind::Isosceles, "height {height}");
        assert_eq!(t.kind().title(), "Isosceles Triangle");
    }
}

#[test]
fn equilateral_base_angle_is_sixty() {
    let t = IsoscelesTriangle::new(200.0, 100.0 * 3f64.sqrt());
    assert!((t.base_angle() - 60.0).abs() < EPSILON);
    assert!((t.vertex_angle() - 60.0).abs() < 1e-6);
}
