#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

#[test]
fn endpoints_sit_on_the_circle() {
    let arc = ArcGeometry::new(Point::new(200.0, 150.0), 28.0, 180.0, 240.0);
    assert!((arc.start.distance_to(arc.center) - 28.0).abs() < EPSILON);
    assert!((arc.end.distance_to(arc.center) - 28.0).abs() < EPSILON);
    assert!(point_approx_eq(arc.start, Point::new(172.0, 150.0)));
}

#[test]
fn large_arc_flag_only_beyond_half_turn() {
    let center = Point::new(0.0, 0.0);
    assert!(!ArcGeometry::new(center, 10.0, 0.0, 180.0).large_arc);
    assert!(ArcGeometry::new(center, 10.0, 0.0, 181.0).large_arc);
    assert!(ArcGeometry::new(center, 10.0, 180.0, -1.0).large_arc);
}

#[test]
fn spans_over_full_turn_still_produce_a_path() {
    let arc = ArcGeometry::new(Point::new(0.0, 0.0), 10.0, 0.0, 450.0);
    assert!(arc.large_arc);
    assert!(point_approx_eq(arc.end, Point::new(0.0, 10.0)));
}

#[test]
fn label_sits_outside_the_arc_at_the_mid_angle() {
    let arc = ArcGeometry::new(Point::new(100.0, 100.0), 20.0, 0.0, 90.0);
    let label = arc.label_position();
    assert!((label.distance_to(arc.center) - 32.0).abs() < EPSILON);
    assert!((arc.mid_deg() - 45.0).abs() < EPSILON);
    assert!((label.x - label.y).abs() < EPSILON);
}

#[test]
fn zero_length_arc_is_degenerate_but_well_formed() {
    let arc = ArcGeometry::new(Point::new(10.0, 10.0), 5.0, 30.0, 30.0);
    assert_eq!(arc.start, arc.end);
    assert!(!arc.large_arc);
    let path = arc.wedge_path();
    assert!(path.starts_with("M 10 10 L "));
    assert!(path.ends_with(" Z"));
}

#[test]
fn wedge_path_matches_svg_sector_layout() {
    let path = describe_arc(Point::new(0.0, 0.0), 10.0, 0.0, 0.0);
    assert_eq!(path, "M 0 0 L 10 0 A 10 10 0 0 1 10 0 Z");
}

#[test]
fn open_arc_path_encodes_sweep_direction() {
    let from = Point::new(0.0, 30.0);
    let to = Point::new(18.0, 24.0);
    assert_eq!(open_arc_path(from, to, 30.0, true), "M 0,30 A 30,30 0 0,1 18,24");
    assert_eq!(open_arc_path(from, to, 30.0, false), "M 0,30 A 30,30 0 0,0 18,24");
}

#[test]
fn right_angle_marker_points_into_the_corner() {
    // Vertex at the bottom-left of a right angle whose legs run right and up.
    let path = right_angle_marker(Point::new(50.0, 150.0), 20.0, 1.0, -1.0);
    assert_eq!(path, "M 50 130 L 70 130 L 70 150");
}

#[test]
fn arc_geometry_serializes_to_json() {
    let arc = ArcGeometry::new(Point::new(1.0, 2.0), 3.0, 0.0, 0.0);
    let json = serde_json::to_value(arc).unwrap_or_default();
    assert_eq!(json["radius"], 3.0);
    assert_eq!(json["large_arc"], false);
    assert_eq!(json["center"]["x"], 1.0);
}
