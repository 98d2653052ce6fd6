#![allow(clippy::float_cmp)]

use super::*;
use geometry::isosceles::TriangleKind;

const EPSILON: f64 = 1e-9;

fn close(p: Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chapter3_defaults() {
    let state = Chapter3State::default();
    assert_eq!(state.section, Chapter3Section::Basics);
    assert_eq!((state.isosceles.height, state.isosceles.base), (200.0, 200.0));
    assert_eq!(state.special_line, SpecialLine::Altitude);
    assert_eq!(state.center, TriangleCenterKind::Incenter);
}

#[test]
fn section_labels() {
    let labels: Vec<_> = Chapter3Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Definitions", "Base Angle Theorems", "Special Lines", "Triangle Centers"]);
}

// =============================================================
// Definitions
// =============================================================

#[test]
fn isosceles_sliders_clamp() {
    let mut state = IsoscelesState::default();
    state.set_height(10.0);
    state.set_base(500.0);
    assert_eq!(state.height, 50.0);
    assert_eq!(state.base, 300.0);
    state.set_height(400.0);
    state.set_base(0.0);
    assert_eq!(state.height, 280.0);
    assert_eq!(state.base, 50.0);
}

#[test]
fn default_triangle_geometry() {
    let t = IsoscelesState::default().triangle();
    assert_eq!(t.apex(), Point::new(200.0, 100.0));
    assert_eq!(t.left_corner(), Point::new(100.0, 300.0));
    assert_eq!(t.right_corner(), Point::new(300.0, 300.0));
    assert!((t.base_angle() * 2.0 + t.vertex_angle() - 180.0).abs() < EPSILON);
    assert_eq!(t.kind(), TriangleKind::Isosceles);
}

#[test]
fn equilateral_height_is_detected() {
    let mut state = IsoscelesState::default();
    // 200·√3/2 ≈ 173.2
    state.set_height(173.0);
    assert_eq!(state.triangle().kind(), TriangleKind::Equilateral);
    assert_eq!(state.triangle().kind().title(), "Equilateral Triangle!");
    state.set_height(120.0);
    assert_eq!(state.triangle().kind().title(), "Isosceles Triangle");
}

// =============================================================
// Special lines
// =============================================================

#[test]
fn special_lines_from_the_apex_coincide() {
    for line in SpecialLine::ALL {
        let segment = line.apex_segment();
        assert_eq!(segment.vertex, SPECIAL_LINES_TRIANGLE.a);
        assert!(close(segment.foot, 200.0, 280.0), "{line:?}: {:?}", segment.foot);
    }
}

#[test]
fn each_line_names_the_other_two() {
    for line in SpecialLine::ALL {
        let also = line.also_is();
        let others: Vec<_> = SpecialLine::ALL.iter().filter(|other| **other != line).collect();
        assert_eq!(others.len(), 2);
        for other in others {
            assert!(also.contains(&other.label().to_lowercase()), "{line:?} -> {also}");
        }
    }
}

// =============================================================
// Triangle centers
// =============================================================

#[test]
fn center_colors_and_cevians() {
    assert_eq!(TriangleCenterKind::Incenter.color(), "#10B981");
    assert_eq!(TriangleCenterKind::Orthocenter.color(), "#EC4899");
    assert_eq!(TriangleCenterKind::Centroid.color(), "#4F46E5");
    assert_eq!(TriangleCenterKind::Incenter.cevian(), Cevian::AngleBisector);
    assert_eq!(TriangleCenterKind::Orthocenter.cevian(), Cevian::Altitude);
    assert_eq!(TriangleCenterKind::Centroid.cevian(), Cevian::Median);
}

#[test]
fn centers_lie_on_the_symmetry_axis_inside_the_triangle() {
    for kind in TriangleCenterKind::ALL {
        let p = kind.point().unwrap_or_else(|| panic!("{kind:?} missing"));
        assert!((p.x - 200.0).abs() < 1e-6, "{kind:?}: {p:?}");
        assert!(CENTERS_TRIANGLE.contains(p), "{kind:?}: {p:?}");
    }
}

#[test]
fn orthocenter_position() {
    let p = TriangleCenterKind::Orthocenter.point().unwrap_or_else(|| panic!("orthocenter"));
    assert!(close(p, 200.0, 221.6));
}

#[test]
fn every_segment_passes_through_its_center() {
    for kind in TriangleCenterKind::ALL {
        let p = kind.point().unwrap_or_else(|| panic!("{kind:?} missing"));
        for segment in kind.segments() {
            assert!(p.distance_to_line(segment.vertex, segment.foot) < 1e-6, "{kind:?}");
        }
    }
}

#[test]
fn inscribed_circle_touches_the_base() {
    let p = TriangleCenterKind::Incenter.point().unwrap_or_else(|| panic!("incenter"));
    assert!((p.y + inscribed_radius() - 300.0).abs() < 1e-6);
}
