#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

// =============================================================
// Defaults
// =============================================================

#[test]
fn chapter1_defaults() {
    let state = Chapter1State::default();
    assert_eq!(state.section, Chapter1Section::Parallel);
    assert_eq!(state.parallel.angle, 60.0);
    assert_eq!(state.parallel.focus, None);
    assert_eq!((state.triangle_sum.alpha, state.triangle_sum.beta), (60.0, 60.0));
    assert_eq!((state.exterior.alpha, state.exterior.beta), (50.0, 60.0));
}

#[test]
fn section_labels_are_distinct() {
    let labels: Vec<_> = Chapter1Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Parallel Lines", "Triangle Angles", "Exterior Angles"]);
}

#[test]
fn switching_sections_keeps_slider_values() {
    let mut state = Chapter1State::default();
    state.triangle_sum.set_alpha(80.0);
    state.set_section(Chapter1Section::Exterior);
    state.set_section(Chapter1Section::TriangleSum);
    assert_eq!(state.triangle_sum.alpha, 80.0);
}

// =============================================================
// Parallel lines
// =============================================================

#[test]
fn transversal_angle_is_clamped() {
    let mut state = ParallelLinesState::default();
    state.set_angle(10.0);
    assert_eq!(state.angle, 30.0);
    state.set_angle(175.0);
    assert_eq!(state.angle, 150.0);
    state.set_angle(95.0);
    assert_eq!(state.angle, 95.0);
}

#[test]
fn no_focus_means_no_highlighting() {
    let state = ParallelLinesState::default();
    assert!((1..=8).all(|label| state.highlight(label).is_none()));
}

#[test]
fn focus_highlights_members_and_dims_the_rest() {
    let mut state = ParallelLinesState::default();
    state.set_focus(Some(AngleRelation::SameSideExterior));
    assert_eq!(state.highlight(1), Some(Highlight::Highlighted));
    assert_eq!(state.highlight(8), Some(Highlight::Highlighted));
    assert_eq!(state.highlight(3), Some(Highlight::Dimmed));
    state.set_focus(None);
    assert_eq!(state.highlight(1), None);
}

#[test]
fn diagram_tracks_the_slider() {
    let mut state = ParallelLinesState::default();
    state.set_angle(120.0);
    let diagram = state.diagram();
    assert_eq!(diagram.angle_deg, 120.0);
    assert!((diagram.measure(1).unwrap_or_default() - 120.0).abs() < EPSILON);
}

// =============================================================
// Triangle angle sum
// =============================================================

#[test]
fn valid_angles_sum_to_180() {
    let mut state = TriangleSumState::default();
    for (a, b) in [(60.0, 60.0), (10.0, 150.0 - 1.0), (45.0, 90.0), (100.0, 30.0)] {
        state.set_alpha(a);
        state.set_beta(b);
        assert!(state.is_valid());
        assert!((state.alpha + state.beta + state.gamma() - 180.0).abs() < EPSILON);
        assert!((state.display_sum() - 180.0).abs() < EPSILON);
    }
}

#[test]
fn triangle_sum_sliders_clamp_to_10_150() {
    let mut state = TriangleSumState::default();
    state.set_alpha(170.0);
    state.set_beta(0.0);
    assert_eq!(state.alpha, 150.0);
    assert_eq!(state.beta, 10.0);
}

#[test]
fn invalid_triangle_has_no_scene() {
    let state = TriangleSumState { alpha: 170.0, beta: 170.0 };
    assert!(!state.is_valid());
    assert!(state.scene().is_err());

    let mut clamped = TriangleSumState::default();
    clamped.set_alpha(170.0);
    clamped.set_beta(170.0);
    assert!(!clamped.is_valid());
    assert!(clamped.scene().is_err());
}

#[test]
fn default_scene_is_equilateral() {
    let scene = TriangleSumState::default().scene().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(scene.triangle.a, TRIANGLE_SUM_ORIGIN);
    assert_eq!(scene.triangle.b, Point::new(300.0, 200.0));
    assert!((scene.triangle.c.x - 200.0).abs() < EPSILON);
    assert_eq!(scene.alpha_arc.start_deg, -60.0);
    assert_eq!(scene.beta_arc.end_deg, 240.0);
}

// =============================================================
// Exterior angle
// =============================================================

#[test]
fn exterior_angle_theorem_over_the_whole_slider_grid() {
    for a in 10..=80 {
        for b in 10..=80 {
            let state = ExteriorAngleState { alpha: f64::from(a), beta: f64::from(b) };
            assert_eq!(state.theta(), state.alpha + state.beta);
            assert!(state.theta_exceeds_alpha());
            assert!(state.theta_exceeds_beta());
            assert!(state.forms_linear_pair());
            assert!(state.is_valid());
        }
    }
}

#[test]
fn exterior_sliders_clamp_to_10_80() {
    let mut state = ExteriorAngleState::default();
    state.set_alpha(95.0);
    state.set_beta(-5.0);
    assert_eq!(state.alpha, 80.0);
    assert_eq!(state.beta, 10.0);
}

#[test]
fn exterior_arcs_measure_their_angles() {
    let state = ExteriorAngleState::default();
    let scene = state.scene().unwrap_or_else(|e| panic!("{e}"));
    let span = |arc: &ArcGeometry| arc.end_deg - arc.start_deg;
    // α arc runs from a negative heading up to 0.
    assert!((span(&scene.alpha_arc) - state.alpha).abs() < 1e-6);
    assert!((span(&scene.beta_arc) - state.beta).abs() < 1e-6);
    assert!((span(&scene.gamma_arc) - state.gamma()).abs() < 1e-6);
    assert!((span(&scene.theta_arc) - state.theta()).abs() < 1e-6);
}

#[test]
fn exterior_extension_runs_past_b() {
    let scene = ExteriorAngleState::default().scene().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(scene.triangle.b, Point::new(320.0, 200.0));
    assert_eq!(scene.extension_end, Point::new(400.0, 200.0));
    assert_eq!(scene.arrow_points()[1], scene.extension_end);
}

#[test]
fn exterior_scene_rejects_invalid_angles() {
    let state = ExteriorAngleState { alpha: 100.0, beta: 90.0 };
    assert!(!state.is_valid());
    assert!(state.scene().is_err());
}
