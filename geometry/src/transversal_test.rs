#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

#[test]
fn relation_table_matches_the_numbering_convention() {
    assert_eq!(AngleRelation::Corresponding.pairs(), &[(1, 5), (2, 6), (3, 7), (4, 8)]);
    assert_eq!(AngleRelation::AlternateInterior.pairs(), &[(3, 5), (4, 6)]);
    assert_eq!(AngleRelation::AlternateExterior.pairs(), &[(1, 7), (2, 8)]);
    assert_eq!(AngleRelation::SameSideInterior.pairs(), &[(3, 6), (4, 5)]);
    assert_eq!(AngleRelation::SameSideExterior.pairs(), &[(1, 8), (2, 7)]);
}

#[test]
fn every_relation_appears_exactly_once_in_the_table() {
    for relation in AngleRelation::ALL {
        let rows = RELATION_TABLE.iter().filter(|(r, _)| *r == relation).count();
        assert_eq!(rows, 1, "{relation:?}");
    }
}

#[test]
fn interior_relations_only_touch_interior_angles() {
    let interior = [3, 4, 5, 6];
    for relation in [AngleRelation::AlternateInterior, AngleRelation::SameSideInterior] {
        assert!(relation.members().iter().all(|l| interior.contains(l)), "{relation:?}");
    }
    for relation in [AngleRelation::AlternateExterior, AngleRelation::SameSideExterior] {
        assert!(relation.members().iter().all(|l| !interior.contains(l)), "{relation:?}");
    }
}

#[test]
fn highlight_partitions_all_eight_labels() {
    for relation in AngleRelation::ALL {
        let highlighted: Vec<AngleLabel> = ANGLE_LABELS
            .iter()
            .copied()
            .filter(|&l| highlight(relation, l) == Highlight::Highlighted)
            .collect();
        let dimmed = ANGLE_LABELS.iter().filter(|&&l| highlight(relation, l) == Highlight::Dimmed).count();
        assert_eq!(highlighted, relation.members());
        assert_eq!(highlighted.len() + dimmed, ANGLE_LABELS.len());
    }
}

#[test]
fn corresponding_highlights_everything() {
    assert_eq!(AngleRelation::Corresponding.members(), ANGLE_LABELS.to_vec());
    assert_eq!(highlight(AngleRelation::AlternateInterior, 1), Highlight::Dimmed);
    assert_eq!(highlight(AngleRelation::AlternateInterior, 5), Highlight::Highlighted);
}

#[test]
fn pair_statements_follow_equality_kind() {
    assert_eq!(AngleRelation::AlternateInterior.pair_statements(), vec!["∠3 = ∠5", "∠4 = ∠6"]);
    assert_eq!(AngleRelation::SameSideInterior.pair_statements(), vec!["∠3 + ∠6 = 180°", "∠4 + ∠5 = 180°"]);
    assert_eq!(AngleRelation::SameSideExterior.equality(), PairEquality::Supplementary);
    assert_eq!(AngleRelation::AlternateExterior.equality(), PairEquality::Congruent);
}

#[test]
fn relation_serializes_as_snake_case() {
    let json = serde_json::to_string(&AngleRelation::SameSideInterior).unwrap_or_default();
    assert_eq!(json, "\"same_side_interior\"");
}

#[test]
fn diagram_has_eight_markers_in_label_order() {
    let diagram = TransversalDiagram::new(60.0);
    let labels: Vec<AngleLabel> = diagram.markers.iter().map(|m| m.label).collect();
    assert_eq!(labels, ANGLE_LABELS.to_vec());
}

#[test]
fn marker_measures_follow_the_transversal_angle() {
    for angle in 30..=150 {
        let theta = f64::from(angle);
        let diagram = TransversalDiagram::new(theta);
        for label in [1, 3, 5, 7] {
            let m = diagram.measure(label).unwrap_or(f64::NAN);
            assert!((m - theta).abs() < EPSILON, "∠{label} at {theta}");
        }
        for label in [2, 4, 6, 8] {
            let m = diagram.measure(label).unwrap_or(f64::NAN);
            assert!((m - (180.0 - theta)).abs() < EPSILON, "∠{label} at {theta}");
        }
    }
}

#[test]
fn paired_angles_measure_as_their_relation_claims() {
    let diagram = TransversalDiagram::new(72.0);
    for relation in AngleRelation::ALL {
        for &(a, b) in relation.pairs() {
            let ma = diagram.measure(a).unwrap_or(f64::NAN);
            let mb = diagram.measure(b).unwrap_or(f64::NAN);
            match relation.equality() {
                PairEquality::Congruent => assert!((ma - mb).abs() < EPSILON),
                PairEquality::Supplementary => assert!((ma + mb - 180.0).abs() < EPSILON),
            }
        }
    }
}

#[test]
fn intersections_lie_on_the_parallels_and_the_transversal() {
    let diagram = TransversalDiagram::new(60.0);
    assert_eq!(diagram.upper_intersection.y, UPPER_LINE_Y);
    assert_eq!(diagram.lower_intersection.y, LOWER_LINE_Y);
    let upper_off = diagram
        .upper_intersection
        .distance_to_line(diagram.transversal_start, diagram.transversal_end);
    let lower_off = diagram
        .lower_intersection
        .distance_to_line(diagram.transversal_start, diagram.transversal_end);
    assert!(upper_off < 1e-6);
    assert!(lower_off < 1e-6);
    assert!(diagram.upper_intersection.x < PIVOT.x);
}

#[test]
fn perpendicular_transversal_crosses_at_the_pivot_column() {
    let diagram = TransversalDiagram::new(90.0);
    assert!((diagram.upper_intersection.x - PIVOT.x).abs() < 1e-6);
    assert!((diagram.lower_intersection.x - PIVOT.x).abs() < 1e-6);
}

#[test]
fn unknown_label_has_no_measure() {
    assert_eq!(TransversalDiagram::new(60.0).measure(9), None);
}

#[test]
fn acute_and_obtuse_markers_use_distinct_colors() {
    let diagram = TransversalDiagram::new(60.0);
    assert_eq!(diagram.markers[0].color, ACUTE_COLOR);
    assert_eq!(diagram.markers[1].color, OBTUSE_COLOR);
    assert_eq!(diagram.markers[0].arc.radius, ARC_RADIUS_OUTER);
    assert_eq!(diagram.markers[1].arc.radius, ARC_RADIUS_INNER);
}
