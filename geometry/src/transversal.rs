//! Angle pairs formed by a transversal crossing two parallel lines.
//!
//! SYSTEM CONTEXT
//! ==============
//! The eight angles are numbered by a fixed convention: at the upper
//! intersection 1 = upper-left, 2 = upper-right, 3 = lower-right,
//! 4 = lower-left; 5–8 repeat the pattern at the lower intersection. Each
//! named relationship is a constant row of [`RELATION_TABLE`]; nothing about
//! membership is computed from the diagram.

#[cfg(test)]
#[path = "transversal_test.rs"]
mod transversal_test;

use serde::{Deserialize, Serialize};

use crate::angle::deg_to_rad;
use crate::arc::ArcGeometry;
use crate::point::Point;

/// An angle label in `1..=8`.
pub type AngleLabel = u8;

/// Every label, in drawing order.
pub const ANGLE_LABELS: [AngleLabel; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Named relationship between angles formed by a transversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleRelation {
    Corresponding,
    AlternateInterior,
    AlternateExterior,
    SameSideInterior,
    SameSideExterior,
}

/// Whether a pair is congruent or sums to 180°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairEquality {
    Congruent,
    Supplementary,
}

/// How one angle renders while a relation is in focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Highlighted,
    Dimmed,
}

/// Fixed membership table, one row per relation.
pub static RELATION_TABLE: [(AngleRelation, &[(AngleLabel, AngleLabel)]); 5] = [
    (AngleRelation::Corresponding, &[(1, 5), (2, 6), (3, 7), (4, 8)]),
    (AngleRelation::AlternateInterior, &[(3, 5), (4, 6)]),
    (AngleRelation::AlternateExterior, &[(1, 7), (2, 8)]),
    (AngleRelation::SameSideInterior, &[(3, 6), (4, 5)]),
    (AngleRelation::SameSideExterior, &[(1, 8), (2, 7)]),
];

impl AngleRelation {
    pub const ALL: [Self; 5] = [
        Self::Corresponding,
        Self::AlternateInterior,
        Self::AlternateExterior,
        Self::SameSideInterior,
        Self::SameSideExterior,
    ];

    /// Label pairs belonging to this relation.
    #[must_use]
    pub fn pairs(self) -> &'static [(AngleLabel, AngleLabel)] {
        RELATION_TABLE
            .iter()
            .find(|(relation, _)| *relation == self)
            .map(|(_, pairs)| *pairs)
            .unwrap_or_default()
    }

    /// Every label that appears in some pair, ascending.
    #[must_use]
    pub fn members(self) -> Vec<AngleLabel> {
        let mut labels: Vec<AngleLabel> = self.pairs().iter().flat_map(|&(a, b)| [a, b]).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    #[must_use]
    pub fn contains(self, label: AngleLabel) -> bool {
        self.pairs().iter().any(|&(a, b)| a == label || b == label)
    }

    #[must_use]
    pub fn equality(self) -> PairEquality {
        match self {
            Self::Corresponding | Self::AlternateInterior | Self::AlternateExterior => PairEquality::Congruent,
            Self::SameSideInterior | Self::SameSideExterior => PairEquality::Supplementary,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Corresponding => "Corresponding Angles",
            Self::AlternateInterior => "Alternate Interior Angles",
            Self::AlternateExterior => "Alternate Exterior Angles",
            Self::SameSideInterior => "Same-Side Interior Angles",
            Self::SameSideExterior => "Same-Side Exterior Angles",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Corresponding => "Angles in the same relative position at each intersection are equal.",
            Self::AlternateInterior => {
                "Pairs of angles on opposite sides of the transversal and between the parallel lines are equal."
            }
            Self::AlternateExterior => {
                "Pairs of angles on opposite sides of the transversal and outside the parallel lines are equal."
            }
            Self::SameSideInterior => {
                "Pairs of angles on the same side of the transversal and between the parallel lines are supplementary (add up to 180°)."
            }
            Self::SameSideExterior => {
                "Pairs of angles on the same side of the transversal and outside the parallel lines are supplementary (add up to 180°)."
            }
        }
    }

    /// Human-readable pair statements, e.g. `∠1 = ∠5` or `∠3 + ∠6 = 180°`.
    #[must_use]
    pub fn pair_statements(self) -> Vec<String> {
        self.pairs()
            .iter()
            .map(|(a, b)| match self.equality() {
                PairEquality::Congruent => format!("∠{a} = ∠{b}"),
                PairEquality::Supplementary => format!("∠{a} + ∠{b} = 180°"),
            })
            .collect()
    }
}

/// Render state of `label` while `relation` is in focus.
#[must_use]
pub fn highlight(relation: AngleRelation, label: AngleLabel) -> Highlight {
    if relation.contains(label) { Highlight::Highlighted } else { Highlight::Dimmed }
}

// =============================================================================
// DIAGRAM
// =============================================================================

/// Pivot of the transversal in the 400×400 scene.
pub const PIVOT: Point = Point { x: 200.0, y: 200.0 };
/// y of the upper parallel line.
pub const UPPER_LINE_Y: f64 = 150.0;
/// y of the lower parallel line.
pub const LOWER_LINE_Y: f64 = 250.0;
/// Half-length of the drawn transversal segment.
pub const TRANSVERSAL_HALF_LENGTH: f64 = 300.0;
/// Arc radius for the angles adjacent to the transversal's direction.
pub const ARC_RADIUS_OUTER: f64 = 28.0;
/// Arc radius for the supplementary angles.
pub const ARC_RADIUS_INNER: f64 = 20.0;
/// Fill for angles congruent to the transversal angle.
pub const ACUTE_COLOR: &str = "#10B981";
/// Fill for the supplementary angles.
pub const OBTUSE_COLOR: &str = "#4F46E5";

/// One of the eight angle markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleMarker {
    pub label: AngleLabel,
    pub arc: ArcGeometry,
    pub color: &'static str,
}

/// Full parametric scene for a transversal at `angle_deg` to the parallels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransversalDiagram {
    pub angle_deg: f64,
    pub transversal_start: Point,
    pub transversal_end: Point,
    pub upper_intersection: Point,
    pub lower_intersection: Point,
    pub markers: Vec<AngleMarker>,
}

impl TransversalDiagram {
    /// Build the scene. Meaningful for angles strictly between 0° and 180°.
    #[must_use]
    pub fn new(angle_deg: f64) -> Self {
        let rad = deg_to_rad(angle_deg);
        let (dx, dy) = (rad.cos() * TRANSVERSAL_HALF_LENGTH, rad.sin() * TRANSVERSAL_HALF_LENGTH);
        let run = (PIVOT.y - UPPER_LINE_Y) / rad.tan();
        let upper = Point::new(PIVOT.x - run, UPPER_LINE_Y);
        let lower = Point::new(PIVOT.x + run, LOWER_LINE_Y);

        let mut markers = Vec::with_capacity(ANGLE_LABELS.len());
        for (offset, center) in [(0, upper), (4, lower)] {
            let quad = [
                (180.0, 180.0 + angle_deg, ARC_RADIUS_OUTER, ACUTE_COLOR),
                (180.0 + angle_deg, 360.0, ARC_RADIUS_INNER, OBTUSE_COLOR),
                (0.0, angle_deg, ARC_RADIUS_OUTER, ACUTE_COLOR),
                (angle_deg, 180.0, ARC_RADIUS_INNER, OBTUSE_COLOR),
            ];
            for (i, (start, end, radius, color)) in (1u8..).zip(quad) {
                markers.push(AngleMarker {
                    label: offset + i,
                    arc: ArcGeometry::new(center, radius, start, end),
                    color,
                });
            }
        }

        Self {
            angle_deg,
            transversal_start: PIVOT.translate(-dx, -dy),
            transversal_end: PIVOT.translate(dx, dy),
            upper_intersection: upper,
            lower_intersection: lower,
            markers,
        }
    }

    /// Measure in degrees of the angle carrying `label`.
    #[must_use]
    pub fn measure(&self, label: AngleLabel) -> Option<f64> {
        self.markers
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.arc.end_deg - m.arc.start_deg)
    }
}
