//! Isosceles triangles parametrised by height and base width.
//!
//! The base is horizontal and centered on a fixed column, so the apex always
//! sits directly above the base midpoint and the two legs are equal by
//! construction.

#[cfg(test)]
#[path = "isosceles_test.rs"]
mod isosceles_test;

use serde::{Deserialize, Serialize};

use crate::angle::{atan_deg, round_tenths};
use crate::consts::{EQUILATERAL_TOLERANCE, STRAIGHT_ANGLE_DEG};
use crate::point::{Point, points_attr};

/// Midpoint of the base in the 400×400 scene.
pub const BASE_CENTER: Point = Point { x: 200.0, y: 300.0 };

/// Classification shown next to the interactive triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
}

impl TriangleKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Equilateral => "Equilateral Triangle!",
            Self::Isosceles => "Isosceles Triangle",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Equilateral => "All three sides are equal. All angles are 60°.",
            Self::Isosceles => "Two sides are equal. The base angles are equal.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsoscelesTriangle {
    pub base: f64,
    pub height: f64,
}

impl IsoscelesTriangle {
    #[must_use]
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }

    #[must_use]
    pub fn apex(&self) -> Point {
        BASE_CENTER.translate(0.0, -self.height)
    }

    #[must_use]
    pub fn left_corner(&self) -> Point {
        BASE_CENTER.translate(-self.base / 2.0, 0.0)
    }

    #[must_use]
    pub fn right_corner(&self) -> Point {
        BASE_CENTER.translate(self.base / 2.0, 0.0)
    }

    /// Length of each of the two equal sides.
    #[must_use]
    pub fn leg(&self) -> f64 {
        (self.base / 2.0).hypot(self.height)
    }

    #[must_use]
    pub fn base_angle(&self) -> f64 {
        atan_deg(self.height, self.base / 2.0)
    }

    #[must_use]
    pub fn vertex_angle(&self) -> f64 {
        STRAIGHT_ANGLE_DEG - 2.0 * self.base_angle()
    }

    /// Base and vertex angles as shown on the diagram, to one decimal.
    ///
    /// The vertex angle is derived from the rounded base angle so the three
    /// labels always add up to 180°.
    #[must_use]
    pub fn displayed_angles(&self) -> (f64, f64) {
        let base = round_tenths(self.base_angle());
        (base, round_tenths(STRAIGHT_ANGLE_DEG - 2.0 * base))
    }

    #[must_use]
    pub fn kind(&self) -> TriangleKind {
        if (self.leg() - self.base).abs() < EQUILATERAL_TOLERANCE {
            TriangleKind::Equilateral
        } else {
            TriangleKind::Isosceles
        }
    }

    /// SVG `points` in apex, left, right order.
    #[must_use]
    pub fn points_attr(&self) -> String {
        points_attr(&[self.apex(), self.left_corner(), self.right_corner()])
    }
}
