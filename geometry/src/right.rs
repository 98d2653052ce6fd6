//! Right triangles with a vertical leg `a` and a horizontal leg `b`.
//!
//! The right angle sits at the bottom-left corner; `a` runs up from it and
//! `b` runs right. Every diagram on the right-triangle page (the slider
//! scene, the congruence pair, the special triangles, the median theorem)
//! is one of these placed at a different `top`.

#[cfg(test)]
#[path = "right_test.rs"]
mod right_test;

use serde::{Deserialize, Serialize};

use crate::angle::{atan_deg, round_tenths};
use crate::arc::{open_arc_path, right_angle_marker};
use crate::consts::{EQUAL_LEG_TOLERANCE, SPECIAL_ANGLE_TOLERANCE_DEG};
use crate::point::{Point, points_attr};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightTriangle {
    /// Upper end of the vertical leg.
    pub top: Point,
    /// Vertical leg.
    pub a: f64,
    /// Horizontal leg.
    pub b: f64,
}

impl RightTriangle {
    #[must_use]
    pub fn new(top: Point, a: f64, b: f64) -> Self {
        Self { top, a, b }
    }

    /// The right-angle vertex.
    #[must_use]
    pub fn corner(&self) -> Point {
        self.top.translate(0.0, self.a)
    }

    /// Far end of the horizontal leg.
    #[must_use]
    pub fn base_end(&self) -> Point {
        self.corner().translate(self.b, 0.0)
    }

    #[must_use]
    pub fn hypotenuse(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Acute angle at [`Self::base_end`], opposite leg `a`.
    #[must_use]
    pub fn base_angle(&self) -> f64 {
        atan_deg(self.a, self.b)
    }

    /// Acute angle at [`Self::top`], opposite leg `b`.
    #[must_use]
    pub fn top_angle(&self) -> f64 {
        atan_deg(self.b, self.a)
    }

    /// Matches 30-60-90 when the displayed top angle is within a degree of 30 or 60.
    #[must_use]
    pub fn is_thirty_sixty_ninety(&self) -> bool {
        let top = round_tenths(self.top_angle());
        (top - 30.0).abs() < SPECIAL_ANGLE_TOLERANCE_DEG || (top - 60.0).abs() < SPECIAL_ANGLE_TOLERANCE_DEG
    }

    #[must_use]
    pub fn is_isosceles_right(&self) -> bool {
        (self.a - self.b).abs() < EQUAL_LEG_TOLERANCE
    }

    /// Midpoint of the hypotenuse; equidistant from all three vertices.
    #[must_use]
    pub fn hypotenuse_midpoint(&self) -> Point {
        self.top.midpoint(self.base_end())
    }

    /// Length of the median from the right angle to the hypotenuse.
    #[must_use]
    pub fn median_to_hypotenuse(&self) -> f64 {
        self.corner().distance_to(self.hypotenuse_midpoint())
    }

    /// Square corner marker of side `size` inside the right angle.
    #[must_use]
    pub fn right_angle_path(&self, size: f64) -> String {
        right_angle_marker(self.corner(), size, 1.0, -1.0)
    }

    /// Arc of `radius` at the top vertex, from the vertical leg to the hypotenuse.
    #[must_use]
    pub fn top_arc_path(&self, radius: f64) -> String {
        let (sin, cos) = self.top_angle().to_radians().sin_cos();
        let from = self.top.translate(0.0, radius);
        let to = self.top.translate(radius * sin, radius * cos);
        open_arc_path(from, to, radius, true)
    }

    /// Arc of `radius` at the base vertex, from the horizontal leg to the hypotenuse.
    #[must_use]
    pub fn base_arc_path(&self, radius: f64) -> String {
        let (sin, cos) = self.base_angle().to_radians().sin_cos();
        let end = self.base_end();
        let from = end.translate(-radius, 0.0);
        let to = end.translate(-radius * cos, -radius * sin);
        open_arc_path(from, to, radius, false)
    }

    /// SVG `points` in corner, base end, top order.
    #[must_use]
    pub fn points_attr(&self) -> String {
        points_attr(&[self.corner(), self.base_end(), self.top])
    }
}
