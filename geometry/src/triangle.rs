//! Triangle angle relations and apex placement from two base angles.
//!
//! DESIGN
//! ======
//! The apex of a triangle with a horizontal base `AB` and base angles `A`, `B`
//! follows from the law of sines:
//!
//! ```text
//! height   = |AB| * sin(A) * sin(B) / sin(A + B)
//! offset_x = height / tan(A)
//! ```
//!
//! The formula is only meaningful when the third angle lies strictly inside
//! `(0, 180)`. [`BaseAngleTriangle::solve`] checks that before computing, so a
//! caller holding a `BaseAngleTriangle` always holds a drawable triangle.
//! [`apex_unchecked`] keeps the raw formula for callers that validate on
//! their own terms.

#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;

use serde::{Deserialize, Serialize};

use crate::angle::deg_to_rad;
use crate::consts::STRAIGHT_ANGLE_DEG;
use crate::error::GeometryError;
use crate::point::{Point, points_attr};

/// Third interior angle given the other two.
#[must_use]
pub fn third_angle(a_deg: f64, b_deg: f64) -> f64 {
    STRAIGHT_ANGLE_DEG - a_deg - b_deg
}

/// `true` when two base angles leave a third angle strictly inside `(0, 180)`.
#[must_use]
pub fn is_valid_triangle(a_deg: f64, b_deg: f64) -> bool {
    let c = third_angle(a_deg, b_deg);
    c > 0.0 && c < STRAIGHT_ANGLE_DEG
}

/// Exterior angle at one vertex: the sum of the two remote interior angles.
#[must_use]
pub fn exterior_angle(remote_a_deg: f64, remote_b_deg: f64) -> f64 {
    remote_a_deg + remote_b_deg
}

/// Raw law-of-sines apex above a horizontal base starting at `origin`.
///
/// Performs no validation. Outside the valid range the result may be
/// non-finite (division by `tan(0)` or `sin(180)`) or lie below the base.
#[must_use]
pub fn apex_unchecked(origin: Point, base_len: f64, a_deg: f64, b_deg: f64) -> Point {
    let a = deg_to_rad(a_deg);
    let b = deg_to_rad(b_deg);
    let height = base_len * a.sin() * b.sin() / (a + b).sin();
    Point { x: origin.x + height / a.tan(), y: origin.y - height }
}

/// A triangle with a horizontal base and its apex above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseAngleTriangle {
    /// Left base vertex.
    pub a: Point,
    /// Right base vertex.
    pub b: Point,
    /// Apex opposite the base.
    pub c: Point,
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
}

impl BaseAngleTriangle {
    /// Place the apex for base angles `a_deg` (at `origin`) and `b_deg`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NonPositiveLength`] when `base_len <= 0`, and
    /// [`GeometryError::InvalidTriangle`] when the third angle falls outside
    /// `(0, 180)` or either base angle is not positive.
    pub fn solve(origin: Point, base_len: f64, a_deg: f64, b_deg: f64) -> Result<Self, GeometryError> {
        if base_len.is_nan() || base_len <= 0.0 {
            return Err(GeometryError::NonPositiveLength(base_len));
        }
        let angle_c = third_angle(a_deg, b_deg);
        if a_deg <= 0.0 || b_deg <= 0.0 || !is_valid_triangle(a_deg, b_deg) {
            return Err(GeometryError::InvalidTriangle { a: a_deg, b: b_deg, c: angle_c });
        }
        Ok(Self {
            a: origin,
            b: origin.translate(base_len, 0.0),
            c: apex_unchecked(origin, base_len, a_deg, b_deg),
            angle_a: a_deg,
            angle_b: b_deg,
            angle_c,
        })
    }

    /// Height of the apex above the base.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.a.y - self.c.y
    }

    /// SVG `points` attribute in `A B C` order.
    #[must_use]
    pub fn points_attr(&self) -> String {
        points_attr(&[self.a, self.b, self.c])
    }
}

/// An arbitrary triangle by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Side lengths opposite `a`, `b`, `c` respectively.
    #[must_use]
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        (self.b.distance_to(self.c), self.c.distance_to(self.a), self.a.distance_to(self.b))
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        a + b + c
    }

    /// Unsigned area via the shoelace formula.
    #[must_use]
    pub fn area(&self) -> f64 {
        ((self.b.x - self.a.x) * (self.c.y - self.a.y) - (self.c.x - self.a.x) * (self.b.y - self.a.y)).abs() / 2.0
    }

    /// `true` when `p` lies inside or on the triangle.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let cross = |o: Point, u: Point, v: Point| (u.x - o.x) * (v.y - o.y) - (u.y - o.y) * (v.x - o.x);
        let d1 = cross(self.a, self.b, p);
        let d2 = cross(self.b, self.c, p);
        let d3 = cross(self.c, self.a, p);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    #[must_use]
    pub fn points_attr(&self) -> String {
        points_attr(&[self.a, self.b, self.c])
    }
}

impl From<BaseAngleTriangle> for Triangle {
    fn from(t: BaseAngleTriangle) -> Self {
        Self { a: t.a, b: t.b, c: t.c }
    }
}
