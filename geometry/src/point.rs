#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

use crate::angle::deg_to_rad;

/// A point in SVG user space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `radius` units from `self` along `deg` (clockwise from +x).
    #[must_use]
    pub fn polar(self, radius: f64, deg: f64) -> Self {
        let rad = deg_to_rad(deg);
        Self { x: self.x + radius * rad.cos(), y: self.y + radius * rad.sin() }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }

    /// Linear interpolation; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self { x: self.x + (other.x - self.x) * t, y: self.y + (other.y - self.y) * t }
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Perpendicular distance from `self` to the infinite line through `a` and `b`.
    ///
    /// Returns the plain distance to `a` when `a` and `b` coincide.
    #[must_use]
    pub fn distance_to_line(self, a: Self, b: Self) -> f64 {
        let len = a.distance_to(b);
        if len == 0.0 {
            return self.distance_to(a);
        }
        ((b.x - a.x) * (a.y - self.y) - (a.x - self.x) * (b.y - a.y)).abs() / len
    }

    /// Orthogonal projection of `self` onto the line through `a` and `b`.
    #[must_use]
    pub fn project_onto_line(self, a: Self, b: Self) -> Self {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return a;
        }
        let t = ((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq;
        a.lerp(b, t)
    }

    /// `true` when both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Format points as an SVG `points` attribute: `"x1,y1 x2,y2 …"`.
#[must_use]
pub fn points_attr(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}
