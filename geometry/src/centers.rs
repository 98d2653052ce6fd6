//! Triangle centers and the cevians that meet at them.
//!
//! DESIGN
//! ======
//! Each center is the common point of one family of cevians:
//!
//! | Center | Cevian | Foot on the opposite side |
//! |--------|--------|---------------------------|
//! | incenter | angle bisector | divides the side in the ratio of the adjacent sides |
//! | orthocenter | altitude | orthogonal projection of the vertex |
//! | centroid | median | midpoint |
//!
//! Feet are returned so diagrams can draw every cevian from its vertex to
//! the opposite side rather than stopping at the center.

#[cfg(test)]
#[path = "centers_test.rs"]
mod centers_test;

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::triangle::Triangle;

/// Triangle used by the special-lines diagram (isosceles, apex up).
pub const SPECIAL_LINES_TRIANGLE: Triangle =
    Triangle { a: Point { x: 200.0, y: 50.0 }, b: Point { x: 80.0, y: 280.0 }, c: Point { x: 320.0, y: 280.0 } };

/// Triangle used by the centers diagram.
pub const CENTERS_TRIANGLE: Triangle =
    Triangle { a: Point { x: 200.0, y: 50.0 }, b: Point { x: 60.0, y: 300.0 }, c: Point { x: 340.0, y: 300.0 } };

/// A family of segments from each vertex to the opposite side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cevian {
    Altitude,
    Median,
    AngleBisector,
}

/// A segment from `vertex` to `foot` on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub vertex: Point,
    pub foot: Point,
}

impl Cevian {
    /// Foot of this cevian from `vertex` onto the side `p`–`q`.
    #[must_use]
    pub fn foot(self, vertex: Point, p: Point, q: Point) -> Point {
        match self {
            Self::Altitude => vertex.project_onto_line(p, q),
            Self::Median => p.midpoint(q),
            Self::AngleBisector => {
                let vp = vertex.distance_to(p);
                let vq = vertex.distance_to(q);
                let total = vp + vq;
                if total == 0.0 { p } else { p.lerp(q, vp / total) }
            }
        }
    }

    /// The three cevians of `t`, from `a`, `b`, `c` in that order.
    #[must_use]
    pub fn segments(self, t: &Triangle) -> [Segment; 3] {
        [
            Segment { vertex: t.a, foot: self.foot(t.a, t.b, t.c) },
            Segment { vertex: t.b, foot: self.foot(t.b, t.c, t.a) },
            Segment { vertex: t.c, foot: self.foot(t.c, t.a, t.b) },
        ]
    }
}

/// Intersection of the three medians.
#[must_use]
pub fn centroid(t: &Triangle) -> Point {
    Point::new((t.a.x + t.b.x + t.c.x) / 3.0, (t.a.y + t.b.y + t.c.y) / 3.0)
}

/// Intersection of the three angle bisectors, or `None` for a degenerate triangle.
#[must_use]
pub fn incenter(t: &Triangle) -> Option<Point> {
    let (a, b, c) = t.side_lengths();
    let p = a + b + c;
    if p == 0.0 {
        return None;
    }
    Some(Point::new((a * t.a.x + b * t.b.x + c * t.c.x) / p, (a * t.a.y + b * t.b.y + c * t.c.y) / p))
}

/// Radius of the inscribed circle.
#[must_use]
pub fn inradius(t: &Triangle) -> f64 {
    let p = t.perimeter();
    if p == 0.0 { 0.0 } else { 2.0 * t.area() / p }
}

/// Center of the circumscribed circle, or `None` when the vertices are collinear.
#[must_use]
pub fn circumcenter(t: &Triangle) -> Option<Point> {
    let (a, b, c) = (t.a, t.b, t.c);
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == 0.0 {
        return None;
    }
    let (a2, b2, c2) = (a.x * a.x + a.y * a.y, b.x * b.x + b.y * b.y, c.x * c.x + c.y * c.y);
    Some(Point::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    ))
}

/// Intersection of the three altitudes, or `None` when the vertices are collinear.
///
/// Uses the Euler-line identity `H = A + B + C - 2·O`.
#[must_use]
pub fn orthocenter(t: &Triangle) -> Option<Point> {
    let o = circumcenter(t)?;
    Some(Point::new(t.a.x + t.b.x + t.c.x - 2.0 * o.x, t.a.y + t.b.y + t.c.y - 2.0 * o.y))
}
