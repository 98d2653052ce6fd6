//! Angle-marker geometry: filled wedges, open arcs, right-angle corners.
//!
//! DESIGN
//! ======
//! Angles are degrees measured clockwise from +x (SVG y-down), and every arc
//! is swept clockwise from `start_deg` to `end_deg`. The large-arc flag is
//! derived from the raw span `|end - start|`, so callers pick the winding by
//! ordering the two angles, not by passing flags.

#[cfg(test)]
#[path = "arc_test.rs"]
mod arc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ARC_LABEL_OFFSET, LARGE_ARC_THRESHOLD_DEG};
use crate::point::Point;

/// Clockwise circular arc around `center`, with its derived endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

impl ArcGeometry {
    #[must_use]
    pub fn new(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> Self {
        Self {
            center,
            radius,
            start_deg,
            end_deg,
            start: center.polar(radius, start_deg),
            end: center.polar(radius, end_deg),
            large_arc: (end_deg - start_deg).abs() > LARGE_ARC_THRESHOLD_DEG,
        }
    }

    /// Angular midpoint of the sweep.
    #[must_use]
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }

    /// Label anchor just outside the arc at its angular midpoint.
    #[must_use]
    pub fn label_position(&self) -> Point {
        self.center.polar(self.radius + ARC_LABEL_OFFSET, self.mid_deg())
    }

    /// Closed sector path: center, out to the start point, around, back.
    #[must_use]
    pub fn wedge_path(&self) -> String {
        format!(
            "M {} {} L {} {} A {r} {r} 0 {} 1 {} {} Z",
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            u8::from(self.large_arc),
            self.end.x,
            self.end.y,
            r = self.radius,
        )
    }
}

/// Sector path for an angle marker; shorthand for [`ArcGeometry::wedge_path`].
#[must_use]
pub fn describe_arc(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> String {
    ArcGeometry::new(center, radius, start_deg, end_deg).wedge_path()
}

/// Open arc stroke of `radius` from `from` to `to`, no fill wedge.
///
/// `clockwise` selects the SVG sweep flag; the short arc is always taken.
#[must_use]
pub fn open_arc_path(from: Point, to: Point, radius: f64, clockwise: bool) -> String {
    format!(
        "M {},{} A {r},{r} 0 0,{} {},{}",
        from.x,
        from.y,
        u8::from(clockwise),
        to.x,
        to.y,
        r = radius,
    )
}

/// Square right-angle marker of side `size` in the corner at `vertex`.
///
/// `toward_x` / `toward_y` are unit signs (`±1`) pointing along the two legs
/// from the vertex, so the marker sits inside the angle.
#[must_use]
pub fn right_angle_marker(vertex: Point, size: f64, toward_x: f64, toward_y: f64) -> String {
    let leg_y = vertex.translate(0.0, toward_y * size);
    let corner = vertex.translate(toward_x * size, toward_y * size);
    let leg_x = vertex.translate(toward_x * size, 0.0);
    format!("M {} {} L {} {} L {} {}", leg_y.x, leg_y.y, corner.x, corner.y, leg_x.x, leg_x.y)
}
