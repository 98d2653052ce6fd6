//! Degree/radian conversion and segment headings.
//!
//! All public angles in this crate are degrees. Radians only appear at the
//! boundary with `f64` trigonometry.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use crate::point::Point;

#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Direction of the segment `from -> to` in degrees, clockwise from +x.
///
/// The result is in `(-180, 180]`; a segment pointing up the screen has a
/// negative heading.
#[must_use]
pub fn heading_deg(from: Point, to: Point) -> f64 {
    rad_to_deg((to.y - from.y).atan2(to.x - from.x))
}

/// Acute angle, in degrees, whose tangent is `opposite / adjacent`.
#[must_use]
pub fn atan_deg(opposite: f64, adjacent: f64) -> f64 {
    rad_to_deg((opposite / adjacent).atan())
}

/// Round to one decimal place for angle readouts.
#[must_use]
pub fn round_tenths(deg: f64) -> f64 {
    (deg * 10.0).round() / 10.0
}
