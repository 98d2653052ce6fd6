//! Shared numeric constants for the geometry crate.

// ── Angles ──────────────────────────────────────────────────────

/// Degrees in a straight angle; interior angles of a triangle sum to this.
pub const STRAIGHT_ANGLE_DEG: f64 = 180.0;

/// Degrees in a right angle.
pub const RIGHT_ANGLE_DEG: f64 = 90.0;

/// Arcs wider than this many degrees need the SVG large-arc flag.
pub const LARGE_ARC_THRESHOLD_DEG: f64 = 180.0;

// ── Labels ──────────────────────────────────────────────────────

/// Radial gap between an angle arc and its label, in SVG units.
pub const ARC_LABEL_OFFSET: f64 = 12.0;

// ── Classification tolerances ───────────────────────────────────

/// Leg/base difference under which an isosceles triangle counts as equilateral.
pub const EQUILATERAL_TOLERANCE: f64 = 5.0;

/// Degrees of slack when matching a right triangle against 30-60-90.
pub const SPECIAL_ANGLE_TOLERANCE_DEG: f64 = 1.0;

/// Leg difference under which a right triangle counts as 45-45-90.
pub const EQUAL_LEG_TOLERANCE: f64 = 1.0;
