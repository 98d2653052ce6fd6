//! Error type for geometry constructions that can fail.

/// Error returned when a construction has no well-formed result.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The base angles leave no room for a third angle in `(0, 180)`.
    #[error("invalid triangle: {a}° + {b}° leaves a third angle of {c}°")]
    InvalidTriangle { a: f64, b: f64, c: f64 },
    /// A side length that must be positive was zero, negative, or NaN.
    #[error("length must be positive, got {0}")]
    NonPositiveLength(f64),
}
