//! Plane-geometry helpers behind the GeoLearn diagrams.
//!
//! Every function here is pure: numeric parameters in, points, angles,
//! lengths, or SVG path strings out. Coordinates live in SVG space, so `y`
//! grows downward and angles are measured clockwise from the positive x-axis.
//! The `client` crate turns these values into markup; nothing in this crate
//! knows about the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`point`] | `Point` and distance/midpoint/polar helpers |
//! | [`angle`] | Degree/radian conversion and segment headings |
//! | [`arc`] | Angle-marker wedges, open arcs, right-angle corners |
//! | [`triangle`] | Angle sums, validity, apex placement via the law of sines |
//! | [`transversal`] | The fixed angle-pair table and the parallel-lines scene |
//! | [`isosceles`] | Height/base parametrised isosceles triangles |
//! | [`right`] | Right-triangle sides, angles, and special-triangle checks |
//! | [`centers`] | Centroid, incenter, orthocenter and their cevians |
//! | [`consts`] | Shared tolerances and offsets |
//! | [`error`] | [`GeometryError`] |

pub mod angle;
pub mod arc;
pub mod centers;
pub mod consts;
pub mod error;
pub mod isosceles;
pub mod point;
pub mod right;
pub mod transversal;
pub mod triangle;

pub use error::GeometryError;
pub use point::Point;
