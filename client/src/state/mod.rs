//! Page state machines, one module per chapter.
//!
//! DESIGN
//! ======
//! Each chapter page owns a single `RwSignal` over a plain struct from this
//! module. Structs expose setters that clamp slider input to the declared
//! range and getters that recompute derived geometry on every call, so all
//! page logic is testable without a browser.

pub mod chapter1;
pub mod chapter2;
pub mod chapter3;
pub mod chapter4;
pub mod slider;
