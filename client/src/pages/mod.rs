//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each chapter page owns one `RwSignal` of its state struct from
//! `crate::state`, provides it as context, and renders one section at a
//! time. Sections read the signal and delegate drawing to `components`.

pub mod chapter1;
pub mod chapter2;
pub mod chapter3;
pub mod chapter4;
pub mod home;
