//! Reusable view components shared by the chapter pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components here take plain values and callbacks. Page state lives in
//! `crate::state`; pages read it and pass the derived geometry down.

pub mod angle_arc;
pub mod concept_card;
pub mod diagram;
pub mod invalid_notice;
pub mod layout;
pub mod page_header;
pub mod range_slider;
pub mod tab_bar;
