//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting, palette, and logging helpers kept out of components so they
//! can be unit tested without a browser.

pub mod color;
pub mod format;
pub mod transition;
