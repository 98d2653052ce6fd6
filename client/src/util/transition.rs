//! Debug logging for page state transitions.
//!
//! Every slider move and tab click goes through a setter on a page state
//! struct; pages call [`record`] right after so the browser console shows
//! the sequence of inputs. Server rendering never mutates state, so the
//! non-hydrate build compiles this to nothing.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

/// Log `page`'s `field` changing to `value` at debug level.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn record(page: &str, field: &str, value: impl std::fmt::Debug) {
    #[cfg(feature = "hydrate")]
    log::debug!("{page}: {field} -> {value:?}");
}
