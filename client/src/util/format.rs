//! Number formatting for diagram labels and theorem readouts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Rounded to a whole number, e.g. `250`.
pub fn whole(value: f64) -> String {
    // Adding +0.0 turns -0.0 into 0.0 so tiny negatives never print "-0".
    format!("{:.0}", value.round() + 0.0)
}

/// One decimal place, e.g. `53.1`.
pub fn tenths(value: f64) -> String {
    format!("{value:.1}")
}

/// Whole degrees, e.g. `60°`.
pub fn degrees(value: f64) -> String {
    format!("{}°", whole(value))
}

/// Degrees to one decimal place, e.g. `36.9°`.
pub fn degrees_tenths(value: f64) -> String {
    format!("{}°", tenths(value))
}

/// A squared term for the Pythagorean readout, e.g. `150²`.
pub fn squared(value: f64) -> String {
    format!("{}²", whole(value))
}
