//! Bounded numeric slider ranges.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// Inclusive `min..=max` range backing an `<input type="range">`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max, step: 1.0 }
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() { self.min } else { value.clamp(self.min, self.max) }
    }

    /// Parse raw input text and clamp it; `None` when the text is not a number.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().map(|v| self.clamp(v))
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
