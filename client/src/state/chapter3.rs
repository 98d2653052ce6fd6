//! Chapter 3 state: isosceles and equilateral triangles.
//!
//! The definitions section is the only numeric one. Special lines and
//! triangle centers are selectors over fixed triangles whose segments and
//! centers come from `geometry::centers`.

#[cfg(test)]
#[path = "chapter3_test.rs"]
mod chapter3_test;

use geometry::Point;
use geometry::centers::{self, CENTERS_TRIANGLE, Cevian, SPECIAL_LINES_TRIANGLE, Segment};
use geometry::isosceles::IsoscelesTriangle;

use super::slider::SliderRange;

pub const HEIGHT_RANGE: SliderRange = SliderRange::new(50.0, 280.0);
pub const BASE_RANGE: SliderRange = SliderRange::new(50.0, 300.0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chapter3Section {
    #[default]
    Basics,
    Theorems,
    Special,
    Centers,
}

impl Chapter3Section {
    pub const ALL: [Self; 4] = [Self::Basics, Self::Theorems, Self::Special, Self::Centers];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basics => "Definitions",
            Self::Theorems => "Base Angle Theorems",
            Self::Special => "Special Lines",
            Self::Centers => "Triangle Centers",
        }
    }
}

// =============================================================================
// DEFINITIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsoscelesState {
    pub height: f64,
    pub base: f64,
}

impl Default for IsoscelesState {
    fn default() -> Self {
        Self { height: 200.0, base: 200.0 }
    }
}

impl IsoscelesState {
    pub fn set_height(&mut self, height: f64) {
        self.height = HEIGHT_RANGE.clamp(height);
    }

    pub fn set_base(&mut self, base: f64) {
        self.base = BASE_RANGE.clamp(base);
    }

    #[must_use]
    pub fn triangle(&self) -> IsoscelesTriangle {
        IsoscelesTriangle::new(self.base, self.height)
    }
}

// =============================================================================
// SPECIAL LINES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecialLine {
    #[default]
    Altitude,
    Median,
    Bisector,
}

impl SpecialLine {
    pub const ALL: [Self; 3] = [Self::Altitude, Self::Median, Self::Bisector];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Altitude => "Altitude",
            Self::Median => "Median",
            Self::Bisector => "Angle Bisector",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Altitude => "Altitude to Base",
            Self::Median => "Median to Base",
            Self::Bisector => "Angle Bisector to Base",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Altitude => "A perpendicular segment from a vertex to the opposite side.",
            Self::Median => "A segment from a vertex to the midpoint of the opposite side.",
            Self::Bisector => "A segment that divides an angle into two equal angles.",
        }
    }

    /// The other two lines this one coincides with in an isosceles triangle.
    #[must_use]
    pub fn also_is(self) -> &'static str {
        match self {
            Self::Altitude => "median and angle bisector",
            Self::Median => "altitude and angle bisector",
            Self::Bisector => "altitude and median",
        }
    }

    #[must_use]
    pub fn cevian(self) -> Cevian {
        match self {
            Self::Altitude => Cevian::Altitude,
            Self::Median => Cevian::Median,
            Self::Bisector => Cevian::AngleBisector,
        }
    }

    /// The line from the apex `A` to `D` on the base of the special-lines triangle.
    #[must_use]
    pub fn apex_segment(self) -> Segment {
        let [from_apex, _, _] = self.cevian().segments(&SPECIAL_LINES_TRIANGLE);
        from_apex
    }
}

/// Converse statements shown under the special-lines theorem.
pub const SPECIAL_LINE_CONVERSES: [&str; 3] = [
    "If a median is also an altitude, the triangle is isosceles.",
    "If an angle bisector is also an altitude, the triangle is isosceles.",
    "If an angle bisector is also a median, the triangle is isosceles.",
];

// =============================================================================
// TRIANGLE CENTERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriangleCenterKind {
    #[default]
    Incenter,
    Orthocenter,
    Centroid,
}

impl TriangleCenterKind {
    pub const ALL: [Self; 3] = [Self::Incenter, Self::Orthocenter, Self::Centroid];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Incenter => "Incenter",
            Self::Orthocenter => "Orthocenter",
            Self::Centroid => "Centroid",
        }
    }

    #[must_use]
    pub fn definition(self) -> &'static str {
        match self {
            Self::Incenter => "The point where all three angle bisectors meet.",
            Self::Orthocenter => "The point where all three altitudes (or their extensions) meet.",
            Self::Centroid => "The point where all three medians meet.",
        }
    }

    #[must_use]
    pub fn property(self) -> &'static str {
        match self {
            Self::Incenter => "Equidistant from all three sides. Center of the inscribed circle.",
            Self::Orthocenter => {
                "Can be inside (acute), on vertex (right), or outside (obtuse) the triangle."
            }
            Self::Centroid => "The \"center of mass\". Divides each median in ratio 2:1 from vertex.",
        }
    }

    /// Short name of the lines that meet at this center, for the summary grid.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Incenter => "∠ bisectors",
            Self::Orthocenter => "Altitudes",
            Self::Centroid => "Medians",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Incenter => "#10B981",
            Self::Orthocenter => "#EC4899",
            Self::Centroid => "#4F46E5",
        }
    }

    #[must_use]
    pub fn cevian(self) -> Cevian {
        match self {
            Self::Incenter => Cevian::AngleBisector,
            Self::Orthocenter => Cevian::Altitude,
            Self::Centroid => Cevian::Median,
        }
    }

    /// The three concurrent segments on the centers triangle.
    #[must_use]
    pub fn segments(self) -> [Segment; 3] {
        self.cevian().segments(&CENTERS_TRIANGLE)
    }

    /// Where the segments meet. `None` only for a degenerate triangle.
    #[must_use]
    pub fn point(self) -> Option<Point> {
        match self {
            Self::Incenter => centers::incenter(&CENTERS_TRIANGLE),
            Self::Orthocenter => centers::orthocenter(&CENTERS_TRIANGLE),
            Self::Centroid => Some(centers::centroid(&CENTERS_TRIANGLE)),
        }
    }
}

/// Radius of the inscribed circle drawn around the incenter.
#[must_use]
pub fn inscribed_radius() -> f64 {
    centers::inradius(&CENTERS_TRIANGLE)
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chapter3State {
    pub section: Chapter3Section,
    pub isosceles: IsoscelesState,
    pub special_line: SpecialLine,
    pub center: TriangleCenterKind,
}

impl Chapter3State {
    pub fn set_section(&mut self, section: Chapter3Section) {
        self.section = section;
    }

    pub fn set_special_line(&mut self, line: SpecialLine) {
        self.special_line = line;
    }

    pub fn set_center(&mut self, center: TriangleCenterKind) {
        self.center = center;
    }
}
