//! Chapter 4 state: right triangles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every figure on the page is a [`RightTriangle`] placed at a fixed `top`.
//! The Pythagorean section is driven by two leg sliders; the congruence,
//! special-triangle and theorem sections are selectors over fixed figures
//! whose measurements are still computed rather than hand-placed.

#[cfg(test)]
#[path = "chapter4_test.rs"]
mod chapter4_test;

use geometry::Point;
use geometry::right::RightTriangle;

use super::slider::SliderRange;

pub const LEG_RANGE: SliderRange = SliderRange::new(50.0, 300.0);

/// Top vertex of the slider-driven triangle (400×400 scene).
pub const PYTHAGOREAN_TOP: Point = Point { x: 50.0, y: 50.0 };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chapter4Section {
    #[default]
    Pythagorean,
    Congruence,
    Special,
    Theorems,
}

impl Chapter4Section {
    pub const ALL: [Self; 4] = [Self::Pythagorean, Self::Congruence, Self::Special, Self::Theorems];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pythagorean => "Pythagorean Theorem",
            Self::Congruence => "Congruence Rules",
            Self::Special => "Special Triangles",
            Self::Theorems => "Key Theorems",
        }
    }
}

// =============================================================================
// PYTHAGOREAN THEOREM
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PythagoreanState {
    pub a: f64,
    pub b: f64,
}

impl Default for PythagoreanState {
    fn default() -> Self {
        Self { a: 150.0, b: 200.0 }
    }
}

/// Terms of `a² + b² = c²` as displayed, with `c` rounded to a whole number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PythagoreanEquation {
    pub a_squared: f64,
    pub b_squared: f64,
    pub c_rounded: f64,
    pub c_squared_rounded: f64,
}

impl PythagoreanState {
    pub fn set_a(&mut self, a: f64) {
        self.a = LEG_RANGE.clamp(a);
    }

    pub fn set_b(&mut self, b: f64) {
        self.b = LEG_RANGE.clamp(b);
    }

    #[must_use]
    pub fn triangle(&self) -> RightTriangle {
        RightTriangle::new(PYTHAGOREAN_TOP, self.a, self.b)
    }

    #[must_use]
    pub fn hypotenuse(&self) -> f64 {
        self.triangle().hypotenuse()
    }

    #[must_use]
    pub fn equation(&self) -> PythagoreanEquation {
        let c = self.hypotenuse();
        PythagoreanEquation {
            a_squared: self.a * self.a,
            b_squared: self.b * self.b,
            c_rounded: c.round(),
            c_squared_rounded: (c * c).round(),
        }
    }
}

// =============================================================================
// RIGHT TRIANGLE CONGRUENCE
// =============================================================================

/// A side of a [`RightTriangle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RightPart {
    VerticalLeg,
    HorizontalLeg,
    Hypotenuse,
}

impl RightPart {
    #[must_use]
    pub fn endpoints(self, t: &RightTriangle) -> (Point, Point) {
        match self {
            Self::VerticalLeg => (t.corner(), t.top),
            Self::HorizontalLeg => (t.corner(), t.base_end()),
            Self::Hypotenuse => (t.base_end(), t.top),
        }
    }
}

/// What a rule highlights: a primary side, an optional second side, and
/// whether the acute angle at the base end is part of the criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RightRuleFigure {
    pub primary: RightPart,
    pub secondary: Option<RightPart>,
    pub base_angle: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RightCongruenceRule {
    #[default]
    LegLeg,
    LegAngle,
    HypotenuseAngle,
    LegHypotenuse,
}

impl RightCongruenceRule {
    pub const ALL: [Self; 4] = [Self::LegLeg, Self::LegAngle, Self::HypotenuseAngle, Self::LegHypotenuse];

    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::LegLeg => "LL",
            Self::LegAngle => "LA",
            Self::HypotenuseAngle => "HA",
            Self::LegHypotenuse => "LH",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LegLeg => "LL (Leg-Leg)",
            Self::LegAngle => "LA (Leg-Angle)",
            Self::HypotenuseAngle => "HA (Hypotenuse-Angle)",
            Self::LegHypotenuse => "LH (Leg-Hypotenuse)",
        }
    }

    /// General congruence criterion this rule reduces to.
    #[must_use]
    pub fn equivalent(self) -> &'static str {
        match self {
            Self::LegLeg => "SAS",
            Self::LegAngle => "ASA",
            Self::HypotenuseAngle => "AAS",
            Self::LegHypotenuse => "Special SSA",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::LegLeg => "Two right triangles are congruent if their corresponding legs are congruent.",
            Self::LegAngle => "Two right triangles are congruent if a leg and an acute angle are congruent.",
            Self::HypotenuseAngle => {
                "Two right triangles are congruent if the hypotenuse and an acute angle are congruent."
            }
            Self::LegHypotenuse => "Two right triangles are congruent if a leg and the hypotenuse are congruent.",
        }
    }

    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::LegLeg => "The right angle is always the included angle between the legs.",
            Self::LegAngle => "The right angle plus another angle determines the third angle.",
            Self::HypotenuseAngle => "Similar to AAS with the right angle included.",
            Self::LegHypotenuse => "Works because the right angle is opposite the longest side (hypotenuse).",
        }
    }

    #[must_use]
    pub fn figure(self) -> RightRuleFigure {
        match self {
            Self::LegLeg => RightRuleFigure {
                primary: RightPart::VerticalLeg,
                secondary: Some(RightPart::HorizontalLeg),
                base_angle: false,
            },
            Self::LegAngle => RightRuleFigure { primary: RightPart::HorizontalLeg, secondary: None, base_angle: true },
            Self::HypotenuseAngle => {
                RightRuleFigure { primary: RightPart::Hypotenuse, secondary: None, base_angle: true }
            }
            Self::LegHypotenuse => RightRuleFigure {
                primary: RightPart::Hypotenuse,
                secondary: Some(RightPart::HorizontalLeg),
                base_angle: false,
            },
        }
    }
}

/// The congruent pair drawn for every rule (400×250 scene).
#[must_use]
pub fn congruence_pair() -> [RightTriangle; 2] {
    [
        RightTriangle::new(Point::new(30.0, 80.0), 120.0, 100.0),
        RightTriangle::new(Point::new(230.0, 80.0), 120.0, 100.0),
    ]
}

// =============================================================================
// SPECIAL RIGHT TRIANGLES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecialRightTriangle {
    #[default]
    ThirtySixtyNinety,
    FortyFiveFortyFiveNinety,
}

impl SpecialRightTriangle {
    pub const ALL: [Self; 2] = [Self::ThirtySixtyNinety, Self::FortyFiveFortyFiveNinety];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ThirtySixtyNinety => "30-60-90",
            Self::FortyFiveFortyFiveNinety => "45-45-90",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::ThirtySixtyNinety => "#F59E0B",
            Self::FortyFiveFortyFiveNinety => "#06B6D4",
        }
    }

    /// The figure in the 400×350 scene, legs scaled to the side ratios.
    #[must_use]
    pub fn triangle(self) -> RightTriangle {
        match self {
            Self::ThirtySixtyNinety => RightTriangle::new(Point::new(50.0, 127.0), 173.0, 300.0),
            Self::FortyFiveFortyFiveNinety => RightTriangle::new(Point::new(80.0, 60.0), 240.0, 240.0),
        }
    }

    #[must_use]
    pub fn ratio(self) -> &'static str {
        match self {
            Self::ThirtySixtyNinety => "1 : √3 : 2",
            Self::FortyFiveFortyFiveNinety => "1 : 1 : √2",
        }
    }

    #[must_use]
    pub fn ratio_legend(self) -> &'static str {
        match self {
            Self::ThirtySixtyNinety => "short leg : long leg : hypotenuse",
            Self::FortyFiveFortyFiveNinety => "leg : leg : hypotenuse",
        }
    }

    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::ThirtySixtyNinety => "Half of an equilateral triangle! Created by drawing an altitude.",
            Self::FortyFiveFortyFiveNinety => "A right isosceles triangle! Both legs are equal.",
        }
    }

    /// Labels for the vertical leg, the horizontal leg and the hypotenuse.
    #[must_use]
    pub fn side_labels(self) -> [&'static str; 3] {
        match self {
            Self::ThirtySixtyNinety => ["a", "a√3", "2a"],
            Self::FortyFiveFortyFiveNinety => ["a", "a", "a√2"],
        }
    }

    /// Nominal angles at the top and at the base end.
    #[must_use]
    pub fn nominal_angles(self) -> (f64, f64) {
        match self {
            Self::ThirtySixtyNinety => (60.0, 30.0),
            Self::FortyFiveFortyFiveNinety => (45.0, 45.0),
        }
    }
}

// =============================================================================
// KEY THEOREMS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RightTheorem {
    #[default]
    AngleBisector,
    PerpendicularBisector,
    MedianToHypotenuse,
}

impl RightTheorem {
    pub const ALL: [Self; 3] = [Self::AngleBisector, Self::PerpendicularBisector, Self::MedianToHypotenuse];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AngleBisector => "Angle Bisector",
            Self::PerpendicularBisector => "Perpendicular Bisector",
            Self::MedianToHypotenuse => "Median to Hypotenuse",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::AngleBisector => "Angle Bisector Theorem",
            Self::PerpendicularBisector => "Perpendicular Bisector Theorem",
            Self::MedianToHypotenuse => "Median to Hypotenuse Theorem",
        }
    }

    #[must_use]
    pub fn statement(self) -> &'static str {
        match self {
            Self::AngleBisector => "Any point on the angle bisector is equidistant from the two sides of the angle.",
            Self::PerpendicularBisector => {
                "Any point on the perpendicular bisector of a segment is equidistant from the endpoints of that segment."
            }
            Self::MedianToHypotenuse => {
                "In a right triangle, the median to the hypotenuse is half the length of the hypotenuse."
            }
        }
    }

    #[must_use]
    pub fn converse(self) -> &'static str {
        match self {
            Self::AngleBisector => {
                "If a point is in the interior of an angle and is equidistant from the sides, then it lies on the angle bisector."
            }
            Self::PerpendicularBisector => {
                "If a point is equidistant from the endpoints of a segment, then it lies on the perpendicular bisector of that segment."
            }
            Self::MedianToHypotenuse => {
                "If a median of a triangle equals half the side to which it is drawn, then the triangle is a right triangle with the right angle at that vertex."
            }
        }
    }

    /// Equality shown under the diagram.
    #[must_use]
    pub fn conclusion(self) -> &'static str {
        match self {
            Self::AngleBisector => "d₁ = d₂",
            Self::PerpendicularBisector => "PA = PB",
            Self::MedianToHypotenuse => "CM = ½ AB",
        }
    }
}

/// A right angle at `vertex` between a horizontal ray and a vertical ray,
/// with `p` on its bisector and the feet of the perpendiculars from `p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleBisectorDiagram {
    pub vertex: Point,
    pub bisector_end: Point,
    pub p: Point,
    pub horizontal_foot: Point,
    pub vertical_foot: Point,
}

impl AngleBisectorDiagram {
    #[must_use]
    pub fn new() -> Self {
        let vertex = Point::new(200.0, 200.0);
        let p = Point::new(280.0, 120.0);
        Self {
            vertex,
            bisector_end: Point::new(320.0, 80.0),
            p,
            horizontal_foot: p.project_onto_line(vertex, Point::new(350.0, 200.0)),
            vertical_foot: p.project_onto_line(vertex, Point::new(200.0, 50.0)),
        }
    }

    /// Distance from `p` to the horizontal side.
    #[must_use]
    pub fn d1(&self) -> f64 {
        self.p.distance_to(self.horizontal_foot)
    }

    /// Distance from `p` to the vertical side.
    #[must_use]
    pub fn d2(&self) -> f64 {
        self.p.distance_to(self.vertical_foot)
    }
}

impl Default for AngleBisectorDiagram {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment `AB` with `P` on its perpendicular bisector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerpendicularBisectorDiagram {
    pub a: Point,
    pub b: Point,
    pub p: Point,
}

impl Default for PerpendicularBisectorDiagram {
    fn default() -> Self {
        Self { a: Point::new(100.0, 250.0), b: Point::new(300.0, 250.0), p: Point::new(200.0, 100.0) }
    }
}

impl PerpendicularBisectorDiagram {
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }

    #[must_use]
    pub fn pa(&self) -> f64 {
        self.p.distance_to(self.a)
    }

    #[must_use]
    pub fn pb(&self) -> f64 {
        self.p.distance_to(self.b)
    }
}

/// Right triangle for the median-to-hypotenuse theorem (400×350 scene).
#[must_use]
pub fn median_theorem_triangle() -> RightTriangle {
    RightTriangle::new(Point::new(80.0, 80.0), 200.0, 240.0)
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chapter4State {
    pub section: Chapter4Section,
    pub pythagorean: PythagoreanState,
    pub rule: RightCongruenceRule,
    pub special: SpecialRightTriangle,
    pub theorem: RightTheorem,
}

impl Chapter4State {
    pub fn set_section(&mut self, section: Chapter4Section) {
        self.section = section;
    }

    pub fn set_rule(&mut self, rule: RightCongruenceRule) {
        self.rule = rule;
    }

    pub fn set_special(&mut self, special: SpecialRightTriangle) {
        self.special = special;
    }

    pub fn set_theorem(&mut self, theorem: RightTheorem) {
        self.theorem = theorem;
    }
}
