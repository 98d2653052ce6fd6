//! Chapter 2 state: congruence criteria, CPCTC, and the invalid cases.
//!
//! Nothing here is numeric. The page is three selectors over fixed content;
//! each rule carries the parts of the two triangles it highlights.

#[cfg(test)]
#[path = "chapter2_test.rs"]
mod chapter2_test;

use geometry::Point;
use geometry::triangle::Triangle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chapter2Section {
    #[default]
    Rules,
    Cpctc,
    Invalid,
}

impl Chapter2Section {
    pub const ALL: [Self; 3] = [Self::Rules, Self::Cpctc, Self::Invalid];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rules => "Congruence Rules",
            Self::Cpctc => "CPCTC",
            Self::Invalid => "Invalid Cases",
        }
    }
}

/// A triangle vertex by position: bottom-left, bottom-right, top.
pub type VertexIndex = usize;

/// One highlighted side, with an optional dash pattern to tell sides apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideMark {
    pub from: VertexIndex,
    pub to: VertexIndex,
    pub dash: Option<&'static str>,
    /// Drawn in the secondary highlight color (the leg in HL).
    pub secondary: bool,
}

const fn side(from: VertexIndex, to: VertexIndex) -> SideMark {
    SideMark { from, to, dash: None, secondary: false }
}

const SSS_SIDES: &[SideMark] = &[
    side(0, 1),
    SideMark { from: 0, to: 2, dash: Some("4"), secondary: false },
    SideMark { from: 1, to: 2, dash: Some("2"), secondary: false },
];
const SAS_SIDES: &[SideMark] = &[side(0, 1), side(0, 2)];
const ASA_SIDES: &[SideMark] = &[side(0, 1)];
const AAS_SIDES: &[SideMark] = &[side(0, 2)];
const HL_SIDES: &[SideMark] = &[side(1, 2), SideMark { from: 0, to: 1, dash: None, secondary: true }];

/// Parts of the figure a rule highlights on both triangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleFigure {
    /// Draw right triangles with a corner marker instead of the default shape.
    pub right_triangle: bool,
    pub sides: &'static [SideMark],
    pub angles: &'static [VertexIndex],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CongruenceRule {
    #[default]
    Sss,
    Sas,
    Asa,
    Aas,
    Hl,
}

impl CongruenceRule {
    pub const ALL: [Self; 5] = [Self::Sss, Self::Sas, Self::Asa, Self::Aas, Self::Hl];

    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Sss => "SSS",
            Self::Sas => "SAS",
            Self::Asa => "ASA",
            Self::Aas => "AAS",
            Self::Hl => "HL",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sss => "Side-Side-Side",
            Self::Sas => "Side-Angle-Side",
            Self::Asa => "Angle-Side-Angle",
            Self::Aas => "Angle-Angle-Side",
            Self::Hl => "Hypotenuse-Leg",
        }
    }

    #[must_use]
    pub fn statement(self) -> &'static str {
        match self {
            Self::Sss => {
                "If three sides of one triangle are equal to three sides of another triangle, then the triangles are congruent."
            }
            Self::Sas => {
                "If two sides and the included angle of one triangle are equal to two sides and the included angle of another triangle, then the triangles are congruent."
            }
            Self::Asa => {
                "If two angles and the included side of one triangle are equal to two angles and the included side of another triangle, then the triangles are congruent."
            }
            Self::Aas => {
                "If two angles and a non-included side of one triangle are equal to two angles and the corresponding non-included side of another triangle, then the triangles are congruent."
            }
            Self::Hl => {
                "If the hypotenuse and one leg of a right triangle are equal to the hypotenuse and one leg of another right triangle, then the triangles are congruent."
            }
        }
    }

    #[must_use]
    pub fn insight(self) -> &'static str {
        match self {
            Self::Sss => "SSS is rigid. You cannot deform a triangle made of 3 rigid sticks.",
            Self::Sas => "The angle 'locks' the two sides in place, fixing the third side.",
            Self::Asa => "The two angles fix the direction of the sides, determining where they meet.",
            Self::Aas => "Knowing two angles automatically gives you the third (180° rule), turning it into ASA.",
            Self::Hl => "Specific to right triangles. It's a special case of SSA which works only for right angles.",
        }
    }

    #[must_use]
    pub fn figure(self) -> RuleFigure {
        match self {
            Self::Sss => RuleFigure { right_triangle: false, sides: SSS_SIDES, angles: &[] },
            Self::Sas => RuleFigure { right_triangle: false, sides: SAS_SIDES, angles: &[0] },
            Self::Asa => RuleFigure { right_triangle: false, sides: ASA_SIDES, angles: &[0, 1] },
            Self::Aas => RuleFigure { right_triangle: false, sides: AAS_SIDES, angles: &[2, 1] },
            Self::Hl => RuleFigure { right_triangle: true, sides: HL_SIDES, angles: &[] },
        }
    }

    /// The left and right triangles drawn for this rule (400×200 scene).
    #[must_use]
    pub fn triangles(self) -> [Triangle; 2] {
        let apex_x = if self.figure().right_triangle { 50.0 } else { 100.0 };
        let left = Triangle::new(Point::new(50.0, 150.0), Point::new(150.0, 150.0), Point::new(apex_x, 50.0));
        let right = Triangle::new(left.a.translate(200.0, 0.0), left.b.translate(200.0, 0.0), left.c.translate(200.0, 0.0));
        [left, right]
    }

    /// Number of side and angle measurements the rule requires.
    #[must_use]
    pub fn part_count(self) -> usize {
        match self {
            Self::Hl => 2,
            _ => 3,
        }
    }
}

/// Vertex of `t` by [`VertexIndex`].
#[must_use]
pub fn vertex(t: &Triangle, index: VertexIndex) -> Point {
    match index {
        0 => t.a,
        1 => t.b,
        _ => t.c,
    }
}

// =============================================================================
// CPCTC
// =============================================================================

/// Side pairings in display order: `AB`, `BC`, `AC`.
const SIDE_ORDER: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

/// Corresponding sides of `△first ≅ △second`, e.g. `AB ≅ DE`.
#[must_use]
pub fn corresponding_sides(first: [char; 3], second: [char; 3]) -> Vec<String> {
    SIDE_ORDER
        .iter()
        .map(|&(i, j)| format!("{}{} ≅ {}{}", first[i], first[j], second[i], second[j]))
        .collect()
}

/// Corresponding angles of `△first ≅ △second`, e.g. `∠A ≅ ∠D`.
#[must_use]
pub fn corresponding_angles(first: [char; 3], second: [char; 3]) -> Vec<String> {
    first.iter().zip(second).map(|(a, b)| format!("∠{a} ≅ ∠{b}")).collect()
}

// =============================================================================
// INVALID CASES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidCase {
    #[default]
    Ssa,
    Aaa,
}

impl InvalidCase {
    pub const ALL: [Self; 2] = [Self::Ssa, Self::Aaa];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ssa => "SSA (Ambiguous)",
            Self::Aaa => "AAA (Similar, Not Congruent)",
        }
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Ssa => "Two different triangles with the same SSA!",
            Self::Aaa => "Same angles, different sizes!",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Ssa => "SSA: Cannot Be Determined (CNBD)",
            Self::Aaa => "AAA: Cannot Be Determined (CNBD)",
        }
    }

    #[must_use]
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Ssa => {
                "When you know two sides and an angle NOT between them (Side-Side-Angle), you cannot determine a unique triangle. This is called the Ambiguous Case."
            }
            Self::Aaa => {
                "When you only know three angles (Angle-Angle-Angle), you can have infinitely many triangles with those angles but different sizes."
            }
        }
    }

    /// Heading and body of the follow-up card.
    #[must_use]
    pub fn follow_up(self) -> (&'static str, &'static str) {
        match self {
            Self::Ssa => (
                "Why It Fails",
                "Given two sides and a non-included angle, the third side can \"swing\" to different positions, creating two possible triangles (or sometimes none or one).",
            ),
            Self::Aaa => (
                "Similar vs Congruent",
                "AAA guarantees similarity (same shape), but NOT congruence (same shape AND size).",
            ),
        }
    }

    /// Closing note: the right-triangle exception for SSA, the side requirement for AAA.
    #[must_use]
    pub fn note(self) -> (&'static str, &'static str) {
        match self {
            Self::Ssa => (
                "Exception: Right Triangles",
                "SSA works for right triangles when the right angle is opposite the longest side (hypotenuse). This is why HL (Hypotenuse-Leg) is valid!",
            ),
            Self::Aaa => (
                "Remember",
                "You need at least one side measurement to prove congruence. Angles alone only tell you the shape, not the size.",
            ),
        }
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chapter2State {
    pub section: Chapter2Section,
    pub rule: CongruenceRule,
    pub invalid_case: InvalidCase,
}

impl Chapter2State {
    pub fn set_section(&mut self, section: Chapter2Section) {
        self.section = section;
    }

    pub fn set_rule(&mut self, rule: CongruenceRule) {
        self.rule = rule;
    }

    pub fn set_invalid_case(&mut self, case: InvalidCase) {
        self.invalid_case = case;
    }
}
