//! Chapter 1 state: parallel lines, the triangle angle sum, exterior angles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three independent sections share one page. Each section keeps its own
//! slider values so switching tabs never resets another section.

#[cfg(test)]
#[path = "chapter1_test.rs"]
mod chapter1_test;

use geometry::angle::heading_deg;
use geometry::arc::ArcGeometry;
use geometry::transversal::{AngleLabel, AngleRelation, Highlight, TransversalDiagram, highlight};
use geometry::triangle::{BaseAngleTriangle, exterior_angle, is_valid_triangle, third_angle};
use geometry::{GeometryError, Point};

use super::slider::SliderRange;

pub const TRANSVERSAL_RANGE: SliderRange = SliderRange::new(30.0, 150.0);
pub const TRIANGLE_SUM_RANGE: SliderRange = SliderRange::new(10.0, 150.0);
pub const EXTERIOR_RANGE: SliderRange = SliderRange::new(10.0, 80.0);

/// Left base vertex and base length of the angle-sum triangle (400×250 scene).
pub const TRIANGLE_SUM_ORIGIN: Point = Point { x: 100.0, y: 200.0 };
pub const TRIANGLE_SUM_BASE: f64 = 200.0;

/// Left base vertex and base length of the exterior-angle triangle (450×250 scene).
pub const EXTERIOR_ORIGIN: Point = Point { x: 80.0, y: 200.0 };
pub const EXTERIOR_BASE: f64 = 240.0;
/// How far the base is extended past `B` to form the exterior angle.
pub const EXTENSION_LENGTH: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chapter1Section {
    #[default]
    Parallel,
    TriangleSum,
    Exterior,
}

impl Chapter1Section {
    pub const ALL: [Self; 3] = [Self::Parallel, Self::TriangleSum, Self::Exterior];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Parallel => "Parallel Lines",
            Self::TriangleSum => "Triangle Angles",
            Self::Exterior => "Exterior Angles",
        }
    }
}

// =============================================================================
// PARALLEL LINES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallelLinesState {
    pub angle: f64,
    /// Relation whose concept card is hovered, if any.
    pub focus: Option<AngleRelation>,
}

impl Default for ParallelLinesState {
    fn default() -> Self {
        Self { angle: 60.0, focus: None }
    }
}

impl ParallelLinesState {
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = TRANSVERSAL_RANGE.clamp(angle);
    }

    pub fn set_focus(&mut self, focus: Option<AngleRelation>) {
        self.focus = focus;
    }

    #[must_use]
    pub fn diagram(&self) -> TransversalDiagram {
        TransversalDiagram::new(self.angle)
    }

    /// Render state of `label`; `None` while no relation is focused.
    #[must_use]
    pub fn highlight(&self, label: AngleLabel) -> Option<Highlight> {
        self.focus.map(|relation| highlight(relation, label))
    }
}

// =============================================================================
// TRIANGLE ANGLE SUM
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleSumState {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for TriangleSumState {
    fn default() -> Self {
        Self { alpha: 60.0, beta: 60.0 }
    }
}

/// Drawable angle-sum figure, only produced for a valid triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleSumScene {
    pub triangle: BaseAngleTriangle,
    pub alpha_arc: ArcGeometry,
    pub beta_arc: ArcGeometry,
}

impl TriangleSumState {
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = TRIANGLE_SUM_RANGE.clamp(alpha);
    }

    pub fn set_beta(&mut self, beta: f64) {
        self.beta = TRIANGLE_SUM_RANGE.clamp(beta);
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        third_angle(self.alpha, self.beta)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_triangle(self.alpha, self.beta)
    }

    /// `α + β + γ` as displayed under the theorem.
    #[must_use]
    pub fn display_sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma()
    }

    /// # Errors
    ///
    /// [`GeometryError::InvalidTriangle`] when `α + β >= 180`.
    pub fn scene(&self) -> Result<TriangleSumScene, GeometryError> {
        let triangle = BaseAngleTriangle::solve(TRIANGLE_SUM_ORIGIN, TRIANGLE_SUM_BASE, self.alpha, self.beta)?;
        Ok(TriangleSumScene {
            alpha_arc: ArcGeometry::new(triangle.a, 25.0, -self.alpha, 0.0),
            beta_arc: ArcGeometry::new(triangle.b, 25.0, 180.0, 180.0 + self.beta),
            triangle,
        })
    }
}

// =============================================================================
// EXTERIOR ANGLE
// =============================================================================

/// Remote interior angles `α` (at `A`) and `β` (at the apex `C`).
///
/// The interior angle at `B` is `γ = 180 − α − β` and the exterior angle
/// formed by extending `AB` past `B` is `θ = α + β`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExteriorAngleState {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for ExteriorAngleState {
    fn default() -> Self {
        Self { alpha: 50.0, beta: 60.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExteriorAngleScene {
    pub triangle: BaseAngleTriangle,
    pub extension_end: Point,
    pub alpha_arc: ArcGeometry,
    pub beta_arc: ArcGeometry,
    pub gamma_arc: ArcGeometry,
    pub theta_arc: ArcGeometry,
}

impl ExteriorAngleScene {
    /// Arrowhead at the end of the extended base.
    #[must_use]
    pub fn arrow_points(&self) -> [Point; 3] {
        let tip = self.extension_end;
        [tip.translate(-5.0, -5.0), tip, tip.translate(-5.0, 5.0)]
    }
}

impl ExteriorAngleState {
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = EXTERIOR_RANGE.clamp(alpha);
    }

    pub fn set_beta(&mut self, beta: f64) {
        self.beta = EXTERIOR_RANGE.clamp(beta);
    }

    /// Interior angle at `B`, adjacent to the exterior angle.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        third_angle(self.alpha, self.beta)
    }

    #[must_use]
    pub fn theta(&self) -> f64 {
        exterior_angle(self.alpha, self.beta)
    }

    #[must_use]
    pub fn theta_exceeds_alpha(&self) -> bool {
        self.theta() > self.alpha
    }

    #[must_use]
    pub fn theta_exceeds_beta(&self) -> bool {
        self.theta() > self.beta
    }

    /// `γ + θ = 180`: the interior and exterior angles at `B` form a linear pair.
    #[must_use]
    pub fn forms_linear_pair(&self) -> bool {
        (self.gamma() + self.theta() - 180.0).abs() < 1e-9
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_triangle(self.alpha, self.beta)
    }

    /// # Errors
    ///
    /// [`GeometryError::InvalidTriangle`] when `α + β >= 180`.
    pub fn scene(&self) -> Result<ExteriorAngleScene, GeometryError> {
        if !self.is_valid() {
            return Err(GeometryError::InvalidTriangle { a: self.alpha, b: self.beta, c: self.gamma() });
        }
        let triangle = BaseAngleTriangle::solve(EXTERIOR_ORIGIN, EXTERIOR_BASE, self.alpha, self.gamma())?;
        let (a, b, c) = (triangle.a, triangle.b, triangle.c);
        let b_to_c = heading_deg(b, c);
        Ok(ExteriorAngleScene {
            extension_end: b.translate(EXTENSION_LENGTH, 0.0),
            alpha_arc: ArcGeometry::new(a, 22.0, heading_deg(a, c), 0.0),
            beta_arc: ArcGeometry::new(c, 22.0, heading_deg(c, b), heading_deg(c, a)),
            gamma_arc: ArcGeometry::new(b, 25.0, 180.0, b_to_c + 360.0),
            theta_arc: ArcGeometry::new(b, 35.0, b_to_c, 0.0),
            triangle,
        })
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chapter1State {
    pub section: Chapter1Section,
    pub parallel: ParallelLinesState,
    pub triangle_sum: TriangleSumState,
    pub exterior: ExteriorAngleState,
}

impl Chapter1State {
    pub fn set_section(&mut self, section: Chapter1Section) {
        self.section = section;
    }
}
