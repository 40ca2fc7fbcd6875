//! Ruled surfaces between two curves.

use parageo_geom::{BasisCurve, Curve3, Surface3};
use parageo_math::{Offset, Point3, Transform};
use tracing::debug;

use crate::SurfaceError;

/// A ruled surface: straight-line blend between two curves.
///
/// `S(u, w) = (1 - w) * curve1(u) + w * curve2(u)`. Both curves are
/// parametrized on `[0, 1]` by construction; their sample densities
/// must agree.
#[derive(Debug, Clone)]
pub struct RuledSurface {
    name: String,
    curve1: BasisCurve,
    curve2: BasisCurve,
    transform: Transform,
    density: usize,
    color: String,
}

impl RuledSurface {
    /// Rule between two curves.
    pub fn new(
        name: impl Into<String>,
        curve1: &BasisCurve,
        curve2: &BasisCurve,
        density: usize,
        color: impl Into<String>,
    ) -> Result<Self, SurfaceError> {
        if curve1.density() != curve2.density() {
            return Err(SurfaceError::MismatchedDensities(
                curve1.density(),
                curve2.density(),
            ));
        }
        let name = name.into();
        debug!(name = %name, curve1 = curve1.name(), curve2 = curve2.name(), "built ruled surface");
        Ok(Self {
            name,
            curve1: curve1.clone(),
            curve2: curve2.clone(),
            transform: Transform::identity(),
            density,
            color: color.into(),
        })
    }

    /// First boundary curve (the `w = 0` edge).
    pub fn curve1(&self) -> &BasisCurve {
        &self.curve1
    }

    /// Second boundary curve (the `w = 1` edge).
    pub fn curve2(&self) -> &BasisCurve {
        &self.curve2
    }

    /// Display color hint.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Translate the surface in place.
    pub fn translate(&mut self, offset: Offset) {
        self.transform = Transform::translation(offset).then(&self.transform);
    }

    /// Rotate the surface in place (degrees, z-y-x composition).
    pub fn rotate(&mut self, alpha: f64, beta: f64, gamma: f64) {
        self.transform = Transform::rotation_zyx(alpha, beta, gamma).then(&self.transform);
    }
}

impl Surface3 for RuledSurface {
    fn point(&self, u: f64, w: f64) -> Point3 {
        let a = self.curve1.point(u);
        let b = self.curve2.point(u);
        self.transform.apply_point(&(a + w * (b - a)))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> usize {
        self.density
    }
}
