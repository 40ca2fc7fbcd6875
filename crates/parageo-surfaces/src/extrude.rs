//! Extruded (cylindrical) surfaces.

use parageo_geom::{BasisCurve, Curve3, Surface3};
use parageo_math::{Dir3, Offset, Point3, Transform};
use tracing::debug;

/// A cylindrical surface: a base curve extruded along its sketch
/// plane's normal.
///
/// `S(u, w) = curve(u) + w * scale * n`, with `n` the unit normal the
/// curve inherited from its plane. The extrusion depth starts at 1 and
/// is adjusted with [`scale_q`](ExtrudedSurface::scale_q).
#[derive(Debug, Clone)]
pub struct ExtrudedSurface {
    name: String,
    curve: BasisCurve,
    normal: Dir3,
    scale: f64,
    transform: Transform,
    density: usize,
    color: String,
}

impl ExtrudedSurface {
    /// Extrude a curve along its inherited plane normal.
    pub fn new(
        name: impl Into<String>,
        curve: &BasisCurve,
        density: usize,
        color: impl Into<String>,
    ) -> Self {
        let name = name.into();
        debug!(name = %name, curve = curve.name(), "built extruded surface");
        Self {
            name,
            normal: curve.frame().normal,
            curve: curve.clone(),
            scale: 1.0,
            transform: Transform::identity(),
            density,
            color: color.into(),
        }
    }

    /// The base curve as captured at construction.
    pub fn curve(&self) -> &BasisCurve {
        &self.curve
    }

    /// Current extrusion depth along the normal.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Display color hint.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Rescale the extrusion depth by `factor`.
    ///
    /// Scaling acts on the normal ray in the curve's local frame, so it
    /// compounds across calls and is unaffected by the curve's rotation
    /// or offset.
    pub fn scale_q(&mut self, factor: f64) {
        self.scale *= factor;
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

impl Surface3 for ExtrudedSurface {
    fn point(&self, u: f64, w: f64) -> Point3 {
        let p = self.curve.point(u) + w * self.scale * self.normal.as_ref();
        self.transform.apply_point(&p)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> usize {
        self.density
    }
}
