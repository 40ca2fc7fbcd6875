//! Surfaces of revolution.

use parageo_geom::{BasisCurve, Curve3, Surface3};
use parageo_math::{Offset, Point3, Transform, Vec3};
use tracing::debug;

/// A surface of revolution: a profile curve swung about an axis.
///
/// The pivot is the axis curve's start point, evaluated in world space.
/// Relative to the pivot the profile revolves in the plane rotation
/// `(x, y, z) -> (x cos, x sin, z)`: the local y component is projected
/// out, so profiles are expected to be sketched with the revolved
/// cross-section in their local xz. The sweep angle at `w` is
/// `w * rotation_degrees / 60` radians. Neither input curve is mutated.
#[derive(Debug, Clone)]
pub struct RevolvedSurface {
    name: String,
    profile: BasisCurve,
    pivot: Point3,
    angle_scale: f64,
    transform: Transform,
    density: usize,
    color: String,
}

impl RevolvedSurface {
    /// Revolve a profile about an axis curve.
    pub fn new(
        name: impl Into<String>,
        profile: &BasisCurve,
        axis: &BasisCurve,
        rotation_degrees: f64,
        density: usize,
        color: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let pivot = axis.point(0.0);
        debug!(name = %name, profile = profile.name(), axis = axis.name(), "built revolved surface");
        Self {
            name,
            profile: profile.clone(),
            pivot,
            angle_scale: rotation_degrees / 60.0,
            transform: Transform::identity(),
            density,
            color: color.into(),
        }
    }

    /// The profile curve as captured at construction.
    pub fn profile(&self) -> &BasisCurve {
        &self.profile
    }

    /// The world-space pivot the profile revolves about.
    pub fn pivot(&self) -> Point3 {
        self.pivot
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

impl Surface3 for RevolvedSurface {
    fn point(&self, u: f64, w: f64) -> Point3 {
        let p = self.profile.point(u) - self.pivot;
        let theta = w * self.angle_scale;
        let (sin, cos) = theta.sin_cos();
        let revolved = Vec3::new(p.x * cos, p.x * sin, p.z);
        self.transform.apply_point(&(self.pivot + revolved))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> usize {
        self.density
    }
}
