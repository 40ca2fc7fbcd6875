//! Lofted surfaces over a stack of section curves.

use parageo_geom::{basis, BasisCurve, Curve3, Surface3};
use parageo_math::{Offset, Point3, Transform, Vec3};
use tracing::debug;

use crate::SurfaceError;

/// A lofted surface interpolating 2 to 5 section curves.
///
/// `S(u, w) = W(w) * N * [c_1(u); ...; c_m(u)]`, where `N` is the
/// interpolating blend matrix for `m` sections (linear for two). The
/// surface passes through every section: at `w = i / (m - 1)` it equals
/// section `i + 1`.
#[derive(Debug, Clone)]
pub struct LoftedSurface {
    name: String,
    sections: Vec<BasisCurve>,
    blend: &'static basis::BasisMatrix,
    transform: Transform,
    density: usize,
    color: String,
}

impl LoftedSurface {
    /// Loft across section curves, in stack order.
    ///
    /// All sections must share one sample density.
    pub fn new(
        name: impl Into<String>,
        sections: &[BasisCurve],
        density: usize,
        color: impl Into<String>,
    ) -> Result<Self, SurfaceError> {
        let m = sections.len();
        let blend =
            basis::lofting(m).ok_or(SurfaceError::UnsupportedSectionCount(m))?;
        let first = sections[0].density();
        for section in &sections[1..] {
            if section.density() != first {
                return Err(SurfaceError::MismatchedDensities(first, section.density()));
            }
        }
        let name = name.into();
        debug!(name = %name, sections = m, "built lofted surface");
        Ok(Self {
            name,
            sections: sections.to_vec(),
            blend,
            transform: Transform::identity(),
            density,
            color: color.into(),
        })
    }

    /// The section curves, in stack order.
    pub fn sections(&self) -> &[BasisCurve] {
        &self.sections
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

    /// Blend weights `W(w) * N` across the sections.
    fn weights(&self, w: f64) -> Vec<f64> {
        let m = self.blend.dim;
        (0..m)
            .map(|col| {
                let mut acc = self.blend.at(0, col);
                for row in 1..m {
                    acc = acc * w + self.blend.at(row, col);
                }
                acc
            })
            .collect()
    }
}

impl Surface3 for LoftedSurface {
    fn point(&self, u: f64, w: f64) -> Point3 {
        let weights = self.weights(w);
        let mut p = Vec3::zeros();
        for (section, weight) in self.sections.iter().zip(&weights) {
            p += *weight * section.point(u).coords;
        }
        self.transform.apply_point(&Point3::from(p))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> usize {
        self.density
    }
}
