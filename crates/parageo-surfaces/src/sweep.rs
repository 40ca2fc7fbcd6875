//! Swept surfaces: a profile transported along a path curve.

use parageo_geom::{BasisCurve, Curve3, Surface3};
use parageo_math::{Offset, Point3, Tolerance, Transform, Vec3};
use parageo_trace::parameter_steps;
use tracing::debug;

use crate::SurfaceError;

/// A swept surface: a profile cross-section carried along a path.
///
/// Both curves are taken relative to their inherited plane offsets. At
/// each path parameter `w` the profile is turned by
/// `theta(w) = acos(t(w) . y)`, with `t(w)` the unit path tangent, and
/// placed at the path point. The `flipped` flag selects the turn
/// direction. The third row of the cross-section transform carries
/// `z' = y + z`; profiles sketched with their section in local xz are
/// unaffected by the extra term.
#[derive(Debug, Clone)]
pub struct SweptSurface {
    name: String,
    profile: BasisCurve,
    path: BasisCurve,
    profile_offset: Vec3,
    flipped: bool,
    transform: Transform,
    density: usize,
    color: String,
}

impl SweptSurface {
    /// Sweep a profile along a path.
    ///
    /// Fails if the curve densities disagree or the path has a
    /// near-zero tangent anywhere on the construction `w` grid.
    pub fn new(
        name: impl Into<String>,
        profile: &BasisCurve,
        path: &BasisCurve,
        flipped: bool,
        density: usize,
        color: impl Into<String>,
    ) -> Result<Self, SurfaceError> {
        if profile.density() != path.density() {
            return Err(SurfaceError::MismatchedDensities(
                profile.density(),
                path.density(),
            ));
        }
        let tol = Tolerance::DEFAULT;
        for w in parameter_steps(density) {
            if tol.is_zero(path.tangent(w).norm()) {
                return Err(SurfaceError::DegenerateTangent { w });
            }
        }
        let name = name.into();
        debug!(name = %name, profile = profile.name(), path = path.name(), "built swept surface");
        Ok(Self {
            name,
            profile: profile.clone(),
            path: path.clone(),
            profile_offset: profile.frame().offset.as_vec(),
            flipped,
            transform: Transform::identity(),
            density,
            color: color.into(),
        })
    }

    /// The profile curve as captured at construction.
    pub fn profile(&self) -> &BasisCurve {
        &self.profile
    }

    /// The path curve as captured at construction.
    pub fn path(&self) -> &BasisCurve {
        &self.path
    }

    /// Whether the cross-section turns against the tangent angle.
    pub fn flipped(&self) -> bool {
        self.flipped
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

impl Surface3 for SweptSurface {
    fn point(&self, u: f64, w: f64) -> Point3 {
        let c = self.profile.point(u).coords - self.profile_offset;
        let t = self.path.tangent(w).normalize();
        let theta = t.y.clamp(-1.0, 1.0).acos();
        let (sin, cos) = theta.sin_cos();
        let turned = if self.flipped {
            Vec3::new(cos * c.x - sin * c.y, sin * c.x + cos * c.y, c.y + c.z)
        } else {
            Vec3::new(cos * c.x + sin * c.y, -sin * c.x + cos * c.y, c.y + c.z)
        };
        self.transform.apply_point(&(self.path.point(w) + turned))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> usize {
        self.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parageo_geom::{Orientation, SketchPlane};

    fn xz_plane() -> SketchPlane {
        SketchPlane::new(
            "profile plane",
            Orientation::Xz,
            5,
            Point3::new(-100.0, 0.0, -100.0),
            Point3::new(-100.0, 0.0, 100.0),
            Point3::new(100.0, 0.0, -100.0),
            Point3::new(100.0, 0.0, 100.0),
            0.0,
            0.0,
            0.0,
            Offset::ZERO,
            "blue",
        )
    }

    fn xy_plane() -> SketchPlane {
        SketchPlane::new(
            "path plane",
            Orientation::Xy,
            5,
            Point3::new(-100.0, -100.0, 0.0),
            Point3::new(-100.0, 100.0, 0.0),
            Point3::new(100.0, -100.0, 0.0),
            Point3::new(100.0, 100.0, 0.0),
            0.0,
            0.0,
            0.0,
            Offset::ZERO,
            "blue",
        )
    }

    #[test]
    fn test_straight_y_path_translates_profile() {
        // A +y path tangent gives theta = 0, so the profile slides
        // along the path unrotated.
        let profile = BasisCurve::line(
            "profile",
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            40,
            &xz_plane(),
            "blue",
        );
        let path = BasisCurve::line(
            "path",
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 5.0, 0.0),
            40,
            &xy_plane(),
            "blue",
        );
        let surface = SweptSurface::new("swept", &profile, &path, true, 10, "green").unwrap();
        for &(u, w) in &[(0.0, 0.0), (1.0, 0.5), (0.5, 1.0)] {
            let expected = Point3::from(profile.point(u).coords + path.point(w).coords);
            assert!((surface.point(u, w) - expected).norm() < 1e-9, "u={u} w={w}");
        }
    }

    #[test]
    fn test_profile_plane_offset_is_removed() {
        let mut plane = xz_plane();
        plane.translate(Offset::new(0.0, -3.0, 0.0));
        let profile = BasisCurve::line(
            "profile",
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            40,
            &plane,
            "blue",
        );
        let path = BasisCurve::line(
            "path",
            Point3::origin(),
            Point3::new(0.0, 5.0, 0.0),
            40,
            &xy_plane(),
            "blue",
        );
        let surface = SweptSurface::new("swept", &profile, &path, true, 10, "green").unwrap();
        // The cross-section rides on the path, not three units below it.
        let p = surface.point(0.0, 0.0);
        assert!((p - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-9);
    }

    #[test]
    fn test_flip_mirrors_the_turn() {
        let profile = BasisCurve::line(
            "profile",
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            40,
            &xz_plane(),
            "blue",
        );
        // A +x path tangent gives theta = 90 degrees.
        let path = BasisCurve::line(
            "path",
            Point3::origin(),
            Point3::new(5.0, 0.0, 0.0),
            40,
            &xy_plane(),
            "blue",
        );
        let turned = SweptSurface::new("s1", &profile, &path, true, 10, "green").unwrap();
        let mirrored = SweptSurface::new("s2", &profile, &path, false, 10, "green").unwrap();
        // flipped: x stays, y picks up +x; unflipped: y picks up -x.
        let a = turned.point(0.0, 0.0);
        let b = mirrored.point(0.0, 0.0);
        assert!((a.y - 1.0).abs() < 1e-9);
        assert!((b.y + 1.0).abs() < 1e-9);
        assert!(a.x.abs() < 1e-9 && b.x.abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_path_rejected() {
        let profile = BasisCurve::line(
            "profile",
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            40,
            &xz_plane(),
            "blue",
        );
        // A zero-length path has a vanishing tangent everywhere.
        let path = BasisCurve::line(
            "path",
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            40,
            &xy_plane(),
            "blue",
        );
        let err = SweptSurface::new("swept", &profile, &path, true, 10, "green").unwrap_err();
        assert!(matches!(err, SurfaceError::DegenerateTangent { .. }));
    }

    #[test]
    fn test_mismatched_densities_rejected() {
        let profile = BasisCurve::line(
            "profile",
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            40,
            &xz_plane(),
            "blue",
        );
        let path = BasisCurve::line(
            "path",
            Point3::origin(),
            Point3::new(0.0, 5.0, 0.0),
            20,
            &xy_plane(),
            "blue",
        );
        let err = SweptSurface::new("swept", &profile, &path, true, 10, "green").unwrap_err();
        assert!(matches!(err, SurfaceError::MismatchedDensities(40, 20)));
    }

    #[test]
    fn test_curved_path_keeps_section_attached() {
        let profile = BasisCurve::line(
            "profile",
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            40,
            &xz_plane(),
            "blue",
        );
        let path = BasisCurve::bezier(
            "path",
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 3.0, 0.0),
                Point3::new(2.0, 0.5, 0.0),
                Point3::new(3.0, 2.0, 0.0),
            ],
            40,
            &xy_plane(),
            "blue",
        )
        .unwrap();
        let surface = SweptSurface::new("swept", &profile, &path, true, 10, "green").unwrap();
        // The profile's start point lies on the path for every w: its
        // zeroed coordinates are the origin, which every turn fixes.
        for &w in &[0.0, 0.25, 0.6, 1.0] {
            assert!((surface.point(0.0, w) - path.point(w)).norm() < 1e-9);
        }
    }
}
