//! Basis-matrix curves.
//!
//! A [`BasisCurve`] is a polynomial curve `P(u) = U(u) * M * G` on
//! `[0, 1]`: `M` a fixed basis matrix chosen by curve kind and
//! control-point count, `G` the control points. The product `M * G` is
//! collapsed into monomial coefficient rows at construction and the
//! owning sketch plane's frame is composed on top, so evaluation is a
//! Horner pass followed by one affine transform.

use parageo_math::{Offset, Point3, Transform, Vec3};
use tracing::debug;

use crate::basis::{self, BasisMatrix};
use crate::plane::{PlaneFrame, SketchPlane};
use crate::{Curve3, GeomError};

/// The family a [`BasisCurve`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Two-point straight line.
    Line,
    /// Interpolating spline through 3 to 5 nodes.
    Spline,
    /// Bezier curve with 3 to 5 control points.
    Bezier,
    /// One segment of a closed uniform B-spline.
    BSpline,
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CurveKind::Line => "straight line",
            CurveKind::Spline => "spline",
            CurveKind::Bezier => "bezier curve",
            CurveKind::BSpline => "b-spline segment",
        };
        f.write_str(s)
    }
}

/// A polynomial curve with its basis baked in and its sketch-plane frame
/// composed into a cached transform.
#[derive(Debug, Clone)]
pub struct BasisCurve {
    name: String,
    kind: CurveKind,
    control_points: Vec<Point3>,
    /// Monomial coefficient rows of `M * G`, highest power first.
    coeffs: Vec<Vec3>,
    transform: Transform,
    frame: PlaneFrame,
    density: usize,
    color: String,
}

impl BasisCurve {
    /// A straight line between two points.
    pub fn line(
        name: impl Into<String>,
        p0: Point3,
        p1: Point3,
        density: usize,
        plane: &SketchPlane,
        color: impl Into<String>,
    ) -> Self {
        Self::from_basis(
            name,
            CurveKind::Line,
            &basis::LINE,
            vec![p0, p1],
            density,
            plane.frame(),
            color,
        )
    }

    /// An interpolating spline through 3 to 5 nodes.
    ///
    /// The curve passes through every control point, at the uniformly
    /// spaced parameter values `i / (k - 1)`.
    pub fn spline(
        name: impl Into<String>,
        control_points: &[Point3],
        density: usize,
        plane: &SketchPlane,
        color: impl Into<String>,
    ) -> Result<Self, GeomError> {
        let m = basis::spline(control_points.len()).ok_or(
            GeomError::UnsupportedControlPointCount {
                kind: CurveKind::Spline,
                count: control_points.len(),
            },
        )?;
        Ok(Self::from_basis(
            name,
            CurveKind::Spline,
            m,
            control_points.to_vec(),
            density,
            plane.frame(),
            color,
        ))
    }

    /// A Bezier curve over 3 to 5 control points.
    ///
    /// Interpolates the first and last control point; the interior
    /// points shape the curve without lying on it.
    pub fn bezier(
        name: impl Into<String>,
        control_points: &[Point3],
        density: usize,
        plane: &SketchPlane,
        color: impl Into<String>,
    ) -> Result<Self, GeomError> {
        let m = basis::bezier(control_points.len()).ok_or(
            GeomError::UnsupportedControlPointCount {
                kind: CurveKind::Bezier,
                count: control_points.len(),
            },
        )?;
        Ok(Self::from_basis(
            name,
            CurveKind::Bezier,
            m,
            control_points.to_vec(),
            density,
            plane.frame(),
            color,
        ))
    }

    /// Build from an explicit basis matrix and frame.
    ///
    /// The control-point count must equal the basis dimension. The
    /// frame's offset is applied first, then its rotation, matching how
    /// planes position themselves.
    pub(crate) fn from_basis(
        name: impl Into<String>,
        kind: CurveKind,
        m: &BasisMatrix,
        control_points: Vec<Point3>,
        density: usize,
        frame: PlaneFrame,
        color: impl Into<String>,
    ) -> Self {
        let name = name.into();
        debug_assert_eq!(control_points.len(), m.dim);
        let k = m.dim;
        let coeffs = (0..k)
            .map(|row| {
                let mut c = Vec3::zeros();
                for (col, p) in control_points.iter().enumerate() {
                    c += m.at(row, col) * p.coords;
                }
                c
            })
            .collect();
        let transform = frame.transform();
        debug!(name = %name, kind = %kind, points = k, "built curve");
        Self {
            name,
            kind,
            control_points,
            coeffs,
            transform,
            frame,
            density,
            color: color.into(),
        }
    }

    /// Curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which curve family this is.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// The control points the curve was built from, untransformed.
    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Display color hint.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The sketch-plane frame inherited at construction.
    pub fn frame(&self) -> &PlaneFrame {
        &self.frame
    }

    /// Translate the curve in place.
    pub fn translate(&mut self, offset: Offset) {
        self.transform = Transform::translation(offset).then(&self.transform);
    }

    /// Rotate the curve in place (degrees, z-y-x composition).
    pub fn rotate(&mut self, alpha: f64, beta: f64, gamma: f64) {
        self.transform = Transform::rotation_zyx(alpha, beta, gamma).then(&self.transform);
    }

    /// The untransformed polynomial point, before the cached transform.
    fn local_point(&self, u: f64) -> Vec3 {
        let mut p = self.coeffs[0];
        for c in &self.coeffs[1..] {
            p = p * u + c;
        }
        p
    }
}

impl Curve3 for BasisCurve {
    fn point(&self, u: f64) -> Point3 {
        self.transform.apply_point(&Point3::from(self.local_point(u)))
    }

    fn tangent(&self, u: f64) -> Vec3 {
        let k = self.coeffs.len();
        let mut d = (k - 1) as f64 * self.coeffs[0];
        for (i, c) in self.coeffs[1..k - 1].iter().enumerate() {
            d = d * u + (k - 2 - i) as f64 * c;
        }
        self.transform.apply_vec(&d)
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
    use crate::plane::Orientation;
    use parageo_math::Offset;

    fn identity_plane() -> SketchPlane {
        SketchPlane::new(
            "base",
            Orientation::Xy,
            5,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 100.0, 0.0),
            Point3::new(100.0, 0.0, 0.0),
            Point3::new(100.0, 100.0, 0.0),
            0.0,
            0.0,
            0.0,
            Offset::ZERO,
            "blue",
        )
    }

    #[test]
    fn test_line_interpolates_endpoints() {
        let plane = identity_plane();
        let line = BasisCurve::line(
            "l",
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(7.0, 5.0, -1.0),
            9,
            &plane,
            "blue",
        );
        assert!((line.point(0.0) - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-12);
        assert!((line.point(1.0) - Point3::new(7.0, 5.0, -1.0)).norm() < 1e-12);
        assert!((line.point(0.5) - Point3::new(4.0, 3.5, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_bezier_endpoint_interpolation_all_orders() {
        let plane = identity_plane();
        let pts = [
            Point3::new(-20.0, 0.0, -30.0),
            Point3::new(0.0, 0.0, 30.0),
            Point3::new(20.0, 0.0, 0.0),
            Point3::new(50.0, 0.0, 30.0),
            Point3::new(60.0, 0.0, -20.0),
        ];
        for k in 3..=5 {
            let curve = BasisCurve::bezier("b", &pts[..k], 40, &plane, "blue").unwrap();
            assert!((curve.point(0.0) - pts[0]).norm() < 1e-9, "k={k} start");
            assert!((curve.point(1.0) - pts[k - 1]).norm() < 1e-9, "k={k} end");
        }
    }

    #[test]
    fn test_spline_interpolates_all_nodes() {
        let plane = identity_plane();
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 3.0),
            Point3::new(3.0, 0.0, 2.0),
            Point3::new(4.0, 1.0, -1.0),
            Point3::new(6.0, 2.0, 0.5),
        ];
        for k in 3..=5 {
            let curve = BasisCurve::spline("s", &pts[..k], 40, &plane, "blue").unwrap();
            for (i, p) in pts[..k].iter().enumerate() {
                let u = i as f64 / (k - 1) as f64;
                assert!(
                    (curve.point(u) - p).norm() < 1e-9,
                    "k={k} node {i} missed"
                );
            }
        }
    }

    #[test]
    fn test_unsupported_control_point_count() {
        let plane = identity_plane();
        let pts = vec![Point3::origin(); 6];
        let err = BasisCurve::spline("s", &pts, 40, &plane, "blue").unwrap_err();
        assert!(matches!(
            err,
            GeomError::UnsupportedControlPointCount { count: 6, .. }
        ));
        let err = BasisCurve::bezier("b", &pts[..2], 40, &plane, "blue").unwrap_err();
        assert!(matches!(
            err,
            GeomError::UnsupportedControlPointCount { count: 2, .. }
        ));
    }

    #[test]
    fn test_curve_inherits_plane_frame() {
        let mut plane = identity_plane();
        plane.translate(Offset::new(0.0, 0.0, 10.0));
        plane.rotate(90.0, 0.0, 0.0);

        // Offset first, then rotation: (1,0,0) -> (1,0,10) -> Rx(90) -> (1,-10,0).
        let line = BasisCurve::line(
            "l",
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            5,
            &plane,
            "blue",
        );
        let start = line.point(0.0);
        assert!((start - Point3::new(1.0, -10.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_frame_is_snapshot_not_live() {
        let mut plane = identity_plane();
        let line = BasisCurve::line(
            "l",
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            5,
            &plane,
            "blue",
        );
        plane.translate(Offset::new(0.0, 0.0, 50.0));
        // The existing curve keeps the frame it was built with.
        assert!(line.point(0.0).z.abs() < 1e-12);
    }

    #[test]
    fn test_translate_round_trip_restores_trace() {
        let plane = identity_plane();
        let mut curve = BasisCurve::bezier(
            "b",
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 2.0, 0.0),
                Point3::new(3.0, 1.0, 1.0),
            ],
            16,
            &plane,
            "blue",
        )
        .unwrap();
        let before = curve.generate_trace();
        let v = Offset::new(4.0, -2.0, 7.0);
        curve.translate(v);
        curve.translate(v.negate());
        let after = curve.generate_trace();
        for (a, b) in before.iter().zip(after.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_single_axis_rotation_round_trip() {
        let plane = identity_plane();
        let mut curve = BasisCurve::line(
            "l",
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-1.0, 5.0, 0.0),
            8,
            &plane,
            "blue",
        );
        let before = curve.generate_trace();
        curve.rotate(0.0, 0.0, 33.0);
        curve.rotate(0.0, 0.0, -33.0);
        let after = curve.generate_trace();
        for (a, b) in before.iter().zip(after.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_line_tangent_is_chord() {
        let plane = identity_plane();
        let line = BasisCurve::line(
            "l",
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 5.0, 0.0),
            5,
            &plane,
            "blue",
        );
        let t = line.tangent(0.3);
        assert!((t - Vec3::new(0.0, 5.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_tangent_rotates_with_curve() {
        let plane = identity_plane();
        let mut line = BasisCurve::line(
            "l",
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            5,
            &plane,
            "blue",
        );
        line.rotate(0.0, 0.0, 90.0);
        let t = line.tangent(0.5);
        assert!(t.x.abs() < 1e-12);
        assert!((t.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bezier_tangent_matches_finite_difference() {
        let plane = identity_plane();
        let curve = BasisCurve::bezier(
            "b",
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 3.0, 0.0),
                Point3::new(2.0, 0.5, 0.0),
                Point3::new(3.0, 2.0, 0.0),
            ],
            40,
            &plane,
            "blue",
        )
        .unwrap();
        let h = 1e-6;
        let u = 0.4;
        let fd = (curve.point(u + h) - curve.point(u - h)) / (2.0 * h);
        assert!((curve.tangent(u) - fd).norm() < 1e-5);
    }
}
