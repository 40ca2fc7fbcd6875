#![warn(missing_docs)]

//! Sampled surface-surface intersection.
//!
//! No closed-form solving: both surfaces are flattened over a dense
//! parameter grid and near-coincident point pairs are collected with a
//! per-axis box tolerance. A run with enough matches is summarized by
//! an interpolating spline through four representative points; too few
//! matches is a representable empty result, not an error.

use parageo_geom::{BasisCurve, Curve3, GeomError, SketchPlane, Surface3};
use parageo_math::Point3;
use parageo_trace::{grid_points, Trace};
use rayon::prelude::*;
use tracing::debug;

/// Result of intersecting two surfaces.
///
/// Fewer than four matched points is defined as no intersection; the
/// matches that were found are kept so a caller can distinguish "barely
/// missed" from "disjoint".
#[derive(Debug, Clone)]
pub enum Intersection {
    /// Fewer than four matched points; no curve is produced.
    Empty {
        /// The matches that were found, possibly none.
        matched: Vec<Point3>,
    },
    /// Enough matches to fit an intersection curve.
    Curve(IntersectionCurve),
}

impl Intersection {
    /// Whether no curve was produced.
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty { .. })
    }

    /// Every matched point, in match order, for either outcome.
    pub fn matched_points(&self) -> &[Point3] {
        match self {
            Intersection::Empty { matched } => matched,
            Intersection::Curve(curve) => curve.points(),
        }
    }

    /// The fitted curve, if one was produced.
    pub fn curve(&self) -> Option<&IntersectionCurve> {
        match self {
            Intersection::Empty { .. } => None,
            Intersection::Curve(curve) => Some(curve),
        }
    }
}

/// An intersection summarized as a four-node interpolating spline.
#[derive(Debug, Clone)]
pub struct IntersectionCurve {
    name: String,
    points: Vec<Point3>,
    curve: BasisCurve,
}

impl IntersectionCurve {
    /// Entity name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full matched point list the curve was fitted through.
    ///
    /// Ordered by the traversal of the first surface's grid, not by arc
    /// length, and a point of the second surface may appear once per
    /// first-surface point it matched. Both properties are inherent to
    /// the asymmetric box-tolerance scan.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// The fitted spline.
    pub fn curve(&self) -> &BasisCurve {
        &self.curve
    }

    /// Sample the fitted spline.
    pub fn generate_trace(&self) -> Trace {
        self.curve.generate_trace()
    }
}

/// Intersect two surfaces by dense sampling.
///
/// Both surfaces are sampled over a `density x density` grid. For every
/// point of `surface1`, every point of `surface2` within `tolerance` on
/// each axis independently is collected; the scan is brute force and
/// quadratic in the grid size. Four representative matches (first,
/// one-third, two-thirds, last) seed the fitted spline, which is
/// sketched on `plane`.
pub fn intersect(
    name: impl Into<String>,
    surface1: &dyn Surface3,
    surface2: &dyn Surface3,
    density: usize,
    tolerance: f64,
    plane: &SketchPlane,
) -> Result<Intersection, GeomError> {
    let name = name.into();
    let points1 = grid_points(|u, w| surface1.point(u, w), density);
    let points2 = grid_points(|u, w| surface2.point(u, w), density);

    // Per-point match lists are gathered in parallel and flattened in
    // grid order, so the result is identical to the sequential scan.
    let matched: Vec<Point3> = points1
        .par_iter()
        .map(|p1| {
            points2
                .iter()
                .filter(|p2| {
                    (p1.x - p2.x).abs() < tolerance
                        && (p1.y - p2.y).abs() < tolerance
                        && (p1.z - p2.z).abs() < tolerance
                })
                .copied()
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    debug!(name = %name, matches = matched.len(), "intersection scan finished");

    if matched.len() < 4 {
        return Ok(Intersection::Empty { matched });
    }

    let n = matched.len();
    let nodes = [
        matched[0],
        matched[n / 3],
        matched[(n - 1) * 2 / 3],
        matched[n - 1],
    ];
    let curve = BasisCurve::spline(name.clone(), &nodes, 40, plane, "blue")?;

    Ok(Intersection::Curve(IntersectionCurve {
        name,
        points: matched,
        curve,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parageo_geom::Orientation;
    use parageo_math::Offset;
    use parageo_surfaces::RuledSurface;

    fn base_plane() -> SketchPlane {
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

    /// A planar ruled patch spanning `[x0, x1] x [y0, y1]` at height z.
    fn patch(plane: &SketchPlane, x0: f64, x1: f64, y0: f64, y1: f64, z: f64) -> RuledSurface {
        let c1 = BasisCurve::line(
            "edge1",
            Point3::new(x0, y0, z),
            Point3::new(x0, y1, z),
            10,
            plane,
            "blue",
        );
        let c2 = BasisCurve::line(
            "edge2",
            Point3::new(x1, y0, z),
            Point3::new(x1, y1, z),
            10,
            plane,
            "blue",
        );
        RuledSurface::new("patch", &c1, &c2, 10, "green").unwrap()
    }

    #[test]
    fn test_disjoint_surfaces_are_empty() {
        let plane = base_plane();
        let s1 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.0);
        let s2 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 50.0);
        let result = intersect("x", &s1, &s2, 5, 0.25, &plane).unwrap();
        assert!(result.is_empty());
        assert!(result.matched_points().is_empty());
        assert!(result.curve().is_none());
    }

    #[test]
    fn test_single_shared_corner_is_still_empty() {
        let plane = base_plane();
        let s1 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.0);
        let s2 = patch(&plane, 10.0, 20.0, 10.0, 20.0, 0.0);
        let result = intersect("x", &s1, &s2, 4, 0.1, &plane).unwrap();
        // Only the corner (10, 10, 0) coincides: one match is not a curve.
        assert!(result.is_empty());
        assert_eq!(result.matched_points().len(), 1);
        let p = result.matched_points()[0];
        assert!((p - Point3::new(10.0, 10.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_overlapping_patches_produce_a_curve() {
        let plane = base_plane();
        let s1 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.0);
        let s2 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.0);
        let result = intersect("x", &s1, &s2, 4, 0.1, &plane).unwrap();
        assert!(!result.is_empty());

        // With grid spacing far above the tolerance each point matches
        // exactly its twin, in grid order.
        let matched = result.matched_points();
        assert_eq!(matched.len(), 16);
        for (i, p) in matched.iter().enumerate() {
            let expected = grid_points(|u, w| s1.point(u, w), 4)[i];
            assert!((p - expected).norm() < 1e-9);
        }
    }

    #[test]
    fn test_fitted_spline_passes_through_representatives() {
        let plane = base_plane();
        let s1 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.0);
        let s2 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.0);
        let result = intersect("x", &s1, &s2, 4, 0.1, &plane).unwrap();
        let curve = result.curve().unwrap();
        let matched = curve.points();
        let n = matched.len();

        let spline = curve.curve();
        assert!((spline.point(0.0) - matched[0]).norm() < 1e-9);
        assert!((spline.point(1.0 / 3.0) - matched[n / 3]).norm() < 1e-9);
        assert!((spline.point(2.0 / 3.0) - matched[(n - 1) * 2 / 3]).norm() < 1e-9);
        assert!((spline.point(1.0) - matched[n - 1]).norm() < 1e-9);

        let trace = curve.generate_trace();
        assert_eq!(trace.len(), 40);
    }

    #[test]
    fn test_tight_tolerance_separates_close_surfaces() {
        let plane = base_plane();
        let s1 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.0);
        let s2 = patch(&plane, 0.0, 10.0, 0.0, 10.0, 0.5);
        assert!(intersect("x", &s1, &s2, 5, 0.25, &plane).unwrap().is_empty());
        assert!(!intersect("x", &s1, &s2, 5, 0.75, &plane).unwrap().is_empty());
    }
}
