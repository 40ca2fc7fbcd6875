#![warn(missing_docs)]

//! parageo — a parametric-geometry kernel for sketch-based CAD.
//!
//! Curves and surfaces are built declaratively from basis matrices and
//! control points on [`SketchPlane`]s, transformed through homogeneous
//! matrices, and sampled on demand into polyline [`Trace`]s, the only
//! interface a rendering layer consumes. Surfaces derive from curves by
//! extrusion, ruling, lofting, revolution, or sweeping, and pairs of
//! surfaces can be intersected by dense sampling.
//!
//! # Example
//!
//! ```
//! use parageo::{
//!     BasisCurve, Curve3, ExtrudedSurface, Offset, Orientation, PlaneRegistry, Point3,
//!     SketchPlane, Surface3,
//! };
//!
//! let mut registry = PlaneRegistry::new();
//! let id = registry.insert(SketchPlane::new(
//!     "base",
//!     Orientation::Xy,
//!     10,
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 100.0, 0.0),
//!     Point3::new(100.0, 0.0, 0.0),
//!     Point3::new(100.0, 100.0, 0.0),
//!     0.0,
//!     0.0,
//!     0.0,
//!     Offset::ZERO,
//!     "blue",
//! ));
//! let plane = registry.get(id).unwrap();
//!
//! let rim = BasisCurve::bezier(
//!     "rim",
//!     &[
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(25.0, 60.0, 0.0),
//!         Point3::new(50.0, 0.0, 0.0),
//!     ],
//!     20,
//!     plane,
//!     "blue",
//! )
//! .unwrap();
//!
//! let mut wall = ExtrudedSurface::new("wall", &rim, 20, "green");
//! wall.scale_q(30.0);
//!
//! assert_eq!(rim.generate_trace().len(), 20);
//! assert_eq!(wall.generate_traces().len(), 40);
//! ```

pub use parageo_geom;
pub use parageo_intersect;
pub use parageo_math;
pub use parageo_surfaces;
pub use parageo_trace;

pub use parageo_geom::{
    basis, BasisCurve, ClosedBSpline, Curve3, CurveKind, GeomError, Orientation, PlaneFrame,
    PlaneId, PlaneRegistry, SketchPlane, Surface3,
};
pub use parageo_intersect::{intersect, Intersection, IntersectionCurve};
pub use parageo_math::{Dir3, Offset, Point3, Tolerance, Transform, Vec3};
pub use parageo_surfaces::{
    ExtrudedSurface, LoftedSurface, RevolvedSurface, RuledSurface, SurfaceError, SweptSurface,
};
pub use parageo_trace::{grid_points, grid_traces, sample_curve, Trace};
