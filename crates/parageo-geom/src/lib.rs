#![warn(missing_docs)]

//! Sketch planes and basis-matrix curves for the parageo kernel.
//!
//! Geometry here is declarative: a curve or plane is a point-valued
//! function on `[0, 1]` (or `[0, 1] x [0, 1]`), assembled from a fixed
//! basis matrix, control points, and a cached affine transform. Nothing
//! is materialized until a trace is requested.
//!
//! # Example
//!
//! ```
//! use parageo_geom::{BasisCurve, Curve3, Orientation, PlaneRegistry, SketchPlane};
//! use parageo_math::{Offset, Point3};
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
//!
//! let plane = registry.get(id).unwrap();
//! let line = BasisCurve::line(
//!     "edge",
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     20,
//!     plane,
//!     "blue",
//! );
//! let trace = line.generate_trace();
//! assert_eq!(trace.len(), 20);
//! ```

use parageo_math::{Point3, Vec3};
use parageo_trace::{grid_traces, sample_curve, Trace};
use thiserror::Error;

pub mod basis;
mod bspline;
mod curve;
mod plane;

pub use bspline::ClosedBSpline;
pub use curve::{BasisCurve, CurveKind};
pub use plane::{Orientation, PlaneFrame, PlaneId, PlaneRegistry, SketchPlane};

/// Errors from curve and plane construction.
///
/// Constructors fail fast; once construction succeeds, evaluation and
/// sampling are total over the `[0, 1]` domain.
#[derive(Debug, Clone, Error)]
pub enum GeomError {
    /// Curve construction with a control-point count the basis tables
    /// do not cover.
    #[error("unsupported control point count for {kind}: {count}")]
    UnsupportedControlPointCount {
        /// The curve family requested.
        kind: CurveKind,
        /// The offending control-point count.
        count: usize,
    },

    /// Closed B-spline order outside 2..=4.
    #[error("unsupported closed b-spline order: {0} (supported: 2, 3, 4)")]
    UnsupportedOrder(usize),

    /// Closed B-spline with fewer control points than a single segment
    /// spans.
    #[error("closed b-spline needs at least {needed} control points, got {got}")]
    TooFewControlPoints {
        /// Minimum control-point count for the requested order.
        needed: usize,
        /// The offending control-point count.
        got: usize,
    },
}

/// A parametric curve on `u` in `[0, 1]`.
pub trait Curve3: Send + Sync + std::fmt::Debug {
    /// Evaluate the curve at parameter `u`.
    fn point(&self, u: f64) -> Point3;

    /// Tangent vector at parameter `u` (not normalized).
    fn tangent(&self, u: f64) -> Vec3;

    /// Entity name, used by the feature tree to list and remove it.
    fn name(&self) -> &str;

    /// Sample density for [`Curve3::generate_trace`].
    fn density(&self) -> usize;

    /// Sample the curve into an ordered trace of `density` points.
    fn generate_trace(&self) -> Trace {
        sample_curve(|u| self.point(u), self.density())
    }
}

/// A parametric surface on `(u, w)` in `[0, 1] x [0, 1]`.
pub trait Surface3: Send + Sync + std::fmt::Debug {
    /// Evaluate the surface at parameters `(u, w)`.
    fn point(&self, u: f64, w: f64) -> Point3;

    /// Entity name, used by the feature tree to list and remove it.
    fn name(&self) -> &str;

    /// Grid density for [`Surface3::generate_traces`].
    fn density(&self) -> usize;

    /// Sample both iso-parametric families into `2 * density` traces,
    /// the fixed-`w` family first.
    fn generate_traces(&self) -> Vec<Trace> {
        grid_traces(|u, w| self.point(u, w), self.density())
    }
}
