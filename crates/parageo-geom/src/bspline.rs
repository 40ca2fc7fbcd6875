//! Closed uniform B-splines, built piecewise from wraparound segments.

use parageo_math::{Offset, Point3};
use parageo_trace::Trace;
use tracing::debug;

use crate::basis;
use crate::curve::{BasisCurve, CurveKind};
use crate::plane::SketchPlane;
use crate::{Curve3, GeomError};

/// A closed (periodic) uniform B-spline of order 2, 3, or 4.
///
/// Given `n + 1` control points the spline decomposes into `n + 1`
/// polynomial segments. Segment `i` (1-based) spans the `order + 1`
/// control points at wraparound indices `(i - 1 + j) mod (n + 1)` for
/// `j = 0..=order`, all sharing the uniform blending matrix for the
/// chosen order. Each segment is an independent [`BasisCurve`] on the
/// same sketch-plane frame.
#[derive(Debug, Clone)]
pub struct ClosedBSpline {
    name: String,
    order: usize,
    segments: Vec<BasisCurve>,
    density: usize,
    color: String,
}

impl ClosedBSpline {
    /// Build a closed B-spline on a sketch plane.
    ///
    /// Fails if `order` is not 2, 3, or 4, or if there are fewer control
    /// points than `order + 1` (a segment would re-read a point).
    pub fn new(
        name: impl Into<String>,
        order: usize,
        control_points: &[Point3],
        density: usize,
        plane: &SketchPlane,
        color: impl Into<String>,
    ) -> Result<Self, GeomError> {
        let name = name.into();
        let color = color.into();
        let m = basis::closed_bspline(order).ok_or(GeomError::UnsupportedOrder(order))?;
        let count = control_points.len();
        if count < order + 1 {
            return Err(GeomError::TooFewControlPoints {
                needed: order + 1,
                got: count,
            });
        }

        let frame = plane.frame();
        let segments = (1..=count)
            .map(|i| {
                let pts: Vec<Point3> = (0..=order)
                    .map(|j| control_points[(i - 1 + j) % count])
                    .collect();
                BasisCurve::from_basis(
                    format!("{name} sub-curve{i}"),
                    CurveKind::BSpline,
                    m,
                    pts,
                    density,
                    frame.clone(),
                    color.clone(),
                )
            })
            .collect();

        debug!(name = %name, order, segments = count, "built closed b-spline");
        Ok(Self {
            name,
            order,
            segments,
            density,
            color,
        })
    }

    /// Spline name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// B-spline order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Sample density shared by every segment.
    pub fn density(&self) -> usize {
        self.density
    }

    /// Display color hint.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The polynomial segments, one per control point.
    pub fn segments(&self) -> &[BasisCurve] {
        &self.segments
    }

    /// Translate every segment uniformly.
    pub fn translate(&mut self, offset: Offset) {
        for segment in &mut self.segments {
            segment.translate(offset);
        }
    }

    /// Rotate every segment uniformly (degrees, z-y-x composition).
    pub fn rotate(&mut self, alpha: f64, beta: f64, gamma: f64) {
        for segment in &mut self.segments {
            segment.rotate(alpha, beta, gamma);
        }
    }

    /// One trace per segment, in segment order.
    pub fn generate_traces(&self) -> Vec<Trace> {
        self.segments.iter().map(|s| s.generate_trace()).collect()
    }
}
