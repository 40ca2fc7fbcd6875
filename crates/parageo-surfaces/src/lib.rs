#![warn(missing_docs)]

//! Derived surfaces for the parageo kernel.
//!
//! Every surface here composes one or more base curves into a
//! point-valued function `S(u, w)` on `[0, 1] x [0, 1]` and exposes it
//! through the [`Surface3`](parageo_geom::Surface3) trait: `2 * density`
//! iso-parametric traces, the fixed-`w` family first. Input curves are
//! captured by value at construction; mutating a curve afterwards does
//! not move surfaces already built from it.

use thiserror::Error;

mod extrude;
mod loft;
mod revolve;
mod ruled;
mod sweep;

pub use extrude::ExtrudedSurface;
pub use loft::LoftedSurface;
pub use revolve::RevolvedSurface;
pub use ruled::RuledSurface;
pub use sweep::SweptSurface;

/// Errors from surface construction.
///
/// Constructors fail fast; evaluation never fails once construction
/// succeeded.
#[derive(Debug, Clone, Error)]
pub enum SurfaceError {
    /// Loft with a section count the blend tables do not cover.
    #[error("unsupported section count for loft: {0} (supported: 2 to 5)")]
    UnsupportedSectionCount(usize),

    /// Input curves whose sample densities disagree.
    #[error("mismatched curve sample densities: {0} vs {1}")]
    MismatchedDensities(usize, usize),

    /// Near-zero path derivative found while probing the sweep path.
    #[error("degenerate path tangent at w = {w}")]
    DegenerateTangent {
        /// Parameter value where the tangent magnitude vanished.
        w: f64,
    },
}
