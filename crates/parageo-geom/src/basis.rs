//! Constant basis-matrix tables.
//!
//! Every curve and blend in the kernel is a polynomial of the form
//! `P(u) = U(u) * M * G`, where `U(u)` is the monomial row vector
//! `[u^(k-1), ..., u, 1]`, `M` is one of the fixed matrices below, and
//! `G` is the control-point geometry matrix. The matrices are selected
//! once at construction time and never change afterward.

/// A fixed `dim x dim` basis matrix, stored row-major.
///
/// Rows correspond to monomial powers in descending order; columns to
/// control points.
#[derive(Debug, Clone, Copy)]
pub struct BasisMatrix {
    /// Number of rows/columns (equals the control-point count).
    pub dim: usize,
    entries: &'static [f64],
}

impl BasisMatrix {
    /// Entry at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.entries[row * self.dim + col]
    }

    /// Row `row` as a slice of `dim` entries.
    pub fn row(&self, row: usize) -> &'static [f64] {
        &self.entries[row * self.dim..(row + 1) * self.dim]
    }
}

/// Two-point linear basis, the inverse of `[[0, 1], [1, 1]]`.
pub const LINE: BasisMatrix = BasisMatrix {
    dim: 2,
    entries: &[-1.0, 1.0, 1.0, 0.0],
};

/// Quadratic interpolation through nodes u = 0, 1/2, 1.
pub const SPLINE_3: BasisMatrix = BasisMatrix {
    dim: 3,
    entries: &[
        2.0, -4.0, 2.0, //
        -3.0, 4.0, -1.0, //
        1.0, 0.0, 0.0,
    ],
};

/// Cubic interpolation through nodes u = 0, 1/3, 2/3, 1.
pub const SPLINE_4: BasisMatrix = BasisMatrix {
    dim: 4,
    entries: &[
        -9.0 / 2.0, 27.0 / 2.0, -27.0 / 2.0, 9.0 / 2.0, //
        9.0, -45.0 / 2.0, 18.0, -9.0 / 2.0, //
        -11.0 / 2.0, 9.0, -9.0 / 2.0, 1.0, //
        1.0, 0.0, 0.0, 0.0,
    ],
};

/// Quartic interpolation through nodes u = 0, 1/4, 1/2, 3/4, 1.
///
/// The inverse of the corresponding Vandermonde matrix, tabulated as
/// exact fractions.
pub const SPLINE_5: BasisMatrix = BasisMatrix {
    dim: 5,
    entries: &[
        32.0 / 3.0, -128.0 / 3.0, 64.0, -128.0 / 3.0, 32.0 / 3.0, //
        -80.0 / 3.0, 96.0, -128.0, 224.0 / 3.0, -16.0, //
        70.0 / 3.0, -208.0 / 3.0, 76.0, -112.0 / 3.0, 22.0 / 3.0, //
        -25.0 / 3.0, 16.0, -12.0, 16.0 / 3.0, -1.0, //
        1.0, 0.0, 0.0, 0.0, 0.0,
    ],
};

/// Quadratic Bernstein basis.
pub const BEZIER_3: BasisMatrix = BasisMatrix {
    dim: 3,
    entries: &[
        1.0, -2.0, 1.0, //
        -2.0, 2.0, 0.0, //
        1.0, 0.0, 0.0,
    ],
};

/// Cubic Bernstein basis.
pub const BEZIER_4: BasisMatrix = BasisMatrix {
    dim: 4,
    entries: &[
        -1.0, 3.0, -3.0, 1.0, //
        3.0, -6.0, 3.0, 0.0, //
        -3.0, 3.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, 0.0,
    ],
};

/// Quartic Bernstein basis.
pub const BEZIER_5: BasisMatrix = BasisMatrix {
    dim: 5,
    entries: &[
        1.0, -4.0, 6.0, -4.0, 1.0, //
        -4.0, 12.0, -12.0, 4.0, 0.0, //
        6.0, -12.0, 6.0, 0.0, 0.0, //
        -4.0, 4.0, 0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, 0.0, 0.0,
    ],
};

/// Uniform quadratic B-spline blending matrix (order 2).
pub const BSPLINE_2: BasisMatrix = BasisMatrix {
    dim: 3,
    entries: &[
        1.0 / 2.0, -1.0, 1.0 / 2.0, //
        -1.0, 1.0, 0.0, //
        1.0 / 2.0, 1.0 / 2.0, 0.0,
    ],
};

/// Uniform cubic B-spline blending matrix (order 3).
pub const BSPLINE_3: BasisMatrix = BasisMatrix {
    dim: 4,
    entries: &[
        -1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0, //
        3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0, //
        -3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0, //
        1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0,
    ],
};

/// Order-4 B-spline blending matrix.
///
/// Equals the quartic Bernstein matrix scaled by 1/24; unlike the
/// order-2 and order-3 constants it is not a partition of unity, so
/// order-4 segments shrink toward the origin and do not join.
pub const BSPLINE_4: BasisMatrix = BasisMatrix {
    dim: 5,
    entries: &[
        1.0 / 24.0, -4.0 / 24.0, 6.0 / 24.0, -4.0 / 24.0, 1.0 / 24.0, //
        -4.0 / 24.0, 12.0 / 24.0, -12.0 / 24.0, 4.0 / 24.0, 0.0, //
        6.0 / 24.0, -12.0 / 24.0, 6.0 / 24.0, 0.0, 0.0, //
        -4.0 / 24.0, 4.0 / 24.0, 0.0, 0.0, 0.0, //
        1.0 / 24.0, 0.0, 0.0, 0.0, 0.0,
    ],
};

/// Interpolating spline basis for `count` control points, if supported.
pub fn spline(count: usize) -> Option<&'static BasisMatrix> {
    match count {
        3 => Some(&SPLINE_3),
        4 => Some(&SPLINE_4),
        5 => Some(&SPLINE_5),
        _ => None,
    }
}

/// Bernstein basis for `count` control points, if supported.
pub fn bezier(count: usize) -> Option<&'static BasisMatrix> {
    match count {
        3 => Some(&BEZIER_3),
        4 => Some(&BEZIER_4),
        5 => Some(&BEZIER_5),
        _ => None,
    }
}

/// Uniform B-spline blending matrix for `order`, if supported.
///
/// An order-k segment spans `k + 1` control points.
pub fn closed_bspline(order: usize) -> Option<&'static BasisMatrix> {
    match order {
        2 => Some(&BSPLINE_2),
        3 => Some(&BSPLINE_3),
        4 => Some(&BSPLINE_4),
        _ => None,
    }
}

/// Cross-section blend for a loft over `count` section curves.
///
/// The linear basis for two sections, the interpolating spline family
/// for three to five.
pub fn lofting(count: usize) -> Option<&'static BasisMatrix> {
    match count {
        2 => Some(&LINE),
        _ => spline(count),
    }
}
