#![warn(missing_docs)]

//! Math types for the parageo sketch kernel.
//!
//! Thin wrappers around nalgebra providing the domain-specific types the
//! geometry crates build on: points, vectors, sketch offsets, homogeneous
//! transforms, and tolerance constants.
//!
//! All rotation angles on the public surface are in degrees. Rotations
//! compose in a fixed z-then-y-then-x order (`Trz * Try * Trx`); the rest
//! of the kernel depends on that exact order.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A displacement between sketch positions.
///
/// Value type with immutable-result arithmetic: `add` and `subtract`
/// return new offsets rather than mutating their operands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    /// Displacement along X.
    pub x: f64,
    /// Displacement along Y.
    pub y: f64,
    /// Displacement along Z.
    pub z: f64,
}

impl Offset {
    /// The zero offset.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create an offset from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Component-wise difference.
    pub fn subtract(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// The opposite displacement.
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// View this offset as a free vector.
    pub fn as_vec(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Offset {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Offset> for Vec3 {
    fn from(o: Offset) -> Self {
        o.as_vec()
    }
}

/// A 4x4 homogeneous transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by the given offset, composed as `Tx * Ty * Tz`.
    pub fn translation(offset: Offset) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = offset.x;
        m[(1, 3)] = offset.y;
        m[(2, 3)] = offset.z;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `alpha` degrees.
    pub fn rotation_x(alpha: f64) -> Self {
        let (s, c) = alpha.to_radians().sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `beta` degrees.
    ///
    /// Sign convention: `[[c, 0, -s], [0, 1, 0], [s, 0, c]]`, the transpose
    /// of the textbook form. Downstream frame inheritance assumes it.
    pub fn rotation_y(beta: f64) -> Self {
        let (s, c) = beta.to_radians().sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = -s;
        m[(2, 0)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `gamma` degrees.
    pub fn rotation_z(gamma: f64) -> Self {
        let (s, c) = gamma.to_radians().sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Combined rotation `Trz * Try * Trx` from per-axis angles in degrees.
    ///
    /// Applied to a point this rotates about X first, then Y, then Z.
    /// The order is load-bearing for every consumer of inherited sketch
    /// frames and must not change.
    pub fn rotation_zyx(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::rotation_z(gamma)
            .then(&Self::rotation_y(beta))
            .then(&Self::rotation_x(alpha))
    }

    /// Compose: apply `other` first, then `self` (`self.matrix * other.matrix`).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point (homogeneous coordinate 1).
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (homogeneous coordinate 0, drops translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform a slice of points.
    pub fn apply_points(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|p| self.apply_point(p)).collect()
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default kernel tolerances (1e-6 mm linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
