use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;

/// A 3-component vector of `f64`.
///
/// Every operation returns a fresh value. The single exception is
/// [`Vector3::plus_equals`], which accumulates in place and is meant for
/// local accumulators only.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector3(DVec3);

impl Vector3 {
    pub const ZERO: Vector3 = Vector3(DVec3::ZERO);
    pub const ONE: Vector3 = Vector3(DVec3::ONE);
    pub const X: Vector3 = Vector3(DVec3::X);
    pub const Y: Vector3 = Vector3(DVec3::Y);
    pub const Z: Vector3 = Vector3(DVec3::Z);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Create a vector with all three components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self(DVec3::splat(v))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Components as an `[x, y, z]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }

    #[inline]
    pub fn dot(&self, other: Vector3) -> f64 {
        self.0.dot(other.0)
    }

    /// Euclidean length.
    ///
    /// The exact zero vector returns 0 without taking a square root.
    pub fn magnitude(&self) -> f64 {
        if self.0 == DVec3::ZERO {
            return 0.0;
        }
        self.0.length()
    }

    #[inline]
    pub fn multiply_scalar(&self, scalar: f64) -> Vector3 {
        Self(self.0 * scalar)
    }

    /// Divide every component by `scalar`.
    ///
    /// Implemented as multiplication by the reciprocal. A zero divisor is not
    /// guarded and produces infinities or NaN; callers check the divisor.
    #[inline]
    pub fn divide_scalar(&self, scalar: f64) -> Vector3 {
        self.multiply_scalar(1.0 / scalar)
    }

    #[inline]
    pub fn add_vector(&self, other: Vector3) -> Vector3 {
        Self(self.0 + other.0)
    }

    #[inline]
    pub fn minus_vector(&self, other: Vector3) -> Vector3 {
        Self(self.0 - other.0)
    }

    /// Componentwise product.
    #[inline]
    pub fn multiply_vector(&self, other: Vector3) -> Vector3 {
        Self(self.0 * other.0)
    }

    /// Accumulate `other` into `self`.
    #[inline]
    pub fn plus_equals(&mut self, other: Vector3) {
        self.0 += other.0;
    }

    /// Unit vector in the same direction, or [`Vector3::ZERO`] when the
    /// magnitude is zero.
    pub fn normalized(&self) -> Vector3 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vector3::ZERO;
        }
        self.divide_scalar(magnitude)
    }

    /// True if every component is within `epsilon` of `other`.
    pub fn abs_diff_eq(&self, other: Vector3, epsilon: f64) -> bool {
        self.0.abs_diff_eq(other.0, epsilon)
    }

    /// Access the underlying glam vector.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        self.add_vector(rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        self.minus_vector(rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        self.multiply_scalar(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.multiply_scalar(self)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self.multiply_scalar(-1.0)
    }
}
