//! Three-component vector value type for the pendulum model.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};
use serde::{Deserialize, Serialize};

/// 3D vector. A plain `Copy` value: every operation returns a new vector.
///
/// Degenerate inputs resolve to finite values instead of NaN:
/// [`Vec3::normalize`] leaves a zero vector as zero, and
/// [`Vec3::angle_between`] is zero when either operand has zero length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Same as `scale(-1)`.
    pub fn reverse(self) -> Self {
        -self
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Euclidean length. Never negative.
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Normalize to unit length. Only a zero-length vector maps to zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            return Self::zero();
        }
        // divide rather than scale by 1/len: the reciprocal overflows for tiny vectors
        Vec3 { x: self.x / len, y: self.y / len, z: self.z / len }
    }

    /// Angle between two vectors in radians, in `[0, pi]`.
    ///
    /// Defined as exactly zero when either vector has zero length.
    pub fn angle_between(self, other: Self) -> F {
        let length_product = self.length() * other.length();
        if length_product == F::zero() {
            return F::zero();
        }
        // rounding can push |cos| a hair past 1
        let cos = (self.dot(other) / length_product).clamp(-F::one(), F::one());
        cos.acos()
    }

    /// Rescale to `max` if longer than `max`, keeping direction.
    pub fn clamp_length(self, max: F) -> Self {
        let len = self.length();
        if len <= max {
            self
        } else {
            self.scale(max / len)
        }
    }

    /// All three components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}
