//! 2D vector value type.

use crate::error::PhysicsError;
use crate::float::Float;
use core::ops::{Add, Sub, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable 2D vector. Every operation returns a new value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Divide both components by a scalar. Fails when `s` is exactly zero.
    pub fn divide(self, s: F) -> Result<Self, PhysicsError> {
        if s == F::zero() {
            return Err(PhysicsError::DivisionByZero);
        }
        Ok(Vec2 { x: self.x / s, y: self.y / s })
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Euclidean length (magnitude).
    pub fn length(self) -> F { self.length_sq().sqrt() }

    /// Unit vector in the same direction. Fails on a zero-length vector
    /// instead of inventing a direction.
    pub fn normalize(self) -> Result<Self, PhysicsError> {
        let len = self.length();
        if len == F::zero() {
            return Err(PhysicsError::ZeroLengthVector);
        }
        self.divide(len)
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (self - other).length() }

    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLES: [(f64, f64); 5] = [
        (3.0, 4.0),
        (-1.5, 0.25),
        (1e-3, -7.0),
        (250.0, 30.0),
        (-0.1, -0.2),
    ];

    #[test]
    fn length_of_3_4_is_5() {
        let v = Vec2::new(3.0f64, 4.0);
        assert_relative_eq!(v.length(), 5.0);
    }

    #[test]
    fn add_then_subtract_is_identity() {
        for &(x, y) in &SAMPLES {
            for &(u, w) in &SAMPLES {
                let v = Vec2::new(x, y);
                let back = (v + Vec2::new(u, w)) - Vec2::new(u, w);
                assert_relative_eq!(back.x, v.x, epsilon = 1e-9);
                assert_relative_eq!(back.y, v.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn normalized_vectors_have_unit_length() {
        for &(x, y) in &SAMPLES {
            let n = Vec2::new(x, y).normalize().unwrap();
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn divide_then_scale_round_trips() {
        let v = Vec2::new(12.5f64, -3.0);
        for &s in &[2.0, -0.5, 1e-4, 60.0] {
            let back = v.divide(s).unwrap().scale(s);
            assert_relative_eq!(back.x, v.x, epsilon = 1e-9);
            assert_relative_eq!(back.y, v.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(Vec2::new(1.0f64, 1.0).divide(0.0), Err(PhysicsError::DivisionByZero));
    }

    #[test]
    fn normalize_zero_vector_fails() {
        assert_eq!(Vec2::<f32>::zero().normalize(), Err(PhysicsError::ZeroLengthVector));
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
