//! Fixed-distance constraints between two particles of a body.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keeps particles `a` and `b` of the owning body `rest_length` apart.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConstraint<F>"))]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawConstraint<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<RawConstraint<F>> for DistanceConstraint<F> {
    type Error = PhysicsError;

    fn try_from(raw: RawConstraint<F>) -> Result<Self, Self::Error> {
        DistanceConstraint::new(raw.a, raw.b, raw.rest_length)
    }
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SelfConstraint { index: a });
        }
        if !rest_length.is_finite() || rest_length < F::zero() {
            return Err(PhysicsError::InvalidRestLength);
        }
        Ok(DistanceConstraint { a, b, rest_length })
    }

    /// Constraint whose rest length is the current distance between the two
    /// particles. The length is frozen from then on.
    pub fn between(a: usize, b: usize, particles: &[Particle<F>]) -> Result<Self, PhysicsError> {
        let count = particles.len();
        let pa = particles
            .get(a)
            .ok_or(PhysicsError::ParticleOutOfBounds { index: a, count })?;
        let pb = particles
            .get(b)
            .ok_or(PhysicsError::ParticleOutOfBounds { index: b, count })?;
        let rest_length = pa.pos.distance(pb.pos);
        if a != b && rest_length == F::zero() {
            return Err(PhysicsError::DegenerateConstraint { a, b });
        }
        Self::new(a, b, rest_length)
    }

    /// Fails unless both indices address one of `count` particles.
    pub fn check_indices(&self, count: usize) -> Result<(), PhysicsError> {
        for index in [self.a, self.b] {
            if index >= count {
                return Err(PhysicsError::ParticleOutOfBounds { index, count });
            }
        }
        Ok(())
    }

    /// Signed length error: positive when stretched, negative when compressed.
    pub fn error(&self, positions: &[Vec2<F>]) -> Result<F, PhysicsError> {
        self.check_indices(positions.len())?;
        Ok(positions[self.a].distance(positions[self.b]) - self.rest_length)
    }

    /// Move both endpoints half the error along the joining direction.
    ///
    /// The correction is split evenly; particle mass plays no part.
    pub fn solve(&self, positions: &mut [Vec2<F>]) -> Result<(), PhysicsError> {
        self.check_indices(positions.len())?;
        let delta = positions[self.b] - positions[self.a];
        let error = delta.length() - self.rest_length;
        let normal = delta.normalize()?;
        let correction = normal.scale(error * F::half());

        positions[self.a] = positions[self.a] + correction;
        positions[self.b] = positions[self.b] - correction;
        Ok(())
    }
}
