//! Point masses.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point mass. Velocity is not stored; it is recovered from the previous
/// snapshot each step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParticle<F>"))]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub mass: F,
}

/// Deserialized fields, checked by [`Particle::new`] before use.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawParticle<F: Float> {
    pos: Vec2<F>,
    mass: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<RawParticle<F>> for Particle<F> {
    type Error = PhysicsError;

    fn try_from(raw: RawParticle<F>) -> Result<Self, Self::Error> {
        Particle::new(raw.pos, raw.mass)
    }
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, mass: F) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        Ok(Particle { pos, mass })
    }

    /// The same particle at a new position.
    pub fn moved_to(&self, pos: Vec2<F>) -> Self {
        Particle { pos, mass: self.mass }
    }

    /// Displacement since `previous`, i.e. velocity per step.
    pub fn velocity_since(&self, previous: &Particle<F>) -> Vec2<F> {
        self.pos - previous.pos
    }

    /// Weight under a gravitational constant; +y points down.
    pub fn weight(&self, gravity: F) -> Vec2<F> {
        Vec2::new(F::zero(), self.mass * gravity)
    }
}
