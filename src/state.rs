//! Immutable snapshots of every body at one instant.

use crate::body::RigidBody;
use crate::error::PhysicsError;
use crate::float::Float;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All bodies at one instant. Snapshots are never modified once built; a
/// step produces a new one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State<F: Float> {
    bodies: AllocVec<RigidBody<F>>,
}

impl<F: Float> State<F> {
    pub fn new(bodies: AllocVec<RigidBody<F>>) -> Self {
        State { bodies }
    }

    pub fn bodies(&self) -> &[RigidBody<F>] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody<F>> {
        self.bodies.get(index)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Fails unless `other` has the same bodies with the same particle counts,
    /// which is what deriving velocity from the pair requires.
    pub fn check_layout(&self, other: &State<F>) -> Result<(), PhysicsError> {
        if self.bodies.len() != other.bodies.len() {
            return Err(PhysicsError::StateMismatch {
                expected: self.bodies.len(),
                found: other.bodies.len(),
            });
        }
        for (a, b) in self.bodies.iter().zip(&other.bodies) {
            if a.particle_count() != b.particle_count() {
                return Err(PhysicsError::StateMismatch {
                    expected: a.particle_count(),
                    found: b.particle_count(),
                });
            }
        }
        Ok(())
    }

    /// The same snapshot with one body replaced.
    pub fn with_body(&self, index: usize, body: RigidBody<F>) -> Result<Self, PhysicsError> {
        let count = self.bodies.len();
        if index >= count {
            return Err(PhysicsError::BodyOutOfBounds { index, count });
        }
        let mut bodies = self.bodies.clone();
        bodies[index] = body;
        Ok(State { bodies })
    }
}

impl<F: Float> FromIterator<RigidBody<F>> for State<F> {
    fn from_iter<I: IntoIterator<Item = RigidBody<F>>>(iter: I) -> Self {
        State { bodies: iter.into_iter().collect() }
    }
}
