//! Rigid shapes built from particles and distance constraints.

use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Particles held in shape by a fixed set of distance constraints.
///
/// `closed` only matters to renderers: a closed body is drawn as a loop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBody<F>"))]
pub struct RigidBody<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    closed: bool,
}

/// Deserialized parts. Constraint indices are only known to be valid once
/// [`RigidBody::new`] has seen the particle count.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBody<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    closed: bool,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<RawBody<F>> for RigidBody<F> {
    type Error = PhysicsError;

    fn try_from(raw: RawBody<F>) -> Result<Self, Self::Error> {
        RigidBody::new(raw.particles, raw.constraints, raw.closed)
    }
}

impl<F: Float> RigidBody<F> {
    /// Build a body from parts, validating every constraint index.
    pub fn new(
        particles: AllocVec<Particle<F>>,
        constraints: AllocVec<DistanceConstraint<F>>,
        closed: bool,
    ) -> Result<Self, PhysicsError> {
        for c in &constraints {
            c.check_indices(particles.len())?;
        }
        Ok(RigidBody { particles, constraints, closed })
    }

    /// Polyline or polygon through `points`, every particle weighing `mass`.
    ///
    /// Consecutive points are joined; `closed` also joins the last point to
    /// the first. Rest lengths come from the given geometry.
    pub fn from_points(points: &[Vec2<F>], mass: F, closed: bool) -> Result<Self, PhysicsError> {
        let n = points.len();
        if n < 2 {
            return Err(PhysicsError::InsufficientPoints { count: n });
        }

        let particles = points
            .iter()
            .map(|&p| Particle::new(p, mass))
            .collect::<Result<AllocVec<_>, _>>()?;

        let edges = if closed && n > 2 { n } else { n - 1 };
        let mut constraints = AllocVec::with_capacity(edges);
        for i in 0..edges {
            constraints.push(DistanceConstraint::between(i, (i + 1) % n, &particles)?);
        }

        Ok(RigidBody { particles, constraints, closed })
    }

    /// Isosceles triangle inside the `width` x `height` box whose top-left
    /// corner is `origin`, apex at the top.
    pub fn triangle(width: F, height: F, origin: Vec2<F>, mass: F) -> Result<Self, PhysicsError> {
        let points = [
            origin + Vec2::new(F::zero(), height),
            origin + Vec2::new(width * F::half(), F::zero()),
            origin + Vec2::new(width, height),
        ];
        Self::from_points(&points, mass, true)
    }

    /// Rectangle with its top-left corner at `origin`.
    ///
    /// Four edges alone let the shape shear flat, so both diagonals are
    /// braced as well.
    pub fn square(width: F, height: F, origin: Vec2<F>, mass: F) -> Result<Self, PhysicsError> {
        let points = [
            origin,
            origin + Vec2::new(F::zero(), height),
            origin + Vec2::new(width, height),
            origin + Vec2::new(width, F::zero()),
        ];
        Self::from_points(&points, mass, true)?
            .brace(1, 3)?
            .brace(0, 2)
    }

    /// Add a cross-brace between two existing particles, rest length taken
    /// from their current distance.
    pub fn brace(mut self, a: usize, b: usize) -> Result<Self, PhysicsError> {
        let c = DistanceConstraint::between(a, b, &self.particles)?;
        self.constraints.push(c);
        Ok(self)
    }

    /// The same body with every particle moved to `positions`.
    pub fn with_positions(&self, positions: &[Vec2<F>]) -> Result<Self, PhysicsError> {
        if positions.len() != self.particles.len() {
            return Err(PhysicsError::StateMismatch {
                expected: self.particles.len(),
                found: positions.len(),
            });
        }
        let particles = self
            .particles
            .iter()
            .zip(positions)
            .map(|(p, &pos)| p.moved_to(pos))
            .collect();
        Ok(RigidBody {
            particles,
            constraints: self.constraints.clone(),
            closed: self.closed,
        })
    }

    /// The same body shifted by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        RigidBody {
            particles: self.particles.iter().map(|p| p.moved_to(p.pos + offset)).collect(),
            constraints: self.constraints.clone(),
            closed: self.closed,
        }
    }

    /// Positions in particle order, closing the loop for closed bodies.
    pub fn polyline(&self) -> impl Iterator<Item = Vec2<F>> + '_ {
        let closing = if self.closed { self.particles.first() } else { None };
        self.particles.iter().chain(closing).map(|p| p.pos)
    }

    /// Largest |length error| / rest length over all constraints.
    /// Zero-length constraints are skipped.
    pub fn max_relative_error(&self) -> Result<F, PhysicsError> {
        let positions = self.positions();
        let mut worst = F::zero();
        for c in self.constraints.iter().filter(|c| c.rest_length > F::zero()) {
            worst = worst.max(c.error(&positions)?.abs() / c.rest_length);
        }
        Ok(worst)
    }

    /// Average particle position.
    pub fn centroid(&self) -> Vec2<F> {
        let mut sum = Vec2::zero();
        for p in &self.particles {
            sum = sum + p.pos;
        }
        let n = F::from_f64(self.particles.len() as f64);
        if n == F::zero() { sum } else { sum.scale(F::one() / n) }
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn is_closed(&self) -> bool { self.closed }
}
