//! Position-Verlet integration of one body.

use crate::body::RigidBody;
use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Unconstrained next positions for `body`, one per particle.
///
/// Velocity is `current - previous`, which assumes the previous step used the
/// same `timestep`. `external` is the summed global force on this body
/// (ambient plus input). Positions are clamped to `config.boundary` before
/// they are returned.
pub fn integrate<F: Float>(
    timestep: F,
    body: &RigidBody<F>,
    previous: &RigidBody<F>,
    external: Vec2<F>,
    config: &SimulationConfig<F>,
) -> Result<AllocVec<Vec2<F>>, PhysicsError> {
    integrate_counting(timestep, body, previous, external, config).map(|(positions, _)| positions)
}

/// As [`integrate`], also returning how many particles the boundary moved.
pub(crate) fn integrate_counting<F: Float>(
    timestep: F,
    body: &RigidBody<F>,
    previous: &RigidBody<F>,
    external: Vec2<F>,
    config: &SimulationConfig<F>,
) -> Result<(AllocVec<Vec2<F>>, usize), PhysicsError> {
    if !timestep.is_finite() || timestep <= F::zero() {
        return Err(PhysicsError::InvalidTimestep);
    }
    if body.particle_count() != previous.particle_count() {
        return Err(PhysicsError::StateMismatch {
            expected: body.particle_count(),
            found: previous.particle_count(),
        });
    }

    let dt_sq = timestep * timestep;
    let mut clamped = 0;
    let mut positions = AllocVec::with_capacity(body.particle_count());

    for (p, prev) in body.particles().iter().zip(previous.particles()) {
        let velocity = p.velocity_since(prev);

        let force = p.weight(config.gravity) + external;
        let acceleration = force.divide(p.mass)?;

        // Friction brakes by at most the current speed, so it stops a slide
        // but never reverses it.
        let braking = (config.friction * config.gravity * dt_sq).min(velocity.x.abs());
        let friction = Vec2::new(-velocity.x.sign() * braking, F::zero());

        let next_velocity = velocity + acceleration.scale(dt_sq) + friction;
        let unclamped = p.pos + next_velocity;
        let next = config.boundary.clamp(unclamped);
        if next != unclamped {
            clamped += 1;
        }
        positions.push(next);
    }

    Ok((positions, clamped))
}
