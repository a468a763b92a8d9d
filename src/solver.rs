//! Constraint relaxation over candidate positions.

use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One relaxation sweep: each constraint in list order corrects its two
/// endpoints, and later constraints see earlier corrections.
///
/// A lone constraint ends the sweep exactly satisfied; constraints sharing
/// particles generally do not.
pub fn relax<F: Float>(
    positions: AllocVec<Vec2<F>>,
    constraints: &[DistanceConstraint<F>],
) -> Result<AllocVec<Vec2<F>>, PhysicsError> {
    relax_sweeps(positions, constraints, 1)
}

/// `sweeps` consecutive relaxation sweeps.
pub fn relax_sweeps<F: Float>(
    mut positions: AllocVec<Vec2<F>>,
    constraints: &[DistanceConstraint<F>],
    sweeps: usize,
) -> Result<AllocVec<Vec2<F>>, PhysicsError> {
    for _ in 0..sweeps {
        sweep(&mut positions, constraints)?;
    }
    Ok(positions)
}

pub(crate) fn sweep<F: Float>(
    positions: &mut [Vec2<F>],
    constraints: &[DistanceConstraint<F>],
) -> Result<(), PhysicsError> {
    for constraint in constraints {
        constraint.solve(positions)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn order_matters_for_shared_particles() {
        let start = alloc::vec![
            Vec2::new(0.0f64, 0.0),
            Vec2::new(12.0, 0.0),
            Vec2::new(24.0, 0.0),
        ];
        let ab = DistanceConstraint::new(0, 1, 10.0).unwrap();
        let bc = DistanceConstraint::new(1, 2, 10.0).unwrap();

        let forward = relax(start.clone(), &[ab, bc]).unwrap();
        let backward = relax(start, &[bc, ab]).unwrap();
        assert_ne!(forward, backward);
        // The last constraint applied is always exact.
        assert_relative_eq!(forward[1].distance(forward[2]), 10.0, epsilon = 1e-12);
        assert_relative_eq!(backward[0].distance(backward[1]), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn more_sweeps_reduce_error() {
        let start = alloc::vec![
            Vec2::new(0.0f64, 0.0),
            Vec2::new(15.0, 1.0),
            Vec2::new(31.0, -1.0),
            Vec2::new(44.0, 2.0),
        ];
        let chain = [
            DistanceConstraint::new(0, 1, 10.0).unwrap(),
            DistanceConstraint::new(1, 2, 10.0).unwrap(),
            DistanceConstraint::new(2, 3, 10.0).unwrap(),
        ];
        let total_error = |p: &[Vec2<f64>]| -> f64 {
            chain.iter().map(|c| c.error(p).unwrap().abs()).sum()
        };
        let once = relax(start.clone(), &chain).unwrap();
        let many = relax_sweeps(start, &chain, 20).unwrap();
        assert!(total_error(&many) < total_error(&once));
    }

    #[test]
    fn empty_constraint_list_is_identity() {
        let start = alloc::vec![Vec2::new(1.0f64, 2.0)];
        assert_eq!(relax(start.clone(), &[]).unwrap(), start);
    }
}
