//! Error types for physics operations.

use core::fmt;

/// Errors that can occur while building bodies or stepping the simulation.
///
/// Every variant is a precondition violation; the engine never retries or
/// masks them.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Rest length must be non-negative and finite.
    InvalidRestLength,
    /// A constraint joins a particle to itself.
    SelfConstraint { index: usize },
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Two constrained particles coincide at construction.
    DegenerateConstraint { a: usize, b: usize },
    /// Normalizing a zero-length vector.
    ZeroLengthVector,
    /// Dividing a vector by zero.
    DivisionByZero,
    /// Body index is out of bounds.
    BodyOutOfBounds { index: usize, count: usize },
    /// Current and previous snapshots have different layouts.
    StateMismatch { expected: usize, found: usize },
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// A body needs at least two points.
    InsufficientPoints { count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidRestLength => {
                write!(f, "rest length must be non-negative and finite")
            }
            PhysicsError::SelfConstraint { index } => {
                write!(f, "constraint joins particle {} to itself", index)
            }
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::DegenerateConstraint { a, b } => {
                write!(f, "constrained particles {} and {} coincide", a, b)
            }
            PhysicsError::ZeroLengthVector => write!(f, "cannot normalize a zero-length vector"),
            PhysicsError::DivisionByZero => write!(f, "vector divided by zero"),
            PhysicsError::StateMismatch { expected, found } => {
                write!(f, "snapshot layout mismatch (expected {}, found {})", expected, found)
            }
            PhysicsError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            PhysicsError::InsufficientPoints { count } => {
                write!(f, "body needs at least 2 points (got {})", count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhysicsError {}
