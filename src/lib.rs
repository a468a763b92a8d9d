//! Rigid 2D shapes from particles and distance constraints, stepped with
//! position Verlet.
//!
//! `verlet2d` approximates rigid bodies as point masses held together by
//! fixed-distance constraints. Each fixed step integrates every particle from
//! its last two positions, clamps it to the play-field and then relaxes the
//! body's constraints. Designed for small 2D games driven by a browser or
//! native frame loop.
//!
//! # Features
//!
//! - **Immutable snapshots**: every step builds a new [`State`]; velocity is
//!   always `current - previous`, never stored
//! - **Shape factories**: triangles, cross-braced squares, arbitrary point sets
//! - **Single-sweep relaxation**: cheap, order-dependent, exact for a lone constraint
//! - **Fixed-step scheduler**: constant step length regardless of frame timing
//! - **Explicit input hand-off**: [`InputQueue`] drained once per step
//! - **Observable**: monitor steps via the [`StepObserver`] trait
//! - **`no_std` compatible**: the core only needs `alloc`
//!
//! # Example
//! ```
//! use verlet2d::{advance_state, InputSnapshot, RigidBody, SimulationConfig, State, Vec2};
//!
//! let body = RigidBody::square(40.0, 60.0, Vec2::new(250.0, 30.0), 2.0).unwrap();
//! let start = State::new(vec![body]);
//! let config = SimulationConfig::new();
//!
//! let next = advance_state(config.step, &start, &start, &InputSnapshot::none(), &config).unwrap();
//! assert!(next.bodies()[0].centroid().y > start.bodies()[0].centroid().y);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod body;
pub mod state;
pub mod config;
pub mod input;
pub mod integrator;
pub mod solver;
pub mod scheduler;
pub mod simulation;
pub mod observer;
pub mod render;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::DistanceConstraint;
pub use body::RigidBody;
pub use state::State;
pub use config::{Boundary, Controlled, SimulationConfig};
pub use input::{InputAction, InputEvent, InputQueue, InputSnapshot};
pub use integrator::integrate;
pub use solver::{relax, relax_sweeps};
pub use scheduler::FixedStep;
pub use simulation::{advance_state, advance_state_observed, Simulation};
pub use observer::{StepObserver, NoOpStepObserver};
pub use render::Renderer;
pub use error::PhysicsError;
