//! Configuration for the force model, play-field and stepping.

use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gravitational constant in pixels per ms², tuned for a 60 Hz canvas.
pub const DEFAULT_GRAVITY: f64 = 0.00098;
/// One 60 Hz frame in milliseconds.
pub const DEFAULT_STEP_MS: f64 = 1000.0 / 60.0;
/// Floor height of the default play-field.
pub const DEFAULT_FLOOR: f64 = 500.0;

/// Hard positional limits applied after integration. Clamping discards
/// motion into the wall; energy is not conserved across a clamp.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary<F: Float> {
    /// No clamping.
    Open,
    /// `y` never exceeds the floor (screen coordinates, +y down).
    Floor { y: F },
    /// `x` clamped to `[0, width]` and `y` to `[0, height]`.
    Field { width: F, height: F },
}

impl<F: Float> Boundary<F> {
    pub fn clamp(&self, p: Vec2<F>) -> Vec2<F> {
        match *self {
            Boundary::Open => p,
            Boundary::Floor { y } => Vec2::new(p.x, p.y.min(y)),
            Boundary::Field { width, height } => {
                Vec2::new(p.x.clamp(F::zero(), width), p.y.clamp(F::zero(), height))
            }
        }
    }
}

/// Which bodies respond to player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Controlled {
    /// Only the first body in the state.
    First,
    /// Every body.
    All,
    /// Input is ignored.
    None,
}

impl Controlled {
    pub fn includes(self, body_index: usize) -> bool {
        match self {
            Controlled::First => body_index == 0,
            Controlled::All => true,
            Controlled::None => false,
        }
    }
}

/// Force model and stepping configuration.
///
/// # Builder Pattern
/// ```
/// use verlet2d::config::{Boundary, SimulationConfig};
/// use verlet2d::vec::Vec2;
///
/// let config: SimulationConfig<f64> = SimulationConfig::new()
///     .with_gravity(0.00098)
///     .with_friction(0.3)
///     .with_ambient(Vec2::new(-0.0001, 0.0))
///     .with_boundary(Boundary::Field { width: 800.0, height: 500.0 });
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig<F: Float> {
    /// Gravitational constant; weight is `mass * gravity` along +y.
    /// Default: 0.00098.
    pub gravity: F,
    /// Horizontal kinetic friction coefficient, scaled by weight. Default: 0.
    pub friction: F,
    /// Uniform force on every particle of every body (wind, air resistance).
    /// Default: zero.
    pub ambient: Vec2<F>,
    /// Force magnitude for held movement/thrust actions. Default: 0.0005.
    pub thrust: F,
    /// One-shot upward force when jump is pressed. Default: 0.01.
    pub jump: F,
    /// Bodies that receive input forces. Default: first body.
    pub controlled: Controlled,
    /// Play-field clamp. Default: floor at y = 500.
    pub boundary: Boundary<F>,
    /// Fixed step length in ms. Default: 1000/60.
    pub step: F,
    /// Relaxation sweeps per step. Default: 1.
    pub sweeps: usize,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            gravity: F::from_f64(DEFAULT_GRAVITY),
            friction: F::zero(),
            ambient: Vec2::zero(),
            thrust: F::from_f64(0.0005),
            jump: F::from_f64(0.01),
            controlled: Controlled::First,
            boundary: Boundary::Floor { y: F::from_f64(DEFAULT_FLOOR) },
            step: F::from_f64(DEFAULT_STEP_MS),
            sweeps: 1,
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_ambient(mut self, ambient: Vec2<F>) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_thrust(mut self, thrust: F) -> Self {
        self.thrust = thrust;
        self
    }

    pub fn with_jump(mut self, jump: F) -> Self {
        self.jump = jump;
        self
    }

    pub fn with_controlled(mut self, controlled: Controlled) -> Self {
        self.controlled = controlled;
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary<F>) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_step(mut self, step: F) -> Self {
        self.step = step;
        self
    }

    /// Set the number of relaxation sweeps (at least one).
    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps.max(1);
        self
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
