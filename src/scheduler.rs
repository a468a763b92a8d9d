//! Fixed-step accumulator decoupling physics from frame timing.

use crate::error::PhysicsError;
use crate::float::Float;

/// Banks wall-clock time and spends it in constant-size steps.
///
/// The integrator derives velocity from the last two snapshots, which is
/// only valid when every step has the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStep<F: Float> {
    step: F,
    accumulated: F,
    last_timestamp: Option<F>,
}

impl<F: Float> FixedStep<F> {
    /// Scheduler with `step` as the fixed step length.
    ///
    /// # Errors
    /// [`PhysicsError::InvalidTimestep`] unless `step` is finite and positive.
    pub fn new(step: F) -> Result<Self, PhysicsError> {
        if !step.is_finite() || step <= F::zero() {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(FixedStep { step, accumulated: F::zero(), last_timestamp: None })
    }

    /// Scheduler that measures its first delta from `timestamp`.
    pub fn starting_at(step: F, timestamp: F) -> Result<Self, PhysicsError> {
        let mut scheduler = Self::new(step)?;
        scheduler.last_timestamp = Some(timestamp);
        Ok(scheduler)
    }

    /// Feed a host timestamp and return the number of steps now due.
    ///
    /// The first timestamp only sets the reference point. Timestamps that go
    /// backwards add no time.
    pub fn advance(&mut self, timestamp: F) -> usize {
        let delta = match self.last_timestamp {
            Some(last) if timestamp > last => timestamp - last,
            _ => F::zero(),
        };
        if self.last_timestamp.map_or(true, |last| timestamp > last) {
            self.last_timestamp = Some(timestamp);
        }
        self.accumulate(delta)
    }

    /// Bank `delta` and return the number of whole steps due, removing
    /// them from the accumulator.
    pub fn accumulate(&mut self, delta: F) -> usize {
        if delta.is_finite() && delta > F::zero() {
            self.accumulated = self.accumulated + delta;
        }
        let mut due = 0;
        while self.accumulated >= self.step {
            self.accumulated = self.accumulated - self.step;
            due += 1;
        }
        due
    }

    /// Unspent time, always below one step after `advance`/`accumulate`.
    pub fn accumulated(&self) -> F {
        self.accumulated
    }

    pub fn step(&self) -> F {
        self.step
    }

    /// Fraction of a step banked, for render interpolation.
    pub fn alpha(&self) -> F {
        self.accumulated / self.step
    }

    /// Forget banked time and the reference timestamp, e.g. after the host
    /// was suspended.
    pub fn reset(&mut self) {
        self.accumulated = F::zero();
        self.last_timestamp = None;
    }
}

impl<F: Float> Default for FixedStep<F> {
    fn default() -> Self {
        FixedStep {
            step: F::from_f64(crate::config::DEFAULT_STEP_MS),
            accumulated: F::zero(),
            last_timestamp: None,
        }
    }
}
