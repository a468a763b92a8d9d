//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this to watch the stepper (debug overlays, counters, profiling).
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after a body's particles have been integrated. `clamped` counts
    /// particles the boundary moved.
    fn on_integrate(&mut self, _body: usize, _clamped: usize) {}

    /// Called after each relaxation sweep over a body.
    fn on_relax(&mut self, _body: usize, _sweep: usize) {}

    /// Called when a fixed step has fully completed.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
