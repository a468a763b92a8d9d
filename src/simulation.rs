//! The physics step and the fixed-step driver around it.

use crate::body::RigidBody;
use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::input::{InputQueue, InputSnapshot};
use crate::integrator::integrate_counting;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::render::Renderer;
use crate::scheduler::FixedStep;
use crate::solver::sweep;
use crate::state::State;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Produce the snapshot one `timestep` after `current`.
///
/// Pure: the same arguments always give the same result. `previous` must be
/// the snapshot one step behind `current`, with the same layout.
pub fn advance_state<F: Float>(
    timestep: F,
    current: &State<F>,
    previous: &State<F>,
    input: &InputSnapshot,
    config: &SimulationConfig<F>,
) -> Result<State<F>, PhysicsError> {
    advance_state_observed(timestep, current, previous, input, config, &mut NoOpStepObserver)
}

/// [`advance_state`] reporting progress to `observer`.
pub fn advance_state_observed<F: Float, O: StepObserver>(
    timestep: F,
    current: &State<F>,
    previous: &State<F>,
    input: &InputSnapshot,
    config: &SimulationConfig<F>,
    observer: &mut O,
) -> Result<State<F>, PhysicsError> {
    current.check_layout(previous)?;
    let player_force = input.force(config);

    let mut bodies = AllocVec::with_capacity(current.body_count());
    for (i, (body, prev)) in current.bodies().iter().zip(previous.bodies()).enumerate() {
        let mut external = config.ambient;
        if config.controlled.includes(i) {
            external = external + player_force;
        }

        let (mut positions, clamped) = integrate_counting(timestep, body, prev, external, config)?;
        observer.on_integrate(i, clamped);

        for s in 0..config.sweeps {
            sweep(&mut positions, body.constraints())?;
            observer.on_relax(i, s);
        }

        bodies.push(body.with_positions(&positions)?);
    }

    observer.on_step_complete();
    Ok(State::new(bodies))
}

/// Owns the `current`/`previous` snapshot pair and steps it on a fixed clock.
pub struct Simulation<F: Float> {
    current: State<F>,
    previous: State<F>,
    config: SimulationConfig<F>,
    scheduler: FixedStep<F>,
    steps_taken: u64,
}

impl<F: Float> Simulation<F> {
    /// Start at rest: `previous` is a copy of `current`.
    ///
    /// # Errors
    /// [`PhysicsError::InvalidTimestep`] when `config.step` is not a finite,
    /// positive length.
    pub fn new(
        bodies: AllocVec<RigidBody<F>>,
        config: SimulationConfig<F>,
    ) -> Result<Self, PhysicsError> {
        let scheduler = FixedStep::new(config.step)?;
        let current = State::new(bodies);
        Ok(Simulation {
            previous: current.clone(),
            current,
            scheduler,
            config,
            steps_taken: 0,
        })
    }

    /// Feed a host timestamp and run every step that is now due, draining
    /// `input` once per step. Returns the number of steps run.
    ///
    /// On error the snapshots stay at the last completed step.
    pub fn frame<O: StepObserver>(
        &mut self,
        timestamp: F,
        input: &mut InputQueue,
        observer: &mut O,
    ) -> Result<usize, PhysicsError> {
        let due = self.scheduler.advance(timestamp);
        for _ in 0..due {
            let snapshot = input.drain();
            self.step_observed(&snapshot, observer)?;
        }
        Ok(due)
    }

    /// Run exactly one fixed step with the given input.
    pub fn step(&mut self, input: &InputSnapshot) -> Result<(), PhysicsError> {
        self.step_observed(input, &mut NoOpStepObserver)
    }

    fn step_observed<O: StepObserver>(
        &mut self,
        input: &InputSnapshot,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        let next = advance_state_observed(
            self.config.step,
            &self.current,
            &self.previous,
            input,
            &self.config,
            observer,
        )?;
        self.previous = core::mem::replace(&mut self.current, next);
        self.steps_taken += 1;
        Ok(())
    }

    /// Give a body a velocity of `delta` per step by shifting its previous
    /// snapshot, the Verlet way to apply an impulse.
    pub fn nudge(&mut self, body: usize, delta: Vec2<F>) -> Result<(), PhysicsError> {
        let count = self.previous.body_count();
        let shifted = self
            .current
            .body(body)
            .ok_or(PhysicsError::BodyOutOfBounds { index: body, count })?
            .translated(-delta);
        self.previous = self.previous.with_body(body, shifted)?;
        Ok(())
    }

    /// Hand the current snapshot to a renderer.
    pub fn render<R: Renderer<F>>(&self, renderer: &mut R) {
        renderer.render(&self.current);
    }

    pub fn current(&self) -> &State<F> { &self.current }
    pub fn previous(&self) -> &State<F> { &self.previous }
    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn scheduler(&self) -> &FixedStep<F> { &self.scheduler }
    pub fn steps_taken(&self) -> u64 { self.steps_taken }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputAction;

    #[derive(Default)]
    struct Counting {
        integrations: usize,
        sweeps: usize,
        steps: usize,
    }

    impl StepObserver for Counting {
        fn on_integrate(&mut self, _body: usize, _clamped: usize) { self.integrations += 1; }
        fn on_relax(&mut self, _body: usize, _sweep: usize) { self.sweeps += 1; }
        fn on_step_complete(&mut self) { self.steps += 1; }
    }

    fn two_boxes() -> AllocVec<RigidBody<f64>> {
        alloc::vec![
            RigidBody::square(20.0, 20.0, Vec2::new(50.0, 100.0), 1.0).unwrap(),
            RigidBody::square(20.0, 20.0, Vec2::new(150.0, 100.0), 1.0).unwrap(),
        ]
    }

    #[test]
    fn frame_runs_due_steps_and_drains_each() {
        let config = SimulationConfig::new().with_step(10.0);
        let mut sim = Simulation::new(two_boxes(), config).unwrap();
        let mut queue = InputQueue::new();
        let mut counting = Counting::default();

        assert_eq!(sim.frame(0.0, &mut queue, &mut counting).unwrap(), 0);
        queue.press(InputAction::MoveRight);
        assert_eq!(sim.frame(25.0, &mut queue, &mut counting).unwrap(), 2);
        assert_eq!(queue.pending(), 0);
        assert_eq!(sim.steps_taken(), 2);
        assert_eq!(counting.steps, 2);
        assert_eq!(counting.integrations, 4);
        assert_eq!(counting.sweeps, 4);
    }

    #[test]
    fn previous_trails_current_by_one_step() {
        let mut sim = Simulation::new(two_boxes(), SimulationConfig::new()).unwrap();
        sim.step(&InputSnapshot::none()).unwrap();
        let after_one = sim.current().clone();
        sim.step(&InputSnapshot::none()).unwrap();
        assert_eq!(sim.previous(), &after_one);
    }

    #[test]
    fn only_first_body_feels_input_by_default() {
        let config = SimulationConfig::new().with_gravity(0.0);
        let mut sim = Simulation::new(two_boxes(), config).unwrap();
        sim.step(&InputSnapshot::holding(&[InputAction::MoveRight])).unwrap();
        let moved = sim.current().bodies()[0].centroid().x;
        let still = sim.current().bodies()[1].centroid().x;
        assert!(moved > 60.0);
        assert_eq!(still, 160.0);
    }

    #[test]
    fn zero_step_is_rejected_up_front() {
        let config = SimulationConfig::new().with_step(0.0);
        assert_eq!(
            Simulation::new(two_boxes(), config).err(),
            Some(PhysicsError::InvalidTimestep)
        );
        let config = SimulationConfig::new().with_step(-5.0);
        assert!(Simulation::new(two_boxes(), config).is_err());
    }

    #[test]
    fn nudge_sets_velocity() {
        let config = SimulationConfig::new().with_gravity(0.0);
        let mut sim = Simulation::new(two_boxes(), config).unwrap();
        sim.nudge(1, Vec2::new(2.0, 0.0)).unwrap();
        sim.step(&InputSnapshot::none()).unwrap();
        let c = sim.current().bodies()[1].centroid();
        assert!((c.x - 162.0).abs() < 1e-9);
        assert!(sim.nudge(5, Vec2::zero()).is_err());
    }
}
