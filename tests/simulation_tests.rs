use approx::assert_relative_eq;
use verlet2d::{
    Controlled, InputAction, InputQueue, NoOpStepObserver, PhysicsError, RigidBody, Simulation,
    SimulationConfig, State, StepObserver, Vec2,
};

fn player() -> RigidBody<f64> {
    RigidBody::square(20.0, 20.0, Vec2::new(100.0, 100.0), 1.0).unwrap()
}

#[test]
fn frame_catches_up_in_fixed_steps() {
    let step = 1000.0 / 60.0;
    let mut sim = Simulation::new(vec![player()], SimulationConfig::new()).unwrap();
    let mut queue = InputQueue::new();

    assert_eq!(sim.frame(0.0, &mut queue, &mut NoOpStepObserver).unwrap(), 0);
    assert_eq!(sim.frame(2.5 * step, &mut queue, &mut NoOpStepObserver).unwrap(), 2);
    assert_relative_eq!(sim.scheduler().accumulated(), 0.5 * step, epsilon = 1e-9);
    assert_eq!(sim.frame(2.5 * step + 1.0, &mut queue, &mut NoOpStepObserver).unwrap(), 0);
    assert_eq!(sim.steps_taken(), 2);
}

#[test]
fn invalid_step_never_reaches_the_frame_loop() {
    for step in [0.0, -1000.0 / 60.0, f64::NAN] {
        let config = SimulationConfig::new().with_step(step);
        match Simulation::new(vec![player()], config) {
            Err(err) => assert_eq!(err, PhysicsError::InvalidTimestep),
            Ok(_) => panic!("step {step} was accepted"),
        }
    }
}

#[test]
fn jump_is_a_one_step_impulse() {
    let config = SimulationConfig::new().with_gravity(0.0).with_step(10.0);
    let mut sim = Simulation::new(vec![player()], config).unwrap();
    let mut queue = InputQueue::new();
    sim.frame(0.0, &mut queue, &mut NoOpStepObserver).unwrap();

    queue.press(InputAction::Jump);
    let y0 = sim.current().bodies()[0].centroid().y;
    sim.frame(10.0, &mut queue, &mut NoOpStepObserver).unwrap();
    let y1 = sim.current().bodies()[0].centroid().y;
    sim.frame(20.0, &mut queue, &mut NoOpStepObserver).unwrap();
    let y2 = sim.current().bodies()[0].centroid().y;

    let kick = -0.01 * 10.0 * 10.0;
    assert_relative_eq!(y1 - y0, kick, epsilon = 1e-9);
    // Held but not re-pressed: coasts at the same speed.
    assert_relative_eq!(y2 - y1, kick, epsilon = 1e-9);
}

#[test]
fn controlled_all_moves_every_body() {
    let config = SimulationConfig::new()
        .with_gravity(0.0)
        .with_controlled(Controlled::All);
    let other = player().translated(Vec2::new(200.0, 0.0));
    let mut sim = Simulation::new(vec![player(), other], config).unwrap();
    let mut queue = InputQueue::new();
    queue.press(InputAction::MoveLeft);
    sim.frame(0.0, &mut queue, &mut NoOpStepObserver).unwrap();
    sim.frame(20.0, &mut queue, &mut NoOpStepObserver).unwrap();

    let start = State::new(vec![player(), player().translated(Vec2::new(200.0, 0.0))]);
    for (now, then) in sim.current().bodies().iter().zip(start.bodies()) {
        assert!(now.centroid().x < then.centroid().x);
    }
}

#[test]
fn failed_step_keeps_last_good_snapshots() {
    let particles = vec![
        verlet2d::Particle::new(Vec2::new(5.0, 5.0), 1.0).unwrap(),
        verlet2d::Particle::new(Vec2::new(5.0, 5.0), 1.0).unwrap(),
    ];
    let constraints = vec![verlet2d::DistanceConstraint::new(0, 1, 2.0).unwrap()];
    let broken = RigidBody::new(particles, constraints, false).unwrap();
    let config = SimulationConfig::new().with_step(10.0);
    let mut sim = Simulation::new(vec![broken], config).unwrap();
    let before = sim.current().clone();
    let mut queue = InputQueue::new();

    sim.frame(0.0, &mut queue, &mut NoOpStepObserver).unwrap();
    assert!(sim.frame(30.0, &mut queue, &mut NoOpStepObserver).is_err());
    assert_eq!(sim.current(), &before);
    assert_eq!(sim.steps_taken(), 0);
}

#[test]
fn observer_sees_floor_contacts() {
    struct Contacts(usize);
    impl StepObserver for Contacts {
        fn on_integrate(&mut self, _body: usize, clamped: usize) {
            self.0 += clamped;
        }
    }

    let body = RigidBody::square(20.0, 20.0, Vec2::new(100.0, 470.0), 1.0).unwrap();
    let mut sim = Simulation::new(vec![body], SimulationConfig::new()).unwrap();
    let mut queue = InputQueue::new();
    let mut contacts = Contacts(0);
    sim.frame(0.0, &mut queue, &mut contacts).unwrap();
    sim.frame(1000.0, &mut queue, &mut contacts).unwrap();
    assert!(contacts.0 > 0);
}

#[test]
fn render_receives_current_snapshot() {
    let sim = Simulation::new(vec![player()], SimulationConfig::new()).unwrap();
    let mut drawn = Vec::new();
    sim.render(&mut |state: &State<f64>| {
        drawn = verlet2d::render::outlines(state);
    });
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].len(), 5);
}
