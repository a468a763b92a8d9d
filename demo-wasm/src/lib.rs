use verlet2d::{
    render, Boundary, InputAction, InputQueue, NoOpStepObserver, RigidBody, Simulation,
    SimulationConfig, Vec2,
};
use wasm_bindgen::prelude::*;

// ---- Falling Shapes Demo ----

/// Canvas host shell: forwards key events and `requestAnimationFrame`
/// timestamps, hands back flat coordinates to stroke.
#[wasm_bindgen]
pub struct BoxDemo {
    sim: Simulation<f64>,
    input: InputQueue,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl BoxDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<BoxDemo, JsError> {
        let bodies = vec![
            RigidBody::square(40.0, 60.0, Vec2::new(250.0, 30.0), 2.0)?,
            RigidBody::triangle(50.0, 40.0, Vec2::new(400.0, 80.0), 1.0)?,
            RigidBody::from_points(
                &[
                    Vec2::new(100.0, 60.0),
                    Vec2::new(140.0, 40.0),
                    Vec2::new(170.0, 70.0),
                    Vec2::new(130.0, 110.0),
                ],
                1.0,
                true,
            )?
            .brace(0, 2)?,
        ];
        let config = SimulationConfig::new()
            .with_friction(0.2)
            .with_boundary(Boundary::Field { width, height });

        Ok(BoxDemo {
            sim: Simulation::new(bodies, config)?,
            input: InputQueue::new(),
            width,
            height,
        })
    }

    /// Returns true when the key maps to an action, so the page can
    /// `preventDefault` only for keys the demo uses.
    pub fn key_down(&mut self, key: &str) -> bool {
        match InputAction::from_key(key) {
            Some(action) => {
                self.input.press(action);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match InputAction::from_key(key) {
            Some(action) => {
                self.input.release(action);
                true
            }
            None => false,
        }
    }

    /// Feed a `requestAnimationFrame` timestamp. Returns the number of physics
    /// steps run.
    pub fn frame(&mut self, timestamp: f64) -> Result<usize, JsError> {
        Ok(self.sim.frame(timestamp, &mut self.input, &mut NoOpStepObserver)?)
    }

    /// Returns flat [x0, y0, x1, y1, ...] for every body's outline, closed
    /// outlines repeating their first point.
    pub fn positions(&self) -> Vec<f64> {
        render::flatten(self.sim.current()).0
    }

    /// Number of outline points per body, to split `positions`.
    pub fn outline_lengths(&self) -> Vec<u32> {
        render::flatten(self.sim.current())
            .1
            .into_iter()
            .map(|n| n as u32)
            .collect()
    }

    pub fn body_count(&self) -> usize {
        self.sim.current().body_count()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
