//! Boundary to whatever draws the simulation.

use crate::float::Float;
use crate::state::State;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Draws a snapshot. Implemented by the host (canvas, terminal, test recorder).
pub trait Renderer<F: Float> {
    fn render(&mut self, state: &State<F>);
}

impl<F: Float, T: FnMut(&State<F>)> Renderer<F> for T {
    fn render(&mut self, state: &State<F>) {
        self(state)
    }
}

/// One polyline per body, closed bodies ending on their first point.
pub fn outlines<F: Float>(state: &State<F>) -> AllocVec<AllocVec<Vec2<F>>> {
    state.bodies().iter().map(|b| b.polyline().collect()).collect()
}

/// Flatten every outline into `[x0, y0, x1, y1, ...]` with per-body point
/// counts, the layout canvas hosts consume.
pub fn flatten<F: Float>(state: &State<F>) -> (AllocVec<F>, AllocVec<usize>) {
    let mut coords = AllocVec::new();
    let mut counts = AllocVec::with_capacity(state.body_count());
    for body in state.bodies() {
        let start = coords.len();
        for p in body.polyline() {
            coords.push(p.x);
            coords.push(p.y);
        }
        counts.push((coords.len() - start) / 2);
    }
    (coords, counts)
}
