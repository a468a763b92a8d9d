//! Player input: a fixed action set, the per-step snapshot the physics reads,
//! and the queue a host's event callbacks write into.

use crate::config::SimulationConfig;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input actions the physics core understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Thrust,
    Jump,
}

impl InputAction {
    pub const ALL: [InputAction; 4] = [
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Thrust,
        InputAction::Jump,
    ];

    /// Map a DOM `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(InputAction::MoveLeft),
            "ArrowRight" | "d" | "D" => Some(InputAction::MoveRight),
            "ArrowUp" | "w" | "W" => Some(InputAction::Thrust),
            " " | "Space" | "Spacebar" => Some(InputAction::Jump),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A key going down or up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}

/// Input as seen by one simulation step: which actions are held, and which
/// went down since the previous step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputSnapshot {
    held: u8,
    pressed: u8,
}

impl InputSnapshot {
    /// No input at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Snapshot with `actions` held (and not newly pressed).
    pub fn holding(actions: &[InputAction]) -> Self {
        let held = actions.iter().fold(0, |acc, a| acc | a.bit());
        InputSnapshot { held, pressed: 0 }
    }

    pub fn is_held(&self, action: InputAction) -> bool {
        self.held & action.bit() != 0
    }

    /// True only for the step in which the action went down.
    pub fn was_pressed(&self, action: InputAction) -> bool {
        self.pressed & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0 && self.pressed == 0
    }

    /// Sum of the forces this input applies to a controlled body.
    pub fn force<F: Float>(&self, config: &SimulationConfig<F>) -> Vec2<F> {
        let mut force = Vec2::zero();
        if self.is_held(InputAction::MoveLeft) {
            force = force + Vec2::new(-config.thrust, F::zero());
        }
        if self.is_held(InputAction::MoveRight) {
            force = force + Vec2::new(config.thrust, F::zero());
        }
        if self.is_held(InputAction::Thrust) {
            force = force + Vec2::new(F::zero(), -config.thrust);
        }
        if self.was_pressed(InputAction::Jump) {
            force = force + Vec2::new(F::zero(), -config.jump);
        }
        force
    }
}

/// Collects input events between steps.
///
/// The host pushes events from its callbacks; the simulation calls
/// [`InputQueue::drain`] once per step, so a step never sees half an update.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    events: AllocVec<InputEvent>,
    held: u8,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn press(&mut self, action: InputAction) {
        self.push(InputEvent { action, pressed: true });
    }

    pub fn release(&mut self, action: InputAction) {
        self.push(InputEvent { action, pressed: false });
    }

    /// Events waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Fold pending events into the held set and hand out a snapshot.
    ///
    /// A press and release inside one step still counts as pressed.
    pub fn drain(&mut self) -> InputSnapshot {
        let mut pressed = 0;
        for event in self.events.drain(..) {
            let bit = event.action.bit();
            if event.pressed {
                if self.held & bit == 0 {
                    pressed |= bit;
                }
                self.held |= bit;
            } else {
                self.held &= !bit;
            }
        }
        InputSnapshot { held: self.held, pressed }
    }
}
