//! Held-key flags and wheel intent, folded from the raw event queue.

use crate::input::queue::{InputEvent, InputQueue};

/// DOM `keyCode` values for the flight controls.
pub mod keys {
    pub const SHIFT: u32 = 16;
    pub const CONTROL: u32 = 17;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_RIGHT: u32 = 39;
    pub const ARROW_DOWN: u32 = 40;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

/// Which movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveState {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveState {
    /// Set the flag bound to `key_code`. Returns false for unbound keys.
    pub fn set(&mut self, key_code: u32, held: bool) -> bool {
        let flag = match key_code {
            keys::ARROW_UP | keys::W => &mut self.forward,
            keys::ARROW_DOWN | keys::S => &mut self.backward,
            keys::ARROW_LEFT | keys::A => &mut self.rotate_left,
            keys::ARROW_RIGHT | keys::D => &mut self.rotate_right,
            keys::SHIFT => &mut self.up,
            keys::CONTROL => &mut self.down,
            _ => return false,
        };
        *flag = held;
        true
    }
}

/// Wheel handling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    /// Seconds a wheel notch keeps its vertical intent (and ignores further notches).
    pub timeout: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self { timeout: 0.5 }
    }
}

/// Input as the movement integrator sees it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub moves: MoveState,
    wheel: WheelConfig,
    /// +1 climb, -1 descend, 0 idle. Set by the wheel only.
    wheel_intent: f32,
    /// Seconds until the wheel intent resets; zero when the wheel is free.
    wheel_lock: f32,
}

impl InputState {
    pub fn new(wheel: WheelConfig) -> Self {
        Self {
            wheel,
            ..Self::default()
        }
    }

    /// Fold one event into the state.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                self.moves.set(key_code, true);
            }
            InputEvent::KeyUp { key_code } => {
                self.moves.set(key_code, false);
            }
            InputEvent::Wheel { delta_y } => self.wheel(delta_y),
            InputEvent::Resize { .. } => {}
        }
    }

    /// Fold every pending event in order.
    pub fn apply_all(&mut self, queue: &InputQueue) {
        for event in queue.iter() {
            self.apply(event);
        }
    }

    /// Notches arriving while the wheel is locked are dropped.
    fn wheel(&mut self, delta_y: f32) {
        if self.wheel_lock > 0.0 {
            return;
        }
        self.wheel_intent = if delta_y < 0.0 { 1.0 } else { -1.0 };
        self.wheel_lock = self.wheel.timeout;
    }

    /// Advance the wheel timeout by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.wheel_lock <= 0.0 {
            return;
        }
        self.wheel_lock -= dt;
        if self.wheel_lock <= 0.0 {
            self.wheel_lock = 0.0;
            self.wheel_intent = 0.0;
        }
    }

    /// Raw wheel intent (-1, 0 or +1).
    pub fn wheel_intent(&self) -> f32 {
        self.wheel_intent
    }

    /// Signed vertical intent: the wheel wins; otherwise held up/down keys.
    pub fn vertical_intent(&self) -> f32 {
        if self.wheel_intent != 0.0 {
            return self.wheel_intent;
        }
        match (self.moves.up, self.moves.down) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}
