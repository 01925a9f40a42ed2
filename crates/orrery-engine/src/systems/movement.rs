//! Spaceship flight model.
//!
//! All constants are per fixed tick. Yaw is the only rotation; pitch and roll
//! stay zero, and vertical motion bypasses the velocity vector entirely.

use glam::{Quat, Vec3};

use crate::input::state::MoveState;

/// Per-tick flight constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightModel {
    /// Radians of yaw per tick while a rotate key is held.
    pub turn_step: f32,
    /// Velocity added along the nose per tick of thrust.
    pub acceleration: f32,
    /// Velocity length cap, applied before the position step.
    pub max_speed: f32,
    /// Velocity multiplier applied after the position step.
    pub drag: f32,
    /// Height change per tick for a unit vertical intent.
    pub climb_step: f32,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self {
            turn_step: 0.03,
            acceleration: 0.1,
            max_speed: 0.5,
            drag: 0.1,
            climb_step: 0.17,
        }
    }
}

/// The player's ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spaceship {
    pub pos: Vec3,
    /// Rotation about world Y in radians. Unbounded.
    pub yaw: f32,
    pub velocity: Vec3,
    pub scale: f32,
}

impl Spaceship {
    pub const SPAWN_POS: Vec3 = Vec3::new(100.0, 15.0, 100.0);
    /// Initial yaw. Radians, not degrees.
    pub const SPAWN_YAW: f32 = 360.0;
    pub const SPAWN_SCALE: f32 = 0.1;

    pub fn new(pos: Vec3, yaw: f32, scale: f32) -> Self {
        Self {
            pos,
            yaw,
            velocity: Vec3::ZERO,
            scale,
        }
    }

    /// The ship as it appears when its model finishes loading.
    pub fn spawn() -> Self {
        Self::new(Self::SPAWN_POS, Self::SPAWN_YAW, Self::SPAWN_SCALE)
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// The nose points along local +X.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }
}

/// Advance the ship by one tick.
///
/// `vertical` is the signed climb intent (-1, 0 or +1).
pub fn integrate(ship: &mut Spaceship, moves: &MoveState, vertical: f32, model: &FlightModel) {
    if moves.rotate_left {
        ship.yaw += model.turn_step;
    }
    if moves.rotate_right {
        ship.yaw -= model.turn_step;
    }

    let forward = ship.forward();
    if moves.forward {
        ship.velocity += forward * model.acceleration;
    }
    if moves.backward {
        ship.velocity -= forward * model.acceleration;
    }

    ship.pos.y += vertical * model.climb_step;

    ship.velocity = ship.velocity.clamp_length_max(model.max_speed);
    ship.pos += ship.velocity;
    ship.velocity *= model.drag;
}
