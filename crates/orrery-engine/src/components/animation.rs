//! Model animation clip playback.
//!
//! The host owns the skeletal/keyframe data; Rust owns the clock. Each frame
//! the current clip index and local time are exported so the host mixer can
//! pose the model at exactly the simulated time.

use crate::assets::model::ModelAsset;

/// Loops one clip of a loaded model.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPlayer {
    /// Index into the model's clip list.
    pub clip: usize,
    /// Seconds into the clip.
    pub time: f32,
    /// Clip length in seconds.
    pub duration: f32,
}

impl ClipPlayer {
    /// Start looping `clip` from the beginning.
    pub fn new(clip: usize, duration: f32) -> Self {
        Self {
            clip,
            time: 0.0,
            duration,
        }
    }

    /// Loop the model's first clip, if it has one.
    pub fn looping_first(model: &ModelAsset) -> Option<Self> {
        model.first_clip().map(|info| Self::new(0, info.duration))
    }

    /// Advance by dt seconds. Returns true if the clip wrapped.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.duration <= 0.0 {
            return false;
        }

        self.time += dt;
        if self.time < self.duration {
            return false;
        }
        self.time = self.time.rem_euclid(self.duration);
        true
    }
}
