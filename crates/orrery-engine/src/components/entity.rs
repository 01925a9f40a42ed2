use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::animation::ClipPlayer;

/// Fat Entity: one struct with optional components.
/// A scene node the host mirrors with a mesh, model or group.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier. Also the host's node key from the scene manifest.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are not exported to the host.
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    pub rotation: Quat,
    /// Uniform scale.
    pub scale: f32,
    /// Animation clip playback (loaded models only).
    pub clip: Option<ClipPlayer>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
            clip: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_clip(mut self, clip: ClipPlayer) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Rotation about the world Y axis only.
    pub fn set_yaw(&mut self, radians: f32) {
        self.rotation = Quat::from_rotation_y(radians);
    }
}
