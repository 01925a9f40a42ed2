use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use crate::assets::manifest::CameraDescriptor;

/// Perspective camera for the 3D scene.
/// Rust owns the pose; the host copies it into its own camera every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Camera pose as exported to the host: 16 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraFrame {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub _pad: [f32; 3],
}

impl CameraFrame {
    pub const FLOATS: usize = 16;
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Build from the manifest's lens settings at aspect 1.0.
    /// The first resize event sets the real aspect.
    pub fn from_descriptor(desc: &CameraDescriptor) -> Self {
        Self::new(desc.fov_degrees, 1.0, desc.near, desc.far)
    }

    /// Viewport changed. Zero or negative sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Right-handed projection with depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn frame(&self) -> CameraFrame {
        CameraFrame {
            eye: self.position.to_array(),
            target: self.target.to_array(),
            up: self.up.to_array(),
            fov_degrees: self.fov_degrees,
            aspect: self.aspect,
            near: self.near,
            far: self.far,
            _pad: [0.0; 3],
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_descriptor(&CameraDescriptor::default())
    }
}

/// Chase camera that trails a body along its local axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowRig {
    /// Offset in the followed body's local frame, subtracted from its position.
    pub offset: Vec3,
    /// Fraction of the remaining distance covered per tick.
    pub blend: f32,
}

impl Default for FollowRig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(10.0, 0.0, 0.0),
            blend: 0.1,
        }
    }
}

impl FollowRig {
    /// Where the camera wants to be for a body at `pos` with orientation `rot`.
    pub fn desired_position(&self, pos: Vec3, rot: Quat) -> Vec3 {
        pos - rot * self.offset
    }

    /// One tick of follow: ease the eye toward the desired position and aim at the body.
    pub fn follow(&self, camera: &mut PerspectiveCamera, pos: Vec3, rot: Quat) {
        let desired = self.desired_position(pos, rot);
        camera.position = camera.position.lerp(desired, self.blend);
        camera.look_at(pos);
    }
}
