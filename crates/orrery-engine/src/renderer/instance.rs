use bytemuck::{Pod, Zeroable};

/// Per-node transform written to the frame buffer for the JS scene graph.
/// 12 floats per node; the JavaScript host reads them at this stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct NodeInstance {
    /// Node id from the scene manifest.
    pub id: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation quaternion (x, y, z, w).
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Active animation clip index, or -1 for none.
    pub clip: f32,
    /// Seconds into the active clip.
    pub clip_time: f32,
    pub _pad: f32,
}

impl NodeInstance {
    pub const FLOATS: usize = 12;
    pub const NO_CLIP: f32 = -1.0;
}

/// Node transforms for one frame.
pub struct NodeBuffer {
    pub instances: Vec<NodeInstance>,
}

impl NodeBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: NodeInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Flat float view for copying into the frame buffer.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for NodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}
