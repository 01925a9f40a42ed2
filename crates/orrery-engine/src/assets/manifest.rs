use serde::{Deserialize, Serialize};

use crate::systems::lighting::LightRig;

/// One-time scene description handed to the host renderer at startup.
/// Tells the host which meshes, textures, lights and model to create, and
/// which node id in the per-frame buffer drives each of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Clear colour as 0xRRGGBB.
    pub background: u32,
    pub camera: CameraDescriptor,
    pub lights: LightRig,
    /// Textured spheres (sun and planets).
    #[serde(default)]
    pub bodies: Vec<BodyDescriptor>,
    /// The single loadable model, if the scene has one.
    #[serde(default)]
    pub model: Option<ModelDescriptor>,
    /// Style for the orbit ring line loops.
    #[serde(default)]
    pub orbit_line: LineStyle,
}

/// Perspective camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDescriptor {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraDescriptor {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}

/// A textured sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Node id in the per-frame buffer.
    pub node: u32,
    pub name: String,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Texture URL (relative or absolute).
    pub texture: String,
    #[serde(default)]
    pub material: MaterialDescriptor,
}

/// Standard PBR-ish material knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    #[serde(default)]
    pub emissive: u32,
    #[serde(default)]
    pub emissive_intensity: f32,
    #[serde(default = "default_metalness")]
    pub metalness: f32,
    #[serde(default = "default_roughness")]
    pub roughness: f32,
}

impl Default for MaterialDescriptor {
    fn default() -> Self {
        Self {
            emissive: 0,
            emissive_intensity: 0.0,
            metalness: default_metalness(),
            roughness: default_roughness(),
        }
    }
}

fn default_metalness() -> f32 {
    0.0
}

fn default_roughness() -> f32 {
    1.0
}

/// The loadable model and the node id its transform is written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub node: u32,
    pub path: String,
}

/// Line colour and opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: u32,
    pub opacity: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: 0x444444,
            opacity: 0.3,
        }
    }
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn body(&self, name: &str) -> Option<&BodyDescriptor> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
