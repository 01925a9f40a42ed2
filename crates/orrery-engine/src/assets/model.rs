//! Binary glTF (GLB) model inspection.
//!
//! The host renderer owns the GPU copy of the model. Rust only needs to know
//! that the bytes are a valid glTF container and which animation clips it
//! carries, so it can drive clip playback from the simulation.

use gltf::Gltf;

use crate::assets::AssetError;

/// One animation clip embedded in the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipInfo {
    pub name: String,
    /// Clip length in seconds (latest keyframe across all samplers).
    pub duration: f32,
}

/// What the simulation knows about a loaded model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAsset {
    pub clips: Vec<ClipInfo>,
    pub node_count: usize,
    pub mesh_count: usize,
    pub byte_len: usize,
}

impl ModelAsset {
    /// Parse a GLB (or plain glTF JSON) byte slice.
    pub fn from_glb(bytes: &[u8]) -> Result<Self, AssetError> {
        let gltf = Gltf::from_slice(bytes)?;

        let clips = gltf
            .animations()
            .enumerate()
            .map(|(index, anim)| {
                let duration = anim
                    .samplers()
                    .filter_map(|sampler| sampler_end_time(&sampler))
                    .fold(0.0_f32, f32::max);
                let name = anim
                    .name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("clip{index}"));
                ClipInfo { name, duration }
            })
            .collect();

        Ok(Self {
            clips,
            node_count: gltf.nodes().count(),
            mesh_count: gltf.meshes().count(),
            byte_len: bytes.len(),
        })
    }

    /// The clip that plays on load, if the model has any.
    pub fn first_clip(&self) -> Option<&ClipInfo> {
        self.clips.first()
    }
}

/// Keyframe input accessors are required to carry `max`; the first component is the end time.
fn sampler_end_time(sampler: &gltf::animation::Sampler<'_>) -> Option<f32> {
    let max = sampler.input().max()?;
    max.as_array()?.first()?.as_f64().map(|t| t as f32)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_animation_clips() {
        let model = ModelAsset::from_glb(&test_glb::animated_ship()).unwrap();
        assert_eq!(model.clips.len(), 1);
        let clip = model.first_clip().unwrap();
        assert_eq!(clip.name, "thrusters");
        assert!((clip.duration - 2.5).abs() < 1e-6, "duration = {}", clip.duration);
        assert_eq!(model.node_count, 1);
    }

    #[test]
    fn static_model_has_no_clips() {
        let model = ModelAsset::from_glb(&test_glb::static_ship()).unwrap();
        assert!(model.clips.is_empty());
        assert!(model.first_clip().is_none());
        assert_eq!(model.mesh_count, 0);
    }

    #[test]
    fn rejects_garbage() {
        let err = ModelAsset::from_glb(b"definitely not a model").unwrap_err();
        assert!(matches!(err, AssetError::Parse(_)));
    }
}
