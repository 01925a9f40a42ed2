//! Static scene lighting.
//!
//! Lights are declared once in the scene manifest; the host creates them and
//! never needs per-frame updates because the sun, the only light source that
//! sits at a body, does not move.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Uniform light applied to every surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    /// 0xRRGGBB
    pub color: u32,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 1.0,
        }
    }
}

/// Parallel light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f32,
    pub position: [f32; 3],
}

impl DirectionalLight {
    pub fn new(color: u32, intensity: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            position: position.to_array(),
        }
    }
}

/// Omni light with a finite reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    /// Distance at which the light falls to zero (0 = infinite).
    pub distance: f32,
    pub position: [f32; 3],
}

impl PointLight {
    /// Create a point light at the given position.
    pub fn new(color: u32, intensity: f32, distance: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            distance,
            position: position.to_array(),
        }
    }
}

/// Every light in the scene.
///
/// The ambient colour defaults to full white, which produces unlit output
/// when no other lights are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightRig {
    pub ambient: AmbientLight,
    #[serde(default)]
    pub directional: Vec<DirectionalLight>,
    #[serde(default)]
    pub points: Vec<PointLight>,
}

impl LightRig {
    pub fn new(ambient: AmbientLight) -> Self {
        Self {
            ambient,
            ..Self::default()
        }
    }

    pub fn with_directional(mut self, light: DirectionalLight) -> Self {
        self.directional.push(light);
        self
    }

    pub fn with_point(mut self, light: PointLight) -> Self {
        self.points.push(light);
        self
    }

    /// Number of non-ambient lights.
    pub fn count(&self) -> usize {
        self.directional.len() + self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(0xffffff, 1.0, 300.0, Vec3::new(0.0, 0.0, -100.0));
        assert_eq!(light.position, [0.0, 0.0, -100.0]);
        assert_eq!(light.distance, 300.0);
    }

    #[test]
    fn rig_builder_counts_lights() {
        let rig = LightRig::new(AmbientLight { color: 0xffffff, intensity: 0.3 })
            .with_directional(DirectionalLight::new(0xffffff, 0.7, Vec3::splat(10.0)))
            .with_point(PointLight::new(0xffffff, 1.0, 300.0, Vec3::ZERO));
        assert_eq!(rig.count(), 2);
        assert_eq!(rig.ambient.intensity, 0.3);
    }

    #[test]
    fn ambient_default_is_white() {
        let rig = LightRig::default();
        assert_eq!(rig.ambient.color, 0xffffff);
        assert_eq!(rig.ambient.intensity, 1.0);
    }
}
