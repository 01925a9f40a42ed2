//! Scene constants: the sun, the three portfolio planets, lights and the ship model.

use glam::Vec3;
use orrery_engine::{
    AmbientLight, BodyDescriptor, CameraDescriptor, DirectionalLight, EntityId, LightRig,
    LineStyle, MaterialDescriptor, ModelDescriptor, Planet, PointLight, SceneManifest,
};

// ── Scene ────────────────────────────────────────────────────────────

pub const BACKGROUND: u32 = 0x000011;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_POS: Vec3 = Vec3::new(0.0, 0.0, -100.0);
pub const SUN_RADIUS: f32 = 25.0;
/// Radians per second.
pub const SUN_SPIN: f32 = 0.002;
pub const SUN_TEXTURE: &str = "https://space-assets-1.s3.amazonaws.com/sun_texture.jpg";
pub const SUN_EMISSIVE: u32 = 0xffff00;
pub const SUN_EMISSIVE_INTENSITY: f32 = 0.5;

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const DIRECTIONAL_INTENSITY: f32 = 0.7;
pub const DIRECTIONAL_POS: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const SUN_LIGHT_INTENSITY: f32 = 1.0;
pub const SUN_LIGHT_DISTANCE: f32 = 300.0;

// ── Planets ──────────────────────────────────────────────────────────

/// One portfolio planet.
pub struct PlanetDef {
    /// Identifier and navigation key.
    pub name: &'static str,
    pub orbit_radius: f32,
    /// Sphere radius.
    pub size: f32,
    pub texture: &'static str,
    pub phase: f32,
}

pub const PLANET_ORBIT_SPEED: f32 = 0.10;
pub const PLANET_SPIN: f32 = 0.1;
pub const PLANET_METALNESS: f32 = 0.2;
pub const PLANET_ROUGHNESS: f32 = 0.8;

const THIRD_TURN: f32 = std::f32::consts::TAU / 3.0;

pub const PLANETS: [PlanetDef; 3] = [
    PlanetDef {
        name: "about-me",
        orbit_radius: 60.0,
        size: 7.0,
        texture: "./assets/planet1.jpg",
        phase: 0.0,
    },
    PlanetDef {
        name: "projects",
        orbit_radius: 90.0,
        size: 7.0,
        texture: "./assets/planet2.jpg",
        phase: THIRD_TURN,
    },
    PlanetDef {
        name: "contact",
        orbit_radius: 120.0,
        size: 7.0,
        texture: "./assets/planet3.jpg",
        phase: 2.0 * THIRD_TURN,
    },
];

/// Line segments per orbit ring.
pub const ORBIT_SEGMENTS: u32 = 128;

// ── Ship ─────────────────────────────────────────────────────────────

pub const MODEL_PATH: &str = "./models/spaceship.glb";

// ── Manifest ─────────────────────────────────────────────────────────

pub fn light_rig() -> LightRig {
    LightRig::new(AmbientLight { color: 0xffffff, intensity: AMBIENT_INTENSITY })
        .with_directional(DirectionalLight::new(0xffffff, DIRECTIONAL_INTENSITY, DIRECTIONAL_POS))
        .with_point(PointLight::new(0xffffff, SUN_LIGHT_INTENSITY, SUN_LIGHT_DISTANCE, SUN_POS))
}

/// Describe the scene for the host. `planets` must follow the order of `PLANETS`.
pub fn scene_manifest(sun: EntityId, planets: &[Planet], ship: EntityId) -> SceneManifest {
    let mut bodies = vec![BodyDescriptor {
        node: sun.0,
        name: "sun".to_string(),
        radius: SUN_RADIUS,
        texture: SUN_TEXTURE.to_string(),
        material: MaterialDescriptor {
            emissive: SUN_EMISSIVE,
            emissive_intensity: SUN_EMISSIVE_INTENSITY,
            ..MaterialDescriptor::default()
        },
    }];

    for (planet, def) in planets.iter().zip(PLANETS.iter()) {
        bodies.push(BodyDescriptor {
            node: planet.entity.0,
            name: planet.name.clone(),
            radius: def.size,
            texture: def.texture.to_string(),
            material: MaterialDescriptor {
                metalness: PLANET_METALNESS,
                roughness: PLANET_ROUGHNESS,
                ..MaterialDescriptor::default()
            },
        });
    }

    SceneManifest {
        background: BACKGROUND,
        camera: CameraDescriptor::default(),
        lights: light_rig(),
        bodies,
        model: Some(ModelDescriptor {
            node: ship.0,
            path: MODEL_PATH.to_string(),
        }),
        orbit_line: LineStyle::default(),
    }
}
