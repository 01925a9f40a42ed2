//! Planet orbits around a fixed centre.
//!
//! Every position is a pure function of elapsed simulation time, so the same
//! value feeds both the exported transform and the proximity check.

use glam::{Quat, Vec3};

use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Circular orbit in the XZ plane plus self-spin about Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub radius: f32,
    /// Radians per second around the centre.
    pub orbit_speed: f32,
    /// Radians per second about the body's own Y axis.
    pub spin_speed: f32,
    /// Angle offset added to the orbit angle.
    pub phase: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            radius: 0.0,
            orbit_speed: 0.005,
            spin_speed: 0.01,
            phase: 0.0,
        }
    }
}

impl Orbit {
    pub fn new(radius: f32, orbit_speed: f32, spin_speed: f32, phase: f32) -> Self {
        Self {
            radius,
            orbit_speed,
            spin_speed,
            phase,
        }
    }

    /// Orbit whose radius is the XZ distance of an initial placement.
    pub fn from_placement(x: f32, z: f32) -> Self {
        Self {
            radius: (x * x + z * z).sqrt(),
            ..Self::default()
        }
    }

    pub fn with_speeds(mut self, orbit_speed: f32, spin_speed: f32) -> Self {
        self.orbit_speed = orbit_speed;
        self.spin_speed = spin_speed;
        self
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Orbit angle (phase included) after `elapsed` seconds.
    pub fn angle_at(&self, elapsed: f64) -> f64 {
        self.orbit_speed as f64 * elapsed + self.phase as f64
    }

    /// World position after `elapsed` seconds around `center`.
    pub fn position_at(&self, center: Vec3, elapsed: f64) -> Vec3 {
        let angle = self.angle_at(elapsed);
        let r = self.radius as f64;
        center + Vec3::new((r * angle.cos()) as f32, 0.0, (r * angle.sin()) as f32)
    }

    /// Self-spin angle after `elapsed` seconds.
    pub fn spin_at(&self, elapsed: f64) -> f32 {
        spin_angle(self.spin_speed, elapsed)
    }
}

/// Spin angle for a constant angular speed, reduced to one turn.
pub fn spin_angle(speed: f32, elapsed: f64) -> f32 {
    (speed as f64 * elapsed).rem_euclid(std::f64::consts::TAU) as f32
}

/// An orbiting body bound to a scene entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Identifier and navigation key.
    pub name: String,
    pub orbit: Orbit,
    pub entity: EntityId,
    /// Position computed by the last `update_orbits`.
    pub position: Vec3,
}

impl Planet {
    pub fn new(name: impl Into<String>, orbit: Orbit, entity: EntityId, center: Vec3) -> Self {
        Self {
            name: name.into(),
            position: orbit.position_at(center, 0.0),
            orbit,
            entity,
        }
    }
}

/// Recompute every planet for `elapsed` and copy the transform onto its entity.
pub fn update_orbits(planets: &mut [Planet], center: Vec3, elapsed: f64, scene: &mut Scene) {
    for planet in planets.iter_mut() {
        planet.position = planet.orbit.position_at(center, elapsed);
        if let Some(entity) = scene.get_mut(planet.entity) {
            entity.pos = planet.position;
            entity.rotation = Quat::from_rotation_y(planet.orbit.spin_at(elapsed));
        }
    }
}

/// Closed line loop around `center`: `segments + 1` points, last equals first.
pub fn ring_points(center: Vec3, radius: f32, segments: u32) -> Vec<[f32; 3]> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = (i % segments) as f32 / segments as f32 * std::f32::consts::TAU;
            (center + Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())).to_array()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use std::f32::consts::PI;

    const SUN: Vec3 = Vec3::new(0.0, 0.0, -100.0);

    #[test]
    fn defaults() {
        let orbit = Orbit::from_placement(30.0, 40.0);
        assert_eq!(orbit.radius, 50.0);
        assert_eq!(orbit.orbit_speed, 0.005);
        assert_eq!(orbit.spin_speed, 0.01);
        assert_eq!(orbit.phase, 0.0);
    }

    #[test]
    fn starts_at_phase() {
        let orbit = Orbit::new(60.0, 0.1, 0.1, 0.0);
        let p = orbit.position_at(SUN, 0.0);
        assert!((p - Vec3::new(60.0, 0.0, -100.0)).length() < 1e-4);

        let quarter = Orbit::new(60.0, 0.1, 0.1, PI / 2.0);
        let p = quarter.position_at(SUN, 0.0);
        assert!((p - Vec3::new(0.0, 0.0, -40.0)).length() < 1e-3, "p = {:?}", p);
    }

    #[test]
    fn stays_on_circle() {
        let orbit = Orbit::new(90.0, 0.1, 0.1, 2.0 * PI / 3.0);
        for &t in &[0.0, 1.0, 17.5, 600.0, 86_400.0] {
            let p = orbit.position_at(SUN, t);
            let d = p - SUN;
            assert_eq!(d.y, 0.0);
            assert!((d.length() - 90.0).abs() < 1e-3, "t = {} r = {}", t, d.length());
        }
    }

    #[test]
    fn position_is_pure_in_time() {
        let orbit = Orbit::new(120.0, 0.1, 0.1, 4.0 * PI / 3.0);
        let a = orbit.position_at(SUN, 1234.5);
        let b = orbit.position_at(SUN, 1234.5);
        assert_eq!(a, b);
    }

    #[test]
    fn spin_wraps_to_one_turn() {
        let a = spin_angle(0.1, 100.0);
        assert!((0.0..std::f32::consts::TAU).contains(&a));
        assert!((a - (10.0 - std::f32::consts::TAU)).abs() < 1e-4);
    }

    #[test]
    fn update_orbits_moves_entities_and_caches() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(2)));
        let mut planets = vec![Planet::new("about-me", Orbit::new(60.0, 0.1, 0.1, 0.0), EntityId(2), SUN)];

        update_orbits(&mut planets, SUN, 10.0, &mut scene);

        let expected = Orbit::new(60.0, 0.1, 0.1, 0.0).position_at(SUN, 10.0);
        assert_eq!(planets[0].position, expected);
        assert_eq!(scene.get(EntityId(2)).unwrap().pos, expected);
    }

    #[test]
    fn missing_entity_still_updates_cache() {
        let mut scene = Scene::new();
        let mut planets = vec![Planet::new("contact", Orbit::new(120.0, 0.1, 0.1, 0.0), EntityId(9), SUN)];
        update_orbits(&mut planets, SUN, 5.0, &mut scene);
        assert!((planets[0].position - SUN).length() > 119.0);
    }

    #[test]
    fn ring_is_closed_loop() {
        let ring = ring_points(SUN, 60.0, 128);
        assert_eq!(ring.len(), 129);
        assert_eq!(ring[0], ring[128]);
        for p in &ring {
            let d = Vec3::from_array(*p) - SUN;
            assert!((d.length() - 60.0).abs() < 1e-3);
        }
    }
}
