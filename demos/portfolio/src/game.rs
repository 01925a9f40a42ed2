//! Portfolio scene: a flyable ship among three orbiting planets.
//!
//! Flying within reach of a planet opens its page. Until the ship model
//! arrives the planets still orbit, but nothing else moves.

use orrery_engine::*;

use crate::bodies::{self, MODEL_PATH, ORBIT_SEGMENTS, PLANETS, PLANET_ORBIT_SPEED, PLANET_SPIN, SUN_POS, SUN_SPIN};

// ── Game event kinds to the host ─────────────────────────────────────

/// a = clip count.
const EVENT_MODEL_READY: f32 = 1.0;
const EVENT_MODEL_FAILED: f32 = 2.0;
/// a = planet index.
const EVENT_NAVIGATE: f32 = 3.0;

// ── Game struct ──────────────────────────────────────────────────────

pub struct PortfolioScene {
    input: InputState,
    flight: FlightModel,
    rig: FollowRig,
    navigator: ProximityNavigator,
    planets: Vec<Planet>,
    sun: EntityId,
    /// Reserved at init so the manifest can name it before the model loads.
    ship_id: EntityId,
    /// Pending model load; cleared once it resolves either way.
    model: Option<ModelHandle>,
    /// Absent until the model is ready, and forever if it fails.
    ship: Option<Spaceship>,
}

impl PortfolioScene {
    pub fn new() -> Self {
        Self {
            input: InputState::new(WheelConfig::default()),
            flight: FlightModel::default(),
            rig: FollowRig::default(),
            navigator: ProximityNavigator::default(),
            planets: Vec::with_capacity(PLANETS.len()),
            sun: EntityId(0),
            ship_id: EntityId(0),
            model: None,
            ship: None,
        }
    }

    fn spawn_bodies(&mut self, ctx: &mut EngineContext) {
        self.sun = ctx.next_id();
        ctx.scene.spawn(Entity::new(self.sun).with_tag("sun").with_pos(SUN_POS));

        for def in PLANETS.iter() {
            let id = ctx.next_id();
            let orbit = Orbit::new(def.orbit_radius, PLANET_ORBIT_SPEED, PLANET_SPIN, def.phase);
            let planet = Planet::new(def.name, orbit, id, SUN_POS);
            ctx.scene.spawn(Entity::new(id).with_tag(def.name).with_pos(planet.position));
            ctx.rings.extend(ring_points(SUN_POS, def.orbit_radius, ORBIT_SEGMENTS));
            self.planets.push(planet);
        }
    }

    /// Spawn the ship once the model is in; give up quietly if it never arrives.
    fn poll_model(&mut self, ctx: &mut EngineContext) {
        let Some(handle) = self.model.as_mut() else {
            return;
        };

        match handle.poll() {
            LoadStatus::Pending => return,
            LoadStatus::Ready(asset) => {
                let ship = Spaceship::spawn();
                let mut entity = Entity::new(self.ship_id)
                    .with_tag("ship")
                    .with_pos(ship.pos)
                    .with_rotation(ship.orientation())
                    .with_scale(ship.scale);
                if let Some(player) = ClipPlayer::looping_first(asset) {
                    entity = entity.with_clip(player);
                }
                ctx.scene.spawn(entity);
                ctx.emit_event(GameEvent::new(EVENT_MODEL_READY, asset.clips.len() as f32, 0.0, 0.0));
                self.ship = Some(ship);
            }
            LoadStatus::Failed => {
                ctx.emit_event(GameEvent::new(EVENT_MODEL_FAILED, 0.0, 0.0, 0.0));
            }
        }
        self.model = None;
    }

    #[cfg(test)]
    fn ship(&self) -> Option<&Spaceship> {
        self.ship.as_ref()
    }
}

impl Default for PortfolioScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PortfolioScene {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_nodes: 8,
            max_orbit_vertices: PLANETS.len() * (ORBIT_SEGMENTS as usize + 1),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.spawn_bodies(ctx);
        self.ship_id = ctx.next_id();
        ctx.manifest = bodies::scene_manifest(self.sun, &self.planets, self.ship_id);
        self.model = Some(ctx.load_model(MODEL_PATH));
        log::info!("Portfolio scene ready: {} planets", self.planets.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.input.apply_all(input);
        self.poll_model(ctx);

        let elapsed = ctx.clock.elapsed();
        update_orbits(&mut self.planets, SUN_POS, elapsed, &mut ctx.scene);
        if let Some(sun) = ctx.scene.get_mut(self.sun) {
            sun.set_yaw(spin_angle(SUN_SPIN, elapsed));
        }

        if let Some(ship) = self.ship.as_mut() {
            integrate(ship, &self.input.moves, self.input.vertical_intent(), &self.flight);
            let rotation = ship.orientation();
            if let Some(entity) = ctx.scene.get_mut(self.ship_id) {
                entity.pos = ship.pos;
                entity.rotation = rotation;
            }

            self.rig.follow(&mut ctx.camera, ship.pos, rotation);

            if let Some(nav) = self.navigator.check(ship.pos, &self.planets) {
                let index = self.planets.iter().position(|p| p.name == nav.planet).unwrap_or(0);
                ctx.emit_event(GameEvent::new(EVENT_NAVIGATE, index as f32, 0.0, 0.0));
                ctx.navigate(nav.url);
            }
        }

        let dt = ctx.clock.dt();
        tick_clips(&mut ctx.scene, dt);
        self.input.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    /// Minimal glTF JSON: no meshes, no animations.
    const EMPTY_GLTF: &[u8] = br#"{"asset":{"version":"2.0"}}"#;

    fn init_scene() -> (PortfolioScene, EngineContext, ModelRequest) {
        let mut scene = PortfolioScene::new();
        let mut ctx = EngineContext::with_dt(scene.config().fixed_dt);
        scene.init(&mut ctx);
        let mut requests = ctx.take_model_requests();
        assert_eq!(requests.len(), 1);
        let request = requests.remove(0);
        (scene, ctx, request)
    }

    fn step(scene: &mut PortfolioScene, ctx: &mut EngineContext, input: &InputQueue) {
        ctx.clock.advance();
        scene.update(ctx, input);
    }

    fn loaded_scene() -> (PortfolioScene, EngineContext) {
        let (mut scene, mut ctx, request) = init_scene();
        request.complete(EMPTY_GLTF.to_vec());
        step(&mut scene, &mut ctx, &InputQueue::new());
        assert!(scene.ship().is_some());
        (scene, ctx)
    }

    #[test]
    fn init_builds_bodies_and_manifest() {
        let (scene, ctx, request) = init_scene();
        assert_eq!(request.path(), "./models/spaceship.glb");
        assert_eq!(ctx.scene.len(), 4, "sun + three planets");
        assert_eq!(ctx.rings.len(), 3 * 129);

        let manifest = &ctx.manifest;
        assert_eq!(manifest.background, 0x000011);
        assert_eq!(manifest.bodies.len(), 4);
        assert_eq!(manifest.body("sun").unwrap().radius, 25.0);
        assert_eq!(manifest.body("contact").unwrap().texture, "./assets/planet3.jpg");
        assert_eq!(manifest.lights.count(), 2);
        assert_eq!(manifest.model.as_ref().unwrap().node, scene.ship_id.0);
    }

    #[test]
    fn planets_start_at_their_phases() {
        let (scene, _, _) = init_scene();
        let about = &scene.planets[0];
        assert!((about.position - Vec3::new(60.0, 0.0, -100.0)).length() < 1e-3);
        for (planet, def) in scene.planets.iter().zip(PLANETS.iter()) {
            assert!(((planet.position - SUN_POS).length() - def.orbit_radius).abs() < 1e-3);
        }
    }

    #[test]
    fn ship_spawns_when_model_arrives() {
        let (mut scene, mut ctx, request) = init_scene();
        step(&mut scene, &mut ctx, &InputQueue::new());
        assert!(scene.ship().is_none(), "still loading");

        request.complete(EMPTY_GLTF.to_vec());
        step(&mut scene, &mut ctx, &InputQueue::new());

        let ship = scene.ship().unwrap();
        assert_eq!(ship.pos, Vec3::new(100.0, 15.0, 100.0));
        let entity = ctx.scene.find_by_tag("ship").unwrap();
        assert_eq!(entity.scale, 0.1);
        assert!(entity.clip.is_none(), "model has no clips");
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_MODEL_READY));
    }

    #[test]
    fn failed_load_leaves_scene_inert() {
        let (mut scene, mut ctx, request) = init_scene();
        request.fail(AssetError::Fetch("404".into()));

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: keys::W });
        for _ in 0..30 {
            step(&mut scene, &mut ctx, &input);
        }

        assert!(scene.ship().is_none());
        assert!(ctx.scene.find_by_tag("ship").is_none());
        assert_eq!(ctx.camera.position, Vec3::ZERO, "camera never follows");
        assert!(ctx.take_navigation().is_none());
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_MODEL_FAILED));
    }

    #[test]
    fn unparseable_model_also_fails() {
        let (mut scene, mut ctx, request) = init_scene();
        request.complete(b"not a model".to_vec());
        step(&mut scene, &mut ctx, &InputQueue::new());
        assert!(scene.ship().is_none());
        assert!(scene.model.is_none());
    }

    #[test]
    fn planets_orbit_while_loading() {
        let (mut scene, mut ctx, _request) = init_scene();
        let start = scene.planets[0].position;
        for _ in 0..60 {
            step(&mut scene, &mut ctx, &InputQueue::new());
        }
        let moved = scene.planets[0].position;
        assert!((moved - start).length() > 1.0);
        let entity = ctx.scene.get(scene.planets[0].entity).unwrap();
        assert_eq!(entity.pos, moved);
    }

    #[test]
    fn thrust_moves_ship_and_camera_follows() {
        let (mut scene, mut ctx) = loaded_scene();
        let start = scene.ship().unwrap().pos;

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: keys::ARROW_UP });
        step(&mut scene, &mut ctx, &input);
        let idle = InputQueue::new();
        for _ in 0..59 {
            step(&mut scene, &mut ctx, &idle);
        }

        let ship = *scene.ship().unwrap();
        assert!((ship.pos - start).length() > 5.0, "ship moved {:?}", ship.pos - start);
        assert_eq!(ctx.camera.target, ship.pos);
        assert_eq!(ctx.scene.find_by_tag("ship").unwrap().pos, ship.pos);
    }

    #[test]
    fn wheel_climbs_then_stops() {
        let (mut scene, mut ctx) = loaded_scene();
        let mut input = InputQueue::new();
        input.push(InputEvent::Wheel { delta_y: -120.0 });
        step(&mut scene, &mut ctx, &input);
        let idle = InputQueue::new();
        for _ in 0..60 {
            step(&mut scene, &mut ctx, &idle);
        }
        let y = scene.ship().unwrap().pos.y;
        // 30 climbing ticks of 0.17 before the 0.5 s timeout.
        assert!((y - (15.0 + 30.0 * 0.17)).abs() < 0.2, "y = {}", y);
    }

    #[test]
    fn flying_into_a_planet_navigates_once() {
        let (mut scene, mut ctx) = loaded_scene();
        let target = scene.planets[1].orbit.position_at(SUN_POS, ctx.clock.elapsed() + ctx.clock.dt() as f64);
        if let Some(ship) = scene.ship.as_mut() {
            ship.pos = target;
        }

        step(&mut scene, &mut ctx, &InputQueue::new());
        assert_eq!(ctx.take_navigation().as_deref(), Some("./planets/project.html"));
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_NAVIGATE && e.a == 1.0));

        step(&mut scene, &mut ctx, &InputQueue::new());
        assert!(ctx.take_navigation().is_none());
    }

    #[test]
    fn sun_spins_slowly() {
        let (mut scene, mut ctx, _request) = init_scene();
        for _ in 0..600 {
            step(&mut scene, &mut ctx, &InputQueue::new());
        }
        let sun = ctx.scene.get(scene.sun).unwrap();
        let expected = glam::Quat::from_rotation_y(SUN_SPIN * 10.0);
        assert!(sun.rotation.angle_between(expected) < 1e-3);
        assert_eq!(sun.pos, SUN_POS);
    }
}
