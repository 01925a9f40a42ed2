use crate::api::types::{EntityId, GameEvent};
use crate::assets::loader::{model_channel, ModelHandle, ModelRequest};
use crate::assets::manifest::SceneManifest;
use crate::core::scene::Scene;
use crate::core::time::SimClock;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of node transforms per frame (default: 16).
    pub max_nodes: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of orbit ring vertices (default: 1024).
    pub max_orbit_vertices: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_nodes: 16,
            max_events: 32,
            max_orbit_vertices: 1024,
        }
    }
}

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Describe the scene, spawn entities, request assets.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick. `input` holds the events that arrived since the last frame,
    /// or nothing for the extra catch-up ticks of a long frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    /// Static scene description, filled in by `Game::init`.
    pub manifest: SceneManifest,
    /// Orbit ring line-loop vertices. Static after init.
    pub rings: Vec<[f32; 3]>,
    pub events: Vec<GameEvent>,
    pub clock: SimClock,
    next_id: u32,
    model_requests: Vec<ModelRequest>,
    navigation: Option<String>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_dt(1.0 / 60.0)
    }

    /// Create a context whose clock ticks at `dt` seconds.
    pub fn with_dt(dt: f32) -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::default(),
            manifest: SceneManifest::default(),
            rings: Vec::new(),
            events: Vec::new(),
            clock: SimClock::new(dt),
            next_id: 1,
            model_requests: Vec::new(),
            navigation: None,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Ask the host to fetch a model. Poll the returned handle each tick.
    pub fn load_model(&mut self, path: &str) -> ModelHandle {
        log::info!("Requesting model {}", path);
        let (request, handle) = model_channel(path);
        self.model_requests.push(request);
        handle
    }

    /// Requests not yet handed to the host.
    pub fn take_model_requests(&mut self) -> Vec<ModelRequest> {
        std::mem::take(&mut self.model_requests)
    }

    /// Ask the host to leave for `url`. The last request in a frame wins.
    pub fn navigate(&mut self, url: impl Into<String>) {
        self.navigation = Some(url.into());
    }

    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
