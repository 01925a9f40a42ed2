use orrery_engine::bridge::protocol::FrameData;
use orrery_engine::systems::render::build_node_buffer;
use orrery_engine::{
    EngineContext, FixedTimestep, Game, GameConfig, Host, InputEvent, InputQueue, NodeBuffer,
    ProtocolLayout,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete scene (e.g., `portfolio`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to catch-up ticks so queued events are applied exactly once.
    idle_input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    host: Box<dyn Host>,
    nodes: NodeBuffer,
    /// Contiguous frame buffer the host reads through `frame_ptr`.
    frame: Vec<f32>,
    frame_counter: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, host: Box<dyn Host>) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let frame = layout.allocate();

        Self {
            game,
            ctx: EngineContext::with_dt(config.fixed_dt),
            input: InputQueue::new(),
            idle_input: InputQueue::new(),
            timestep,
            layout,
            config,
            host,
            nodes: NodeBuffer::new(),
            frame,
            frame_counter: 0,
            initialized: false,
        }
    }

    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.frame = self.layout.allocate();
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.ctx = EngineContext::with_dt(self.config.fixed_dt);

        self.game.init(&mut self.ctx);
        self.initialized = true;

        self.dispatch_host_requests();
        self.write_frame();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            log::info!("Viewport resized to {}x{}", width, height);
            self.ctx.camera.resize(width, height);
        }
        self.input.push(event);
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.idle_input };
            self.ctx.clock.advance();
            self.game.update(&mut self.ctx, input);
        }

        // Events that arrive between ticks wait for the next frame that steps.
        if steps > 0 {
            self.input.drain();
        }

        self.dispatch_host_requests();
        self.write_frame();
    }

    fn dispatch_host_requests(&mut self) {
        for request in self.ctx.take_model_requests() {
            self.host.fetch_model(request);
        }
        if let Some(url) = self.ctx.take_navigation() {
            self.host.navigate(&url);
        }
    }

    fn write_frame(&mut self) {
        build_node_buffer(self.ctx.scene.iter_active(), &mut self.nodes);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let camera = self.ctx.camera.frame();
        self.layout.write_frame(
            &mut self.frame,
            &FrameData {
                frame_counter: self.frame_counter,
                elapsed: self.ctx.clock.elapsed(),
                camera: &camera,
                nodes: &self.nodes.instances,
                events: &self.ctx.events,
                orbit_vertices: &self.ctx.rings,
            },
        );
    }

    // ---- Data accessors ----

    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Scene manifest as JSON. Serialization failures are logged and yield `"{}"`.
    pub fn manifest_json(&self) -> String {
        match self.ctx.manifest.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize scene manifest: {}", e);
                "{}".to_string()
            }
        }
    }

    // ---- Capacity accessors ----

    pub fn max_nodes(&self) -> u32 {
        self.layout.max_nodes as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_orbit_vertices(&self) -> u32 {
        self.layout.max_orbit_vertices as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
