/// Fixed timestep accumulator.
/// Ensures simulation ticks run at a consistent rate regardless of display refresh,
/// so per-tick constants (turn step, camera blend, drag) mean the same thing on
/// every monitor.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    /// Cap of 10 steps per frame prevents a spiral of death after a long stall
    /// (e.g. a backgrounded tab).
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Simulation clock counted in whole ticks.
///
/// Elapsed time is `ticks * dt` computed in f64, never a running float sum, so
/// anything derived from it (orbit angles) is exactly reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    ticks: u64,
    dt: f32,
}

impl SimClock {
    pub fn new(dt: f32) -> Self {
        Self { ticks: 0, dt }
    }

    /// Count one completed tick.
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Seconds of simulation time since start.
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.dt as f64
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}
