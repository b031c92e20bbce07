/// Target render rate. The only tunable in the whole program.
pub const TARGET_FPS: u32 = 60;

/// Caps render work below the platform's native callback rate.
///
/// The host calls `tick` on every platform tick (typically once per display
/// refresh) with a wall-clock timestamp in milliseconds. A tick fires at
/// most one render, and only when more than the target interval has passed
/// since the last one; early ticks are cheap no-ops. Simulation time moves
/// in exact multiples of the target interval per firing tick, never
/// proportionally to wall time, so there are no catch-up frames: a stalled
/// host makes sim time lag wall time rather than jump.
#[derive(Debug, Clone, Copy)]
pub struct FrameScheduler {
    last_frame_ms: f64,
    sim_time: f64,
    target_interval_ms: f64,
}

impl FrameScheduler {
    /// Create a scheduler with a fresh clock anchored at `now_ms`.
    pub fn new(target_fps: u32, now_ms: f64) -> Self {
        Self {
            last_frame_ms: now_ms,
            sim_time: 0.0,
            target_interval_ms: 1000.0 / target_fps as f64,
        }
    }

    /// Process one platform tick. Returns the simulation time to render at
    /// if a frame is due, or `None` when the tick arrived too early.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let diff = now_ms - self.last_frame_ms;

        if diff > self.target_interval_ms {
            self.sim_time += self.target_interval_ms / 1000.0;
            self.last_frame_ms = now_ms;
            Some(self.sim_time as f32)
        } else {
            None
        }
    }

    /// Accumulated simulation time in seconds.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn target_interval_ms(&self) -> f64 {
        self.target_interval_ms
    }
}
