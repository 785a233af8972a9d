//! Fixed-timestep frame clock using an accumulator.
//!
//! `draw_web()` fires at ~60fps with variable delta. FrameClock converts
//! that into discrete ticks at the mini-game loop rate (10/sec), so screen
//! logic stays deterministic and testable. The countdown record is simply
//! recomputed every tick; it changes value once per second on its own.

/// Ticks per real-time second for all screens.
pub const TICKS_PER_SEC: u32 = 10;

pub struct FrameClock {
    /// Milliseconds per tick (100ms at 10 ticks/sec).
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks.
    accumulator: f64,
    /// Total elapsed ticks since creation.
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame.
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (epoch ms from `Date.now()`).
    /// Returns the number of discrete ticks to process this frame.
    ///
    /// Call once per draw frame; pass the result to `Screen::tick`.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => {
                let d = now_ms - prev;
                // Clamp to avoid a tick avalanche after a backgrounded tab
                d.clamp(0.0, 500.0)
            }
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}
