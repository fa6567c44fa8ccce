//! Converts wall-clock time into whole engine ticks.
//!
//! Front ends call in at whatever rate their frame callbacks or timers
//! fire. `GameTime` banks the elapsed milliseconds and pays them out as
//! discrete one-second ticks, so the simulation stays deterministic no
//! matter how the UI schedules itself. A gap larger than the live clamp
//! (backgrounded tab, suspended process) is not replayed here; that is
//! what offline earnings are for.

/// The engine simulates one second per tick.
pub const TICKS_PER_SECOND: u32 = 1;

/// Largest real-time delta converted into live ticks, in milliseconds.
/// Anything longer is the offline-earnings path's job.
const MAX_LIVE_DELTA_MS: f64 = 5_000.0;

pub struct GameTime {
    /// How many milliseconds one tick is worth.
    ms_per_tick: f64,
    /// Banked fraction of a tick, in milliseconds.
    accumulator: f64,
    /// Ticks paid out over the lifetime of this clock.
    pub total_ticks: u64,
    /// When `update` last ran, in ms; None until the first call.
    last_timestamp: Option<f64>,
}

impl Default for GameTime {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}

impl GameTime {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed the current wall-clock timestamp in milliseconds and get
    /// back how many whole ticks have come due since the last call.
    /// The very first call only establishes the baseline.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_LIVE_DELTA_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

/// Current wall-clock time as seconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_epoch_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current wall-clock time as seconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_epoch_seconds() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}
