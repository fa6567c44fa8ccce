//! Statistics: observational counters and bounded time-series.
//!
//! Nothing here feeds back into gameplay formulas. Counters are
//! monotonic within a session; the two time-series are bounded
//! (drop-oldest on overflow).

use serde::{Deserialize, Serialize};

/// Maximum retained production samples (one per minute, so the last hour).
pub const PRODUCTION_HISTORY_CAP: usize = 60;

/// Maximum retained daily activity buckets (rolling 30 days).
pub const DAILY_ACTIVITY_CAP: usize = 30;

/// Ticks between production samples (1 tick = 1 second).
pub const SAMPLE_INTERVAL_TICKS: u32 = 60;

/// One point on the production-over-time chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductionSample {
    /// Epoch seconds at sample time.
    pub timestamp: u64,
    pub credits_per_second: f64,
}

/// Tap activity for one calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Days since the Unix epoch.
    pub day: u64,
    pub taps: u64,
}

/// Explicit downsampling policy: emits one sample per `interval` ticks,
/// independent of how ticks are batched by the caller.
#[derive(Clone, Debug)]
pub struct SampleCadence {
    interval: u32,
    counter: u32,
}

impl SampleCadence {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            counter: 0,
        }
    }

    /// Advance by `ticks`; returns how many samples are due.
    pub fn advance(&mut self, ticks: u32) -> u32 {
        self.counter += ticks;
        let due = self.counter / self.interval;
        self.counter %= self.interval;
        due
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

/// All observational state tracked by the engine.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    /// Lifetime taps. Drives tap achievements; never reset.
    pub total_taps: u64,
    /// Taps since the session (or latest prestige) started.
    pub session_taps: u64,
    /// Lifetime seconds of simulated play.
    pub total_time_played: u64,
    /// Seconds of simulated play this session.
    pub session_time_played: u64,
    /// Credits earned this session.
    pub session_credits_earned: f64,
    /// Highest credits-per-second ever observed.
    pub peak_credits_per_second: f64,
    /// Lifetime count of producer/upgrade purchases.
    pub total_purchases: u64,
    /// Recent production samples, oldest first.
    pub production_history: Vec<ProductionSample>,
    /// Per-day tap buckets, oldest first.
    pub daily_activity: Vec<DailyActivity>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one simulated second of play.
    pub fn record_tick(&mut self, produced: f64, current_cps: f64) {
        self.total_time_played += 1;
        self.session_time_played += 1;
        self.session_credits_earned += produced;
        if current_cps > self.peak_credits_per_second {
            self.peak_credits_per_second = current_cps;
        }
    }

    pub fn record_tap(&mut self, now: u64) {
        self.total_taps += 1;
        self.session_taps += 1;
        self.bump_daily_activity(now / 86_400);
    }

    pub fn record_purchases(&mut self, count: u64) {
        self.total_purchases += count;
    }

    /// Append a production sample, dropping the oldest past the cap.
    pub fn push_production_sample(&mut self, now: u64, credits_per_second: f64) {
        self.production_history.push(ProductionSample {
            timestamp: now,
            credits_per_second,
        });
        if self.production_history.len() > PRODUCTION_HISTORY_CAP {
            self.production_history.remove(0);
        }
    }

    fn bump_daily_activity(&mut self, day: u64) {
        match self.daily_activity.last_mut() {
            Some(bucket) if bucket.day == day => bucket.taps += 1,
            _ => {
                self.daily_activity.push(DailyActivity { day, taps: 1 });
                if self.daily_activity.len() > DAILY_ACTIVITY_CAP {
                    self.daily_activity.remove(0);
                }
            }
        }
    }

    /// Reset session-scoped counters. Lifetime counters and the
    /// time-series are untouched.
    pub fn reset_session(&mut self) {
        self.session_taps = 0;
        self.session_time_played = 0;
        self.session_credits_earned = 0.0;
    }
}
