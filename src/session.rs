//! Session layer: wires the pure engine to a clock and a save store.
//!
//! The engine never touches wall time or storage on its own. A
//! `GameSession` owns both, drives fixed-timestep ticks from frame
//! callbacks, applies offline catch-up on load, and persists after
//! every state change.

use crate::clock::GameTime;
use crate::config::EngineConfig;
use crate::economy::{ProducerKind, UpgradeKind};
use crate::engine::{GameEngine, TapReport, TickReport};
use crate::save::{self, SaveStore};

pub struct GameSession<S: SaveStore> {
    pub engine: GameEngine,
    pub config: EngineConfig,
    store: S,
    time: GameTime,
}

impl<S: SaveStore> GameSession<S> {
    /// Load from the store, or seed a fresh game when the store is
    /// empty, undecodable, or holds an incompatible version. Returns
    /// the session and the offline earnings credited on load (None on
    /// first launch or when they fall below the significance floor).
    pub fn load_or_new(store: S, config: EngineConfig, now: u64) -> (Self, Option<f64>) {
        let mut offline = None;
        let engine = match store.read().and_then(|json| save::decode(&json)) {
            Some(data) => match save::apply_save(&data) {
                Some(mut engine) => {
                    if data.last_save_timestamp > 0 {
                        offline = engine.offline_earnings(data.last_save_timestamp, now);
                        if let Some(earned) = offline {
                            log::info!("credited {earned:.0} offline credits");
                        }
                    }
                    engine
                }
                None => GameEngine::new(),
            },
            None => GameEngine::new(),
        };
        let mut session = Self {
            engine,
            config,
            store,
            time: GameTime::default(),
        };
        session.save(now);
        (session, offline)
    }

    /// Feed a wall-clock timestamp in milliseconds; runs however many
    /// whole ticks have elapsed and saves if any ran.
    pub fn advance(&mut self, now_ms: f64) -> Vec<TickReport> {
        let ticks = self.time.update(now_ms);
        if ticks == 0 {
            return Vec::new();
        }
        let now = (now_ms / 1000.0) as u64;
        let reports = (0..ticks)
            .map(|_| self.engine.tick(&self.config, now))
            .collect();
        self.save(now);
        reports
    }

    pub fn tap(&mut self, now: u64) -> TapReport {
        let report = self.engine.tap(now);
        self.save(now);
        report
    }

    pub fn buy_producer(&mut self, kind: ProducerKind, quantity: u32, now: u64) -> u32 {
        let bought = self.engine.buy_producer(kind, quantity);
        if bought > 0 {
            self.save(now);
        }
        bought
    }

    pub fn buy_max_producer(&mut self, kind: ProducerKind, now: u64) -> u32 {
        let bought = self.engine.buy_max_producer(kind);
        if bought > 0 {
            self.save(now);
        }
        bought
    }

    pub fn buy_upgrade(&mut self, kind: UpgradeKind, now: u64) -> bool {
        let bought = self.engine.buy_upgrade(kind);
        if bought {
            self.save(now);
        }
        bought
    }

    pub fn set_auto_buy(&mut self, kind: ProducerKind, enabled: bool, now: u64) {
        if self.engine.set_auto_buy(kind, enabled) {
            self.save(now);
        }
    }

    /// Prestige, gated on the earnings threshold. The engine itself
    /// would accept a zero-shard reset; the session does not offer one.
    pub fn prestige(&mut self, now: u64) -> Option<u64> {
        if !self.engine.can_prestige() {
            return None;
        }
        let shards = self.engine.prestige();
        self.save(now);
        Some(shards)
    }

    /// Wipe the store and start over. Irreversible.
    pub fn reset(&mut self, now: u64) {
        self.store.clear();
        self.engine = GameEngine::new();
        self.time = GameTime::default();
        self.save(now);
    }

    /// Snapshot to the store. A failed write is logged and swallowed;
    /// the next successful save supersedes it.
    pub fn save(&mut self, now: u64) {
        let snapshot = save::extract_save(&self.engine, now);
        if let Some(json) = save::encode(&snapshot) {
            if !self.store.write(&json) {
                log::warn!("save write failed, will retry on next change");
            }
        }
    }
}
