//! The game engine: owns all mutable state and processes the production
//! tick and every player action.
//!
//! The engine is a pure state machine: no I/O, no clock, no storage.
//! Callers feed in epoch timestamps and an [`EngineConfig`], and persist
//! the state through [`crate::save`] after mutations (the session layer
//! does both). All operations are infallible: invalid input degrades to
//! a no-op return value, never an error.

use crate::achievements::{AchievementInputs, AchievementSet};
use crate::config::EngineConfig;
use crate::economy::{Producer, ProducerKind, TapUpgrade, UpgradeKind};
use crate::prestige::PrestigeState;
use crate::stats::{SampleCadence, Statistics, SAMPLE_INTERVAL_TICKS};

/// Offline catch-up is capped at 24 hours of production.
pub const MAX_OFFLINE_SECONDS: u64 = 86_400;

/// Offline earnings below one credit are not worth surfacing.
const MIN_OFFLINE_EARNINGS: f64 = 1.0;

/// What one `tick` did, for notification purposes only. Dropping a
/// report loses nothing but notifications.
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    /// Credits produced this tick.
    pub produced: f64,
    /// Producers that became affordable this tick.
    pub newly_affordable_producers: Vec<ProducerKind>,
    /// Upgrades that became affordable this tick.
    pub newly_affordable_upgrades: Vec<UpgradeKind>,
    /// Producers bought by auto-buy this tick, in catalog order.
    pub auto_bought: Vec<ProducerKind>,
    /// Achievement ids unlocked this tick.
    pub unlocked_achievements: Vec<&'static str>,
}

/// What one `tap` earned and unlocked.
#[derive(Clone, Debug, Default)]
pub struct TapReport {
    pub earned: f64,
    pub unlocked_achievements: Vec<&'static str>,
}

/// All mutable game state.
pub struct GameEngine {
    /// Spendable balance. Reset by prestige.
    pub credits: f64,
    /// Lifetime earnings. Never reset; drives prestige and achievements.
    pub total_credits_earned: f64,
    /// Credits per tap: 1 + sum of upgrade multipliers. Cached, and
    /// recomputed whenever an upgrade level changes.
    pub credits_per_tap: f64,
    pub producers: Vec<Producer>,
    pub upgrades: Vec<TapUpgrade>,
    pub prestige: PrestigeState,
    pub achievements: AchievementSet,
    pub stats: Statistics,
    sample_cadence: SampleCadence,
    affordable_producers: Vec<ProducerKind>,
    affordable_upgrades: Vec<UpgradeKind>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Seed a fresh game: the starter producer at level 1, everything
    /// else locked, zero currency.
    pub fn new() -> Self {
        let producers = ProducerKind::all()
            .iter()
            .map(|k| {
                let mut p = Producer::new(*k);
                if *k == ProducerKind::starter() {
                    p.level = 1;
                }
                p
            })
            .collect();
        let upgrades = UpgradeKind::all()
            .iter()
            .map(|k| TapUpgrade::new(*k))
            .collect();
        Self {
            credits: 0.0,
            total_credits_earned: 0.0,
            credits_per_tap: 1.0,
            producers,
            upgrades,
            prestige: PrestigeState::new(),
            achievements: AchievementSet::new(),
            stats: Statistics::new(),
            sample_cadence: SampleCadence::new(SAMPLE_INTERVAL_TICKS),
            affordable_producers: Vec::new(),
            affordable_upgrades: Vec::new(),
        }
    }

    // ── Derived values ────────────────────────────────────

    /// Production per second before multipliers.
    pub fn base_credits_per_second(&self) -> f64 {
        self.producers.iter().map(|p| p.credits_per_second()).sum()
    }

    pub fn prestige_multiplier(&self) -> f64 {
        self.prestige.multiplier()
    }

    pub fn achievement_multiplier(&self) -> f64 {
        self.achievements.multiplier()
    }

    /// Production per second with prestige and achievement multipliers.
    pub fn credits_per_second(&self) -> f64 {
        self.base_credits_per_second() * self.prestige_multiplier() * self.achievement_multiplier()
    }

    /// Combined global multiplier, for UI display.
    pub fn total_multiplier(&self) -> f64 {
        self.prestige_multiplier() * self.achievement_multiplier()
    }

    pub fn producer(&self, kind: ProducerKind) -> &Producer {
        &self.producers[kind.index()]
    }

    pub fn upgrade(&self, kind: UpgradeKind) -> &TapUpgrade {
        &self.upgrades[kind.index()]
    }

    /// The unlocked producer with the highest production, for stats.
    pub fn most_valuable_producer(&self) -> Option<&Producer> {
        self.producers
            .iter()
            .filter(|p| p.is_unlocked())
            .max_by(|a, b| {
                a.credits_per_second()
                    .total_cmp(&b.credits_per_second())
            })
    }

    /// Producer ids currently affordable, as of the last tracked tick.
    pub fn affordable_producers(&self) -> &[ProducerKind] {
        &self.affordable_producers
    }

    /// Upgrade ids currently affordable, as of the last tracked tick.
    pub fn affordable_upgrades(&self) -> &[UpgradeKind] {
        &self.affordable_upgrades
    }

    pub fn potential_shards(&self) -> u64 {
        PrestigeState::potential_shards(self.total_credits_earned)
    }

    pub fn can_prestige(&self) -> bool {
        PrestigeState::can_prestige(self.total_credits_earned)
    }

    // ── Operations ────────────────────────────────────────

    /// Advance the simulation by one second. `now` is epoch seconds,
    /// used only to timestamp production samples.
    ///
    /// Side-effect order is fixed for determinism: production credit,
    /// statistics, sampling, affordability, auto-buy, achievements.
    pub fn tick(&mut self, cfg: &EngineConfig, now: u64) -> TickReport {
        let mut report = TickReport::default();

        // Production credit
        let produced = self.credits_per_second();
        self.credits += produced;
        self.total_credits_earned += produced;
        report.produced = produced;

        // Statistics + downsampled production history
        self.stats.record_tick(produced, produced);
        for _ in 0..self.sample_cadence.advance(1) {
            self.stats.push_production_sample(now, produced);
        }

        // Affordability sets (notification support)
        if cfg.affordability_tracking {
            let (producers, upgrades) = self.compute_affordable();
            report.newly_affordable_producers = producers
                .iter()
                .filter(|k| !self.affordable_producers.contains(k))
                .copied()
                .collect();
            report.newly_affordable_upgrades = upgrades
                .iter()
                .filter(|k| !self.affordable_upgrades.contains(k))
                .copied()
                .collect();
            self.affordable_producers = producers;
            self.affordable_upgrades = upgrades;
        } else {
            // Otherwise the accessors would keep serving sets computed
            // back when tracking was still on.
            self.affordable_producers.clear();
            self.affordable_upgrades.clear();
        }

        // Auto-buy: one level per flagged producer, catalog order
        if cfg.auto_buy_enabled {
            for idx in 0..self.producers.len() {
                if !self.producers[idx].auto_buy {
                    continue;
                }
                let cost = self.producers[idx].next_level_cost();
                if cost <= self.credits {
                    self.credits -= cost;
                    self.producers[idx].level += 1;
                    self.stats.record_purchases(1);
                    report.auto_bought.push(self.producers[idx].kind);
                }
            }
        }

        report.unlocked_achievements = self.check_achievements();
        report
    }

    /// A manual tap. Never fails.
    pub fn tap(&mut self, now: u64) -> TapReport {
        let earned =
            self.credits_per_tap * self.prestige_multiplier() * self.achievement_multiplier();
        self.credits += earned;
        self.total_credits_earned += earned;
        self.stats.record_tap(now);
        TapReport {
            earned,
            unlocked_achievements: self.check_achievements(),
        }
    }

    /// Buy up to `quantity` levels of a producer, limited by what the
    /// current balance affords. Returns the number of levels actually
    /// bought; 0 means nothing changed.
    pub fn buy_producer(&mut self, kind: ProducerKind, quantity: u32) -> u32 {
        let idx = kind.index();
        let affordable = self.producers[idx].max_affordable_levels(self.credits);
        let count = affordable.min(quantity);
        if count == 0 {
            return 0;
        }
        let cost = self.producers[idx].bulk_cost(count);
        self.credits -= cost;
        self.producers[idx].level += count;
        self.stats.record_purchases(count as u64);
        count
    }

    /// Buy as many levels of a producer as the balance affords.
    pub fn buy_max_producer(&mut self, kind: ProducerKind) -> u32 {
        let max = self.producer(kind).max_affordable_levels(self.credits);
        self.buy_producer(kind, max)
    }

    /// Buy one level of a tap upgrade. Returns false (no state change)
    /// if the balance is short.
    pub fn buy_upgrade(&mut self, kind: UpgradeKind) -> bool {
        let idx = kind.index();
        let cost = self.upgrades[idx].next_level_cost();
        if self.credits < cost {
            return false;
        }
        self.credits -= cost;
        self.upgrades[idx].level += 1;
        self.stats.record_purchases(1);
        self.recompute_credits_per_tap();
        true
    }

    /// Toggle auto-buy for one producer. Returns false if the flag
    /// already had that value.
    pub fn set_auto_buy(&mut self, kind: ProducerKind, enabled: bool) -> bool {
        let producer = &mut self.producers[kind.index()];
        if producer.auto_buy == enabled {
            return false;
        }
        producer.auto_buy = enabled;
        true
    }

    /// Reset the run for permanent shards. Unconditional: callers gate
    /// on `can_prestige` if a zero-shard reset is undesirable. Returns
    /// the shards gained.
    pub fn prestige(&mut self) -> u64 {
        let new_shards = self.potential_shards();
        self.prestige.perform(new_shards);

        self.credits = 0.0;
        let starter = ProducerKind::starter();
        for producer in &mut self.producers {
            // Starter producer (catalog position 0) restarts unlocked.
            producer.level = if producer.kind == starter { 1 } else { 0 };
        }
        for upgrade in &mut self.upgrades {
            upgrade.level = 0;
        }
        self.recompute_credits_per_tap();
        self.stats.reset_session();
        self.affordable_producers.clear();
        self.affordable_upgrades.clear();
        self.check_achievements();
        new_shards
    }

    /// Credit production for time spent away: elapsed wall-clock time
    /// capped at 24 hours, at the current effective rate. Returns the
    /// amount credited, or None when it falls below the significance
    /// floor (including first launch, where callers have no prior
    /// timestamp and skip this entirely).
    pub fn offline_earnings(&mut self, last_save: u64, now: u64) -> Option<f64> {
        let elapsed = now.saturating_sub(last_save).min(MAX_OFFLINE_SECONDS);
        let earnings = self.credits_per_second() * elapsed as f64;
        if earnings < MIN_OFFLINE_EARNINGS {
            return None;
        }
        self.credits += earnings;
        self.total_credits_earned += earnings;
        Some(earnings)
    }

    // ── Internals ─────────────────────────────────────────

    /// Recompute the cached credits-per-tap from upgrade levels.
    pub fn recompute_credits_per_tap(&mut self) {
        self.credits_per_tap = 1.0
            + self
                .upgrades
                .iter()
                .map(|u| u.current_multiplier())
                .sum::<f64>();
    }

    fn compute_affordable(&self) -> (Vec<ProducerKind>, Vec<UpgradeKind>) {
        let producers = self
            .producers
            .iter()
            .filter(|p| p.next_level_cost() <= self.credits)
            .map(|p| p.kind)
            .collect();
        let upgrades = self
            .upgrades
            .iter()
            .filter(|u| u.next_level_cost() <= self.credits)
            .map(|u| u.kind)
            .collect();
        (producers, upgrades)
    }

    fn achievement_inputs(&self) -> AchievementInputs {
        AchievementInputs {
            total_credits_earned: self.total_credits_earned,
            generators_unlocked: self.producers.iter().filter(|p| p.is_unlocked()).count() as u32,
            max_generator_level: self.producers.iter().map(|p| p.level).max().unwrap_or(0),
            total_taps: self.stats.total_taps,
            prestige_count: self.prestige.lifetime_prestige_count,
            stellar_shards: self.prestige.stellar_shards,
            upgrades_unlocked: self.upgrades.iter().filter(|u| u.is_unlocked()).count() as u32,
            credits_per_second: self.credits_per_second(),
        }
    }

    /// Re-evaluate achievements against current state. Returns newly
    /// unlocked ids.
    pub fn check_achievements(&mut self) -> Vec<&'static str> {
        let inputs = self.achievement_inputs();
        self.achievements.check(&inputs)
    }
}
