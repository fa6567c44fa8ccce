//! Prestige: convert lifetime earnings into permanent Stellar Shards.

/// Lifetime credits required before the first shard is available.
pub const PRESTIGE_THRESHOLD: f64 = 1_000_000.0;

/// Production bonus per shard (+10%).
const SHARD_BONUS: f64 = 0.1;

/// Permanent prestige currency and counters. Monotonically non-decreasing;
/// only `perform` mutates it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrestigeState {
    /// Total Stellar Shards earned across all prestiges.
    pub stellar_shards: u64,
    /// Number of times the player has prestiged.
    pub lifetime_prestige_count: u32,
}

impl PrestigeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global production multiplier: 1 + shards * 0.1.
    pub fn multiplier(&self) -> f64 {
        1.0 + self.stellar_shards as f64 * SHARD_BONUS
    }

    /// Shards a prestige would grant right now:
    /// floor(sqrt(totalCreditsEarned / 1_000_000)), 0 below the threshold.
    pub fn potential_shards(total_credits_earned: f64) -> u64 {
        if total_credits_earned < PRESTIGE_THRESHOLD {
            return 0;
        }
        (total_credits_earned / PRESTIGE_THRESHOLD).sqrt().floor() as u64
    }

    /// Whether a prestige is worthwhile to offer the player.
    pub fn can_prestige(total_credits_earned: f64) -> bool {
        total_credits_earned >= PRESTIGE_THRESHOLD
    }

    /// Add newly earned shards and bump the prestige counter. Never
    /// rejects; callers gate on `can_prestige` if a zero-shard prestige
    /// is undesirable.
    pub fn perform(&mut self, new_shards: u64) {
        self.stellar_shards += new_shards;
        self.lifetime_prestige_count += 1;
    }
}
