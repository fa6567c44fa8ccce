//! Achievements: a fixed catalog of unlock conditions evaluated against
//! aggregated engine values. Each unlocked achievement grants a permanent
//! production multiplier. Unlocks are one-way and survive prestige.

/// What an achievement measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Lifetime credits earned.
    Credits,
    /// Number of unlocked producers.
    Generators,
    /// Highest producer level.
    GeneratorLevel,
    /// Lifetime taps.
    Taps,
    /// Lifetime prestige count.
    PrestigeCount,
    /// Total Stellar Shards.
    StellarShards,
    /// Number of unlocked tap upgrades.
    ClickUpgrades,
    /// Current credits per second.
    CreditsPerSecond,
}

/// A single catalog entry plus its unlock flag.
#[derive(Clone, Debug)]
pub struct Achievement {
    /// Stable identifier used by the save format.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirement: Requirement,
    pub target: f64,
    /// Bonus added to the achievement multiplier when unlocked
    /// (0.05 = +5%).
    pub reward_multiplier: f64,
    pub unlocked: bool,
}

impl Achievement {
    const fn entry(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        requirement: Requirement,
        target: f64,
        reward_multiplier: f64,
    ) -> Self {
        Self {
            id,
            title,
            description,
            requirement,
            target,
            reward_multiplier,
            unlocked: false,
        }
    }

    /// Progress towards the target in 0..=1 for UI display.
    pub fn progress(&self, current_value: f64) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (current_value / self.target).min(1.0)
    }
}

/// Aggregated engine values the evaluation runs against.
#[derive(Clone, Copy, Debug, Default)]
pub struct AchievementInputs {
    pub total_credits_earned: f64,
    pub generators_unlocked: u32,
    pub max_generator_level: u32,
    pub total_taps: u64,
    pub prestige_count: u32,
    pub stellar_shards: u64,
    pub upgrades_unlocked: u32,
    pub credits_per_second: f64,
}

/// The achievement catalog with unlock state.
#[derive(Clone, Debug)]
pub struct AchievementSet {
    pub achievements: Vec<Achievement>,
}

impl Default for AchievementSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementSet {
    pub fn new() -> Self {
        Self {
            achievements: default_catalog(),
        }
    }

    /// Total multiplier from unlocked achievements:
    /// 1 + sum of reward multipliers.
    pub fn multiplier(&self) -> f64 {
        1.0 + self
            .achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.reward_multiplier)
            .sum::<f64>()
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn total_count(&self) -> usize {
        self.achievements.len()
    }

    /// Completion as a percentage for UI display.
    pub fn completion_percent(&self) -> f64 {
        if self.achievements.is_empty() {
            return 0.0;
        }
        self.unlocked_count() as f64 / self.total_count() as f64 * 100.0
    }

    /// The value `requirement` currently measures.
    pub fn current_value(requirement: Requirement, inputs: &AchievementInputs) -> f64 {
        match requirement {
            Requirement::Credits => inputs.total_credits_earned,
            Requirement::Generators => inputs.generators_unlocked as f64,
            Requirement::GeneratorLevel => inputs.max_generator_level as f64,
            Requirement::Taps => inputs.total_taps as f64,
            Requirement::PrestigeCount => inputs.prestige_count as f64,
            Requirement::StellarShards => inputs.stellar_shards as f64,
            Requirement::ClickUpgrades => inputs.upgrades_unlocked as f64,
            Requirement::CreditsPerSecond => inputs.credits_per_second,
        }
    }

    /// Evaluate every locked achievement against `inputs` and unlock those
    /// whose target is reached. Returns the ids newly unlocked in this
    /// pass (for notifications). Idempotent: a second call with the same
    /// inputs unlocks nothing.
    pub fn check(&mut self, inputs: &AchievementInputs) -> Vec<&'static str> {
        let mut newly_unlocked = Vec::new();
        for achievement in &mut self.achievements {
            if achievement.unlocked {
                continue;
            }
            let current = Self::current_value(achievement.requirement, inputs);
            if current >= achievement.target {
                achievement.unlocked = true;
                newly_unlocked.push(achievement.id);
            }
        }
        newly_unlocked
    }

    pub fn find(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Achievement> {
        self.achievements.iter_mut().find(|a| a.id == id)
    }
}

/// The fixed catalog, in display order.
fn default_catalog() -> Vec<Achievement> {
    use Requirement::*;
    vec![
        // Credits milestones
        Achievement::entry(
            "first_earnings",
            "First Earnings",
            "Earn 1,000 total credits",
            Credits,
            1_000.0,
            0.02,
        ),
        Achievement::entry(
            "getting_rich",
            "Getting Rich",
            "Earn 10,000 total credits",
            Credits,
            10_000.0,
            0.03,
        ),
        Achievement::entry(
            "space_tycoon",
            "Space Tycoon",
            "Earn 100,000 total credits",
            Credits,
            100_000.0,
            0.05,
        ),
        Achievement::entry(
            "millionaire",
            "Millionaire",
            "Earn 1,000,000 total credits",
            Credits,
            1_000_000.0,
            0.08,
        ),
        Achievement::entry(
            "billionaire",
            "Billionaire",
            "Earn 1,000,000,000 total credits",
            Credits,
            1_000_000_000.0,
            0.10,
        ),
        // Generators
        Achievement::entry(
            "starting_fleet",
            "Starting Fleet",
            "Unlock 2 different generators",
            Generators,
            2.0,
            0.03,
        ),
        Achievement::entry(
            "expanding_empire",
            "Expanding Empire",
            "Unlock 4 different generators",
            Generators,
            4.0,
            0.05,
        ),
        Achievement::entry(
            "full_arsenal",
            "Full Arsenal",
            "Unlock all 6 generators",
            Generators,
            6.0,
            0.10,
        ),
        Achievement::entry(
            "master_operator",
            "Master Operator",
            "Upgrade any generator to level 50",
            GeneratorLevel,
            50.0,
            0.07,
        ),
        Achievement::entry(
            "legendary_engineer",
            "Legendary Engineer",
            "Upgrade any generator to level 100",
            GeneratorLevel,
            100.0,
            0.12,
        ),
        // Taps
        Achievement::entry(
            "button_masher",
            "Button Masher",
            "Perform 1,000 taps",
            Taps,
            1_000.0,
            0.02,
        ),
        Achievement::entry(
            "click_commander",
            "Click Commander",
            "Perform 10,000 taps",
            Taps,
            10_000.0,
            0.05,
        ),
        Achievement::entry(
            "tap_titan",
            "Tap Titan",
            "Perform 100,000 taps",
            Taps,
            100_000.0,
            0.10,
        ),
        // Tap upgrades
        Achievement::entry(
            "enhanced_clicking",
            "Enhanced Clicking",
            "Unlock 2 click upgrades",
            ClickUpgrades,
            2.0,
            0.03,
        ),
        Achievement::entry(
            "ultimate_clicker",
            "Ultimate Clicker",
            "Unlock all click upgrades",
            ClickUpgrades,
            5.0,
            0.08,
        ),
        // Prestige
        Achievement::entry(
            "first_ascension",
            "First Ascension",
            "Prestige for the first time",
            PrestigeCount,
            1.0,
            0.05,
        ),
        Achievement::entry(
            "ascension_master",
            "Ascension Master",
            "Prestige 5 times",
            PrestigeCount,
            5.0,
            0.08,
        ),
        Achievement::entry(
            "eternal_ascendant",
            "Eternal Ascendant",
            "Prestige 10 times",
            PrestigeCount,
            10.0,
            0.15,
        ),
        // Stellar Shards
        Achievement::entry(
            "shard_collector",
            "Shard Collector",
            "Earn 10 total Stellar Shards",
            StellarShards,
            10.0,
            0.05,
        ),
        Achievement::entry(
            "shard_hoarder",
            "Shard Hoarder",
            "Earn 50 total Stellar Shards",
            StellarShards,
            50.0,
            0.10,
        ),
        Achievement::entry(
            "cosmic_collector",
            "Cosmic Collector",
            "Earn 100 total Stellar Shards",
            StellarShards,
            100.0,
            0.20,
        ),
        // Production rate
        Achievement::entry(
            "steady_income",
            "Steady Income",
            "Reach 100 credits per second",
            CreditsPerSecond,
            100.0,
            0.03,
        ),
        Achievement::entry(
            "production_powerhouse",
            "Production Powerhouse",
            "Reach 1,000 credits per second",
            CreditsPerSecond,
            1_000.0,
            0.05,
        ),
        Achievement::entry(
            "industrial_giant",
            "Industrial Giant",
            "Reach 10,000 credits per second",
            CreditsPerSecond,
            10_000.0,
            0.08,
        ),
        Achievement::entry(
            "galactic_empire",
            "Galactic Empire",
            "Reach 100,000 credits per second",
            CreditsPerSecond,
            100_000.0,
            0.15,
        ),
    ]
}
