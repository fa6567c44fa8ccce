//! Economy primitives: producers (generators) and tap upgrades.
//!
//! Pure value types with their cost curves. No side effects live here;
//! all mutation goes through the engine.

/// Safety bound for greedy bulk-purchase loops, guarding against
/// pathological inputs (e.g. a zero base cost making everything free).
pub const MAX_BULK_LEVELS: u32 = 1000;

/// Kinds of producers (credit generators).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProducerKind {
    MiningProbe,
    AsteroidHarvester,
    QuantumDrill,
    FusionReactor,
    AntimatterGenerator,
    StellarForge,
}

impl ProducerKind {
    /// All producer kinds in catalog order. The order is significant:
    /// the first entry is the starter producer that prestige resets to
    /// level 1 instead of 0.
    pub fn all() -> &'static [ProducerKind] {
        &[
            ProducerKind::MiningProbe,
            ProducerKind::AsteroidHarvester,
            ProducerKind::QuantumDrill,
            ProducerKind::FusionReactor,
            ProducerKind::AntimatterGenerator,
            ProducerKind::StellarForge,
        ]
    }

    /// The starter producer: first position in the catalog. Identified
    /// by position, never by display name.
    pub fn starter() -> ProducerKind {
        Self::all()[0]
    }

    /// Stable identifier used by the save format.
    pub fn id(&self) -> &'static str {
        match self {
            ProducerKind::MiningProbe => "mining_probe",
            ProducerKind::AsteroidHarvester => "asteroid_harvester",
            ProducerKind::QuantumDrill => "quantum_drill",
            ProducerKind::FusionReactor => "fusion_reactor",
            ProducerKind::AntimatterGenerator => "antimatter_generator",
            ProducerKind::StellarForge => "stellar_forge",
        }
    }

    /// Look up a kind by its save-format identifier.
    pub fn from_id(id: &str) -> Option<ProducerKind> {
        Self::all().iter().copied().find(|k| k.id() == id)
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ProducerKind::MiningProbe => "Mining Probe",
            ProducerKind::AsteroidHarvester => "Asteroid Harvester",
            ProducerKind::QuantumDrill => "Quantum Drill",
            ProducerKind::FusionReactor => "Fusion Reactor",
            ProducerKind::AntimatterGenerator => "Antimatter Generator",
            ProducerKind::StellarForge => "Stellar Forge",
        }
    }

    /// Cost of the first level.
    pub fn base_cost(&self) -> f64 {
        match self {
            ProducerKind::MiningProbe => 10.0,
            ProducerKind::AsteroidHarvester => 100.0,
            ProducerKind::QuantumDrill => 1_000.0,
            ProducerKind::FusionReactor => 10_000.0,
            ProducerKind::AntimatterGenerator => 100_000.0,
            ProducerKind::StellarForge => 1_000_000.0,
        }
    }

    /// Credits per second per level.
    pub fn base_production(&self) -> f64 {
        match self {
            ProducerKind::MiningProbe => 1.0,
            ProducerKind::AsteroidHarvester => 10.0,
            ProducerKind::QuantumDrill => 50.0,
            ProducerKind::FusionReactor => 200.0,
            ProducerKind::AntimatterGenerator => 1_000.0,
            ProducerKind::StellarForge => 5_000.0,
        }
    }

    /// Position in `all()`.
    pub fn index(&self) -> usize {
        Self::all().iter().position(|k| k == self).unwrap_or(0)
    }
}

/// A single producer with its current level.
#[derive(Clone, Debug)]
pub struct Producer {
    pub kind: ProducerKind,
    /// 0 = locked, 1+ = unlocked.
    pub level: u32,
    /// Whether the engine buys the next level automatically when affordable.
    pub auto_buy: bool,
}

impl Producer {
    pub fn new(kind: ProducerKind) -> Self {
        Self {
            kind,
            level: 0,
            auto_buy: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.level > 0
    }

    /// Cost of the next level: baseCost * 1.15^level.
    pub fn next_level_cost(&self) -> f64 {
        self.kind.base_cost() * 1.15_f64.powi(self.level as i32)
    }

    /// Current credits per second: baseProduction * level.
    pub fn credits_per_second(&self) -> f64 {
        self.kind.base_production() * self.level as f64
    }

    /// Total cost of buying `levels` additional levels from the current
    /// level, by summation of the geometric series.
    pub fn bulk_cost(&self, levels: u32) -> f64 {
        let levels = levels.min(MAX_BULK_LEVELS);
        let base = self.kind.base_cost();
        let mut total = 0.0;
        for i in 0..levels {
            total += base * 1.15_f64.powi((self.level + i) as i32);
        }
        total
    }

    /// Largest number of levels purchasable with `credits`, computed
    /// greedily one level at a time and capped at `MAX_BULK_LEVELS`.
    pub fn max_affordable_levels(&self, credits: f64) -> u32 {
        let base = self.kind.base_cost();
        let mut remaining = credits;
        let mut bought = 0u32;
        while bought < MAX_BULK_LEVELS {
            let cost = base * 1.15_f64.powi((self.level + bought) as i32);
            if cost > remaining {
                break;
            }
            remaining -= cost;
            bought += 1;
        }
        bought
    }
}

/// Kinds of tap upgrades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeKind {
    ReinforcedGlove,
    QuantumClicker,
    NeuralInterface,
    NanoSwarm,
    SingularityTap,
}

impl UpgradeKind {
    /// All upgrade kinds in catalog order.
    pub fn all() -> &'static [UpgradeKind] {
        &[
            UpgradeKind::ReinforcedGlove,
            UpgradeKind::QuantumClicker,
            UpgradeKind::NeuralInterface,
            UpgradeKind::NanoSwarm,
            UpgradeKind::SingularityTap,
        ]
    }

    /// Stable identifier used by the save format.
    pub fn id(&self) -> &'static str {
        match self {
            UpgradeKind::ReinforcedGlove => "reinforced_glove",
            UpgradeKind::QuantumClicker => "quantum_clicker",
            UpgradeKind::NeuralInterface => "neural_interface",
            UpgradeKind::NanoSwarm => "nano_swarm",
            UpgradeKind::SingularityTap => "singularity_tap",
        }
    }

    /// Look up a kind by its save-format identifier.
    pub fn from_id(id: &str) -> Option<UpgradeKind> {
        Self::all().iter().copied().find(|k| k.id() == id)
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::ReinforcedGlove => "Reinforced Glove",
            UpgradeKind::QuantumClicker => "Quantum Clicker",
            UpgradeKind::NeuralInterface => "Neural Interface",
            UpgradeKind::NanoSwarm => "Nano Swarm",
            UpgradeKind::SingularityTap => "Singularity Tap",
        }
    }

    /// Cost of the first level.
    pub fn base_cost(&self) -> f64 {
        match self {
            UpgradeKind::ReinforcedGlove => 50.0,
            UpgradeKind::QuantumClicker => 500.0,
            UpgradeKind::NeuralInterface => 5_000.0,
            UpgradeKind::NanoSwarm => 50_000.0,
            UpgradeKind::SingularityTap => 500_000.0,
        }
    }

    /// Credits added per tap per level.
    pub fn base_multiplier(&self) -> f64 {
        match self {
            UpgradeKind::ReinforcedGlove => 1.0,
            UpgradeKind::QuantumClicker => 5.0,
            UpgradeKind::NeuralInterface => 25.0,
            UpgradeKind::NanoSwarm => 100.0,
            UpgradeKind::SingularityTap => 500.0,
        }
    }

    /// Position in `all()`.
    pub fn index(&self) -> usize {
        Self::all().iter().position(|k| k == self).unwrap_or(0)
    }
}

/// A single tap upgrade with its current level.
#[derive(Clone, Debug)]
pub struct TapUpgrade {
    pub kind: UpgradeKind,
    /// 0 = locked, 1+ = unlocked.
    pub level: u32,
}

impl TapUpgrade {
    pub fn new(kind: UpgradeKind) -> Self {
        Self { kind, level: 0 }
    }

    pub fn is_unlocked(&self) -> bool {
        self.level > 0
    }

    /// Cost of the next level: baseCost * 2^level.
    pub fn next_level_cost(&self) -> f64 {
        self.kind.base_cost() * 2.0_f64.powi(self.level as i32)
    }

    /// Current credits added per tap: baseMultiplier * level.
    pub fn current_multiplier(&self) -> f64 {
        self.kind.base_multiplier() * self.level as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_initial_cost() {
        let p = Producer::new(ProducerKind::MiningProbe);
        assert!((p.next_level_cost() - 10.0).abs() < 0.001);
    }

    #[test]
    fn producer_cost_scales() {
        let mut p = Producer::new(ProducerKind::MiningProbe);
        p.level = 1;
        assert!((p.next_level_cost() - 10.0 * 1.15).abs() < 0.01);

        p.level = 10;
        let expected = 10.0 * 1.15_f64.powi(10);
        assert!((p.next_level_cost() - expected).abs() < 0.1);
    }

    #[test]
    fn locked_producer_produces_nothing() {
        let p = Producer::new(ProducerKind::AsteroidHarvester);
        assert!(!p.is_unlocked());
        assert!((p.credits_per_second() - 0.0).abs() < 0.001);
    }

    #[test]
    fn production_scales_with_level() {
        let mut p = Producer::new(ProducerKind::AsteroidHarvester);
        p.level = 5;
        assert!((p.credits_per_second() - 50.0).abs() < 0.001); // 5 * 10.0
    }

    #[test]
    fn bulk_cost_of_one_equals_next_level_cost() {
        let mut p = Producer::new(ProducerKind::QuantumDrill);
        p.level = 7;
        assert!((p.bulk_cost(1) - p.next_level_cost()).abs() < 1e-9);
    }

    #[test]
    fn bulk_cost_of_zero_is_free() {
        let p = Producer::new(ProducerKind::QuantumDrill);
        assert!((p.bulk_cost(0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_affordable_matches_bulk_cost() {
        let mut p = Producer::new(ProducerKind::MiningProbe);
        p.level = 3;
        let credits = 500.0;
        let n = p.max_affordable_levels(credits);
        assert!(n > 0);
        assert!(p.bulk_cost(n) <= credits);
        assert!(p.bulk_cost(n + 1) > credits);
    }

    #[test]
    fn max_affordable_zero_when_broke() {
        let p = Producer::new(ProducerKind::StellarForge);
        assert_eq!(p.max_affordable_levels(0.0), 0);
    }

    #[test]
    fn max_affordable_is_capped() {
        // Enough credits for far more than the cap.
        let p = Producer::new(ProducerKind::MiningProbe);
        assert_eq!(p.max_affordable_levels(f64::INFINITY), MAX_BULK_LEVELS);
    }

    #[test]
    fn upgrade_cost_doubles() {
        let mut u = TapUpgrade::new(UpgradeKind::ReinforcedGlove);
        assert!((u.next_level_cost() - 50.0).abs() < 0.001);
        u.level = 3;
        assert!((u.next_level_cost() - 400.0).abs() < 0.001); // 50 * 2^3
    }

    #[test]
    fn upgrade_multiplier_scales_with_level() {
        let mut u = TapUpgrade::new(UpgradeKind::QuantumClicker);
        assert!((u.current_multiplier() - 0.0).abs() < 0.001);
        u.level = 4;
        assert!((u.current_multiplier() - 20.0).abs() < 0.001); // 5 * 4
    }

    #[test]
    fn kind_ids_round_trip() {
        for k in ProducerKind::all() {
            assert_eq!(ProducerKind::from_id(k.id()), Some(*k));
        }
        for k in UpgradeKind::all() {
            assert_eq!(UpgradeKind::from_id(k.id()), Some(*k));
        }
        assert_eq!(ProducerKind::from_id("unknown"), None);
    }

    #[test]
    fn starter_is_first_in_catalog() {
        assert_eq!(ProducerKind::starter(), ProducerKind::all()[0]);
        assert_eq!(ProducerKind::starter().index(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_producer_kind() -> impl Strategy<Value = ProducerKind> {
        prop_oneof![
            Just(ProducerKind::MiningProbe),
            Just(ProducerKind::AsteroidHarvester),
            Just(ProducerKind::QuantumDrill),
            Just(ProducerKind::FusionReactor),
            Just(ProducerKind::AntimatterGenerator),
            Just(ProducerKind::StellarForge),
        ]
    }

    fn arb_upgrade_kind() -> impl Strategy<Value = UpgradeKind> {
        prop_oneof![
            Just(UpgradeKind::ReinforcedGlove),
            Just(UpgradeKind::QuantumClicker),
            Just(UpgradeKind::NeuralInterface),
            Just(UpgradeKind::NanoSwarm),
            Just(UpgradeKind::SingularityTap),
        ]
    }

    // ── Cost curve properties ─────────────────────────────

    proptest! {
        #[test]
        fn prop_producer_cost_always_positive(
            kind in arb_producer_kind(),
            level in 0u32..200,
        ) {
            let mut p = Producer::new(kind);
            p.level = level;
            prop_assert!(p.next_level_cost() > 0.0);
        }

        #[test]
        fn prop_producer_cost_strictly_increases(
            kind in arb_producer_kind(),
            level in 0u32..199,
        ) {
            let mut p = Producer::new(kind);
            p.level = level;
            let before = p.next_level_cost();
            p.level = level + 1;
            prop_assert!(p.next_level_cost() > before);
        }

        #[test]
        fn prop_producer_cost_ratio_is_1_15(
            kind in arb_producer_kind(),
            level in 0u32..150,
        ) {
            let mut p = Producer::new(kind);
            p.level = level;
            let cost_a = p.next_level_cost();
            p.level = level + 1;
            let cost_b = p.next_level_cost();
            prop_assert!((cost_b / cost_a - 1.15).abs() < 0.0001);
        }

        #[test]
        fn prop_upgrade_cost_ratio_is_2(
            kind in arb_upgrade_kind(),
            level in 0u32..60,
        ) {
            let mut u = TapUpgrade::new(kind);
            u.level = level;
            let cost_a = u.next_level_cost();
            u.level = level + 1;
            let cost_b = u.next_level_cost();
            prop_assert!((cost_b / cost_a - 2.0).abs() < 0.0001);
        }
    }

    // ── Bulk purchase properties ──────────────────────────

    proptest! {
        #[test]
        fn prop_bulk_cost_matches_closed_form(
            kind in arb_producer_kind(),
            level in 0u32..100,
            n in 1u32..50,
        ) {
            let mut p = Producer::new(kind);
            p.level = level;
            let summed = p.bulk_cost(n);
            // Geometric series: base * 1.15^level * (1.15^n - 1) / 0.15
            let base = kind.base_cost();
            let closed = base * 1.15_f64.powi(level as i32)
                * (1.15_f64.powi(n as i32) - 1.0)
                / 0.15;
            let tolerance = closed.abs() * 1e-9 + 1e-9;
            prop_assert!((summed - closed).abs() < tolerance,
                "summed {} vs closed {}", summed, closed);
        }

        #[test]
        fn prop_max_affordable_is_maximal(
            kind in arb_producer_kind(),
            level in 0u32..60,
            credits in 0.0f64..1e9,
        ) {
            let mut p = Producer::new(kind);
            p.level = level;
            let n = p.max_affordable_levels(credits);
            prop_assert!(p.bulk_cost(n) <= credits);
            if n < MAX_BULK_LEVELS {
                prop_assert!(p.bulk_cost(n + 1) > credits);
            }
        }

        #[test]
        fn prop_production_linear_in_level(
            kind in arb_producer_kind(),
            level in 1u32..500,
        ) {
            let mut p = Producer::new(kind);
            p.level = level;
            let a = p.credits_per_second();
            p.level = level * 2;
            let b = p.credits_per_second();
            prop_assert!((b / a - 2.0).abs() < 0.0001);
        }
    }
}
