//! Save / load for the whole game state.
//!
//! The snapshot is a single JSON document. Decoding is deliberately
//! lenient: a corrupted or unrecognized collection falls back to its
//! default (and logs a warning) instead of failing the whole load, so
//! one bad field never costs the player their save. Entries are matched
//! to the catalogs by stable string id; unknown ids are ignored, which
//! lets the catalogs grow or shrink between releases.

use serde::{Deserialize, Deserializer, Serialize};

use crate::economy::{Producer, ProducerKind, TapUpgrade, UpgradeKind};
use crate::engine::GameEngine;
use crate::stats::{DailyActivity, ProductionSample, Statistics};

/// Bump this when the save format changes.
pub const SAVE_VERSION: u32 = 1;

/// Oldest format version `apply_save` will accept.
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// Deserialize a field leniently: on error, log and fall back to the
/// default instead of failing the containing struct.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match T::deserialize(value) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            log::warn!("discarding corrupted save field: {err}");
            Ok(T::default())
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProducerSave {
    pub id: String,
    pub level: u32,
    #[serde(default)]
    pub auto_buy: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpgradeSave {
    pub id: String,
    pub level: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PrestigeSave {
    pub stellar_shards: u64,
    pub lifetime_prestige_count: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AchievementSave {
    pub id: String,
    pub unlocked: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsSave {
    #[serde(default)]
    pub total_taps: u64,
    #[serde(default)]
    pub total_time_played: u64,
    #[serde(default)]
    pub peak_credits_per_second: f64,
    #[serde(default)]
    pub total_purchases: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub production_history: Vec<ProductionSample>,
    #[serde(default, deserialize_with = "lenient")]
    pub daily_activity: Vec<DailyActivity>,
}

/// The full snapshot. Every field defaults so partially-written or
/// older saves still load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    #[serde(default)]
    pub credits: f64,
    #[serde(default)]
    pub total_credits_earned: f64,
    #[serde(default)]
    pub credits_per_tap: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub producers: Vec<ProducerSave>,
    #[serde(default, deserialize_with = "lenient")]
    pub upgrades: Vec<UpgradeSave>,
    #[serde(default, deserialize_with = "lenient")]
    pub prestige: PrestigeSave,
    #[serde(default, deserialize_with = "lenient")]
    pub achievements: Vec<AchievementSave>,
    #[serde(default, deserialize_with = "lenient")]
    pub stats: StatsSave,
    /// Epoch seconds of the last save, for offline catch-up.
    #[serde(default)]
    pub last_save_timestamp: u64,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            credits: 0.0,
            total_credits_earned: 0.0,
            credits_per_tap: 1.0,
            producers: Vec::new(),
            upgrades: Vec::new(),
            prestige: PrestigeSave::default(),
            achievements: Vec::new(),
            stats: StatsSave::default(),
            last_save_timestamp: 0,
        }
    }
}

/// Snapshot the engine for serialization.
pub fn extract_save(engine: &GameEngine, now: u64) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        credits: engine.credits,
        total_credits_earned: engine.total_credits_earned,
        credits_per_tap: engine.credits_per_tap,
        producers: engine
            .producers
            .iter()
            .map(|p| ProducerSave {
                id: p.kind.id().to_owned(),
                level: p.level,
                auto_buy: p.auto_buy,
            })
            .collect(),
        upgrades: engine
            .upgrades
            .iter()
            .map(|u| UpgradeSave {
                id: u.kind.id().to_owned(),
                level: u.level,
            })
            .collect(),
        prestige: PrestigeSave {
            stellar_shards: engine.prestige.stellar_shards,
            lifetime_prestige_count: engine.prestige.lifetime_prestige_count,
        },
        achievements: engine
            .achievements
            .achievements
            .iter()
            .map(|a| AchievementSave {
                id: a.id.to_owned(),
                unlocked: a.unlocked,
            })
            .collect(),
        stats: StatsSave {
            total_taps: engine.stats.total_taps,
            total_time_played: engine.stats.total_time_played,
            peak_credits_per_second: engine.stats.peak_credits_per_second,
            total_purchases: engine.stats.total_purchases,
            production_history: engine.stats.production_history.clone(),
            daily_activity: engine.stats.daily_activity.clone(),
        },
        last_save_timestamp: now,
    }
}

/// Restore a snapshot onto a fresh engine. Returns None when the save
/// is older than [`MIN_COMPATIBLE_VERSION`], in which case callers
/// start a new game.
pub fn apply_save(save: &SaveData) -> Option<GameEngine> {
    if save.version < MIN_COMPATIBLE_VERSION {
        log::warn!(
            "save version {} below minimum {}, starting fresh",
            save.version,
            MIN_COMPATIBLE_VERSION
        );
        return None;
    }
    let mut engine = GameEngine::new();
    engine.credits = save.credits;
    engine.total_credits_earned = save.total_credits_earned;

    // Catalog entries keep their fresh-seed values unless the save
    // names them; save entries with unknown ids are dropped.
    for entry in &save.producers {
        if let Some(kind) = ProducerKind::from_id(&entry.id) {
            let producer = &mut engine.producers[kind.index()];
            producer.level = entry.level;
            producer.auto_buy = entry.auto_buy;
        } else {
            log::warn!("ignoring unknown producer id in save: {}", entry.id);
        }
    }
    for entry in &save.upgrades {
        if let Some(kind) = UpgradeKind::from_id(&entry.id) {
            engine.upgrades[kind.index()].level = entry.level;
        } else {
            log::warn!("ignoring unknown upgrade id in save: {}", entry.id);
        }
    }
    for entry in &save.achievements {
        match engine.achievements.find_mut(&entry.id) {
            // One-way: a save can only add unlocks, never revert them.
            Some(a) => a.unlocked = a.unlocked || entry.unlocked,
            None => log::warn!("ignoring unknown achievement id in save: {}", entry.id),
        }
    }

    engine.prestige.stellar_shards = save.prestige.stellar_shards;
    engine.prestige.lifetime_prestige_count = save.prestige.lifetime_prestige_count;

    engine.stats = Statistics {
        total_taps: save.stats.total_taps,
        total_time_played: save.stats.total_time_played,
        peak_credits_per_second: save.stats.peak_credits_per_second,
        total_purchases: save.stats.total_purchases,
        production_history: save.stats.production_history.clone(),
        daily_activity: save.stats.daily_activity.clone(),
        ..Statistics::new()
    };

    // Derived from upgrade levels; the persisted value is advisory.
    engine.recompute_credits_per_tap();
    Some(engine)
}

/// Serialize a snapshot to the JSON stored on disk.
pub fn encode(save: &SaveData) -> Option<String> {
    match serde_json::to_string(save) {
        Ok(json) => Some(json),
        Err(err) => {
            log::error!("failed to encode save: {err}");
            None
        }
    }
}

/// Parse stored JSON. A document that is not an object at all is
/// unrecoverable and yields None. The object check is explicit because
/// serde will happily read a struct out of a bare array.
pub fn decode(json: &str) -> Option<SaveData> {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to parse save: {err}");
            return None;
        }
    };
    if !value.is_object() {
        log::warn!("save document is not an object, discarding");
        return None;
    }
    match serde_json::from_value(value) {
        Ok(save) => Some(save),
        Err(err) => {
            log::warn!("failed to decode save: {err}");
            None
        }
    }
}

/// Where save snapshots live. The engine only sees strings; the store
/// decides the medium.
pub trait SaveStore {
    fn read(&self) -> Option<String>;
    /// Returns false when the write did not stick.
    fn write(&mut self, json: &str) -> bool;
    fn clear(&mut self);
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            contents: Some(json.into()),
        }
    }
}

impl SaveStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.contents.clone()
    }

    fn write(&mut self, json: &str) -> bool {
        self.contents = Some(json.to_owned());
        true
    }

    fn clear(&mut self) {
        self.contents = None;
    }
}

/// Browser localStorage store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug)]
pub struct LocalStorageStore {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "space_mining_empire_save";

    pub fn new() -> Self {
        Self {
            key: Self::DEFAULT_KEY,
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl SaveStore for LocalStorageStore {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok()?
    }

    fn write(&mut self, json: &str) -> bool {
        match Self::storage() {
            Some(storage) => storage.set_item(self.key, json).is_ok(),
            None => false,
        }
    }

    fn clear(&mut self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}
