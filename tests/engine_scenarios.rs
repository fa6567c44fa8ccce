//! End-to-end scenarios through the public API: fresh games, whole
//! play sessions, persistence across restarts, and offline catch-up.

use space_mining_empire::config::EngineConfig;
use space_mining_empire::economy::{ProducerKind, UpgradeKind};
use space_mining_empire::engine::GameEngine;
use space_mining_empire::save::{self, MemoryStore};
use space_mining_empire::session::GameSession;

fn session_with(store: MemoryStore, now: u64) -> (GameSession<MemoryStore>, Option<f64>) {
    GameSession::load_or_new(store, EngineConfig::default(), now)
}

#[test]
fn fresh_game_starts_with_one_probe() {
    let (session, offline) = session_with(MemoryStore::new(), 0);
    assert_eq!(offline, None, "first launch must skip offline earnings");
    let engine = &session.engine;
    assert_eq!(engine.producer(ProducerKind::MiningProbe).level, 1);
    assert!((engine.credits_per_second() - 1.0).abs() < 1e-9);
    assert!((engine.credits_per_tap - 1.0).abs() < 1e-9);
    assert_eq!(engine.achievements.unlocked_count(), 0);
}

#[test]
fn two_minutes_of_active_play() {
    let (mut session, _) = session_with(MemoryStore::new(), 0);
    session.advance(0.0);
    for second in 1..=120u64 {
        session.tap(second);
        session.advance(second as f64 * 1000.0);
    }
    let engine = &session.engine;
    // 120 credits from production plus 120 from taps.
    assert!((engine.total_credits_earned - 240.0).abs() < 1e-6);
    assert_eq!(engine.stats.total_taps, 120);
    // "First Earnings" needs 1,000; nothing unlocked yet.
    assert_eq!(engine.achievements.unlocked_count(), 0);
}

#[test]
fn restart_restores_the_same_game() {
    let (mut session, _) = session_with(MemoryStore::new(), 100);
    session.engine.credits = 10_000.0;
    session.engine.total_credits_earned = 10_000.0;
    session.buy_producer(ProducerKind::AsteroidHarvester, 5, 100);
    session.buy_upgrade(UpgradeKind::ReinforcedGlove, 100);
    session.set_auto_buy(ProducerKind::MiningProbe, true, 100);

    let snapshot = save::extract_save(&session.engine, 100);
    session.save(100);

    // Same timestamp: restart with no offline gap.
    let json = save::encode(&snapshot).unwrap();
    let (restored, offline) = session_with(MemoryStore::with_contents(json), 100);
    assert_eq!(offline, None);
    let a = &session.engine;
    let b = &restored.engine;
    assert!((a.credits - b.credits).abs() < 1e-9);
    assert_eq!(
        a.producer(ProducerKind::AsteroidHarvester).level,
        b.producer(ProducerKind::AsteroidHarvester).level
    );
    assert!((a.credits_per_tap - b.credits_per_tap).abs() < 1e-9);
    assert!(b.producer(ProducerKind::MiningProbe).auto_buy);
}

#[test]
fn offline_overnight_is_capped_at_a_day() {
    let mut engine = GameEngine::new();
    engine.producers[0].level = 5; // 5 credits/s
    let json = save::encode(&save::extract_save(&engine, 1_000_000)).unwrap();

    // Three days later; only 24 hours count.
    let (restored, offline) =
        session_with(MemoryStore::with_contents(json), 1_000_000 + 3 * 86_400);
    assert_eq!(offline, Some(5.0 * 86_400.0));
    assert!((restored.engine.credits - 5.0 * 86_400.0).abs() < 1e-6);
}

#[test]
fn corrupted_save_starts_over_instead_of_crashing() {
    let (session, offline) = session_with(MemoryStore::with_contents("{oops"), 0);
    assert_eq!(offline, None);
    assert_eq!(session.engine.producer(ProducerKind::MiningProbe).level, 1);
}

#[test]
fn full_prestige_cycle() {
    let (mut session, _) = session_with(MemoryStore::new(), 0);
    session.engine.credits = 2_000_000.0;
    session.engine.total_credits_earned = 4_000_000.0;
    session.buy_producer(ProducerKind::QuantumDrill, 10, 0);

    let shards = session.prestige(0).unwrap();
    assert_eq!(shards, 2);

    let engine = &session.engine;
    assert!((engine.credits - 0.0).abs() < f64::EPSILON);
    assert_eq!(engine.producer(ProducerKind::QuantumDrill).level, 0);
    assert_eq!(engine.producer(ProducerKind::MiningProbe).level, 1);
    // 2 shards: 20% faster from now on.
    assert!((engine.credits_per_second() - 1.0 * 1.2 * engine.achievement_multiplier()).abs() < 1e-9);
    assert!(engine.achievements.find("first_ascension").unwrap().unlocked);
}

#[test]
fn engine_alone_needs_no_store() {
    // The engine is usable without any session or storage.
    let mut engine = GameEngine::new();
    let config = EngineConfig::default();
    for i in 0..100 {
        engine.tick(&config, i);
    }
    assert!((engine.credits - 100.0).abs() < 1e-9);
}

#[test]
fn auto_buy_spends_down_the_balance() {
    let (mut session, _) = session_with(MemoryStore::new(), 0);
    session.config.auto_buy_enabled = true;
    session.engine.credits = 100.0;
    session.set_auto_buy(ProducerKind::MiningProbe, true, 0);

    session.advance(0.0);
    session.advance(10_000.0); // 5 live ticks (clamped) is plenty
    assert!(
        session.engine.producer(ProducerKind::MiningProbe).level > 1,
        "auto-buy never fired"
    );
}
