//! Space Mining Empire: the game-state engine for an incremental idle
//! game about taps, producers and prestige.
//!
//! The crate is UI-agnostic. [`engine::GameEngine`] is a pure state
//! machine; [`session::GameSession`] wires it to a fixed-timestep clock
//! and a [`save::SaveStore`] (localStorage on wasm, in-memory
//! elsewhere). A typical embedding:
//!
//! ```
//! use space_mining_empire::config::EngineConfig;
//! use space_mining_empire::save::MemoryStore;
//! use space_mining_empire::session::GameSession;
//!
//! let (mut session, offline) =
//!     GameSession::load_or_new(MemoryStore::new(), EngineConfig::default(), 0);
//! assert!(offline.is_none()); // first launch
//! session.tap(0);
//! let _reports = session.advance(1_000.0);
//! ```

pub mod achievements;
pub mod clock;
pub mod config;
pub mod economy;
pub mod engine;
pub mod format;
pub mod prestige;
pub mod save;
pub mod session;
pub mod stats;

mod simulator;

pub use config::EngineConfig;
pub use economy::{Producer, ProducerKind, TapUpgrade, UpgradeKind};
pub use engine::{GameEngine, TapReport, TickReport};
pub use session::GameSession;
