//! External configuration consumed by the engine.
//!
//! These toggles are owned by the embedding application (a settings
//! screen, typically) and passed in on construction and per tick; the
//! engine never reads process-wide state.

#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Master switch for per-producer auto-buy in `tick`.
    pub auto_buy_enabled: bool,
    /// Whether `tick` recomputes the currently-affordable sets and
    /// reports newly affordable entries.
    pub affordability_tracking: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_buy_enabled: false,
            affordability_tracking: true,
        }
    }
}
