//! Application state: the synthesizer settings shared by every request.
//!
//! Nothing here is mutated after startup; handlers only read it, so it is
//! shared behind a plain `Arc` without locks.

use tracing::{info, instrument};

use crate::config::{load_study_config_from_env, StudyConfig, SynthSettings};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub synth: SynthSettings,
}

impl AppState {
    /// Build state from env: load TOML config if provided, else built-in tables.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_study_config_from_env().unwrap_or_default();
        let state = Self::from_config(cfg);
        info!(
            target: "study_buddy",
            categories = state.synth.categories.len(),
            max_cards = state.synth.max_cards,
            blank_policy = ?state.synth.blank_policy,
            "Synthesizer configured"
        );
        state
    }

    pub fn from_config(cfg: StudyConfig) -> Self {
        Self { synth: cfg.synth }
    }
}
