//! Shared application state for the web server.

use medtouch_config::Config;
use medtouch_scorer::{confidence, RiskScorer};
use std::sync::Arc;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub scorer: RiskScorer,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let scorer = RiskScorer::new(confidence::from_config(&config.scoring));
        Self { config, scorer }
    }
}

pub type SharedState = Arc<AppState>;
