//! Configuration loading for MedTouch.
//! Reads medtouch.toml from the current directory or the path in MEDTOUCH_CONFIG.
//! Every field has a default, so an absent file or an empty one is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const CONFIG_ENV: &str = "MEDTOUCH_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "medtouch.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scoring config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// How the scorer fills the `confidence` fields of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceMode {
    /// Uniform draw from `[confidence_min, confidence_min + confidence_span)`.
    #[default]
    Randomized,
    /// Derived from the score's distance to the nearest level boundary.
    Deterministic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub confidence_mode: ConfidenceMode,
    #[serde(default = "default_confidence_min")]
    pub confidence_min: f64,
    #[serde(default = "default_confidence_span")]
    pub confidence_span: f64,
}

fn default_confidence_min() -> f64 { 75.0 }
fn default_confidence_span() -> f64 { 15.0 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence_mode: ConfidenceMode::default(),
            confidence_min: default_confidence_min(),
            confidence_span: default_confidence_span(),
        }
    }
}

impl ScoringConfig {
    /// The confidence range must stay inside [0, 100].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.confidence_min.is_finite() || !self.confidence_span.is_finite() {
            return Err(ConfigError::Invalid("confidence bounds must be finite".into()));
        }
        if self.confidence_span < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "confidence_span must be non-negative, got {}",
                self.confidence_span
            )));
        }
        let max = self.confidence_min + self.confidence_span;
        if self.confidence_min < 0.0 || max > 100.0 {
            return Err(ConfigError::Invalid(format!(
                "confidence range [{}, {}] leaves [0, 100]",
                self.confidence_min, max
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from medtouch.toml.
    /// Checks MEDTOUCH_CONFIG env var first, then current directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.scoring.validate()?;
        Ok(config)
    }
}
