//! Server configuration loaded from TOML.

use cyber_burst_rules::{RulesetKind, SessionSettings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for one server process hosting one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct ServerConfig {
    /// Interface to bind.
    #[setters(into)]
    host: String,

    /// Port to bind.
    port: u16,

    /// Word-chain rules to play by.
    ruleset: RulesetKind,

    /// Seats at the table.
    max_players: usize,

    /// Starting time bank per player, in seconds.
    time_bank_secs: u32,

    /// Highest safe score.
    bust_limit: u32,

    /// Milliseconds between clock ticks.
    tick_interval_ms: u64,

    /// Snapshots buffered per subscriber before it starts lagging.
    broadcast_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let session = SessionSettings::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ruleset: RulesetKind::default(),
            max_players: *session.max_players(),
            time_bank_secs: *session.time_bank_secs(),
            bust_limit: *session.bust_limit(),
            tick_interval_ms: 1000,
            broadcast_capacity: 64,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ruleset = %config.ruleset, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the settings describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players < 2 {
            return Err(ConfigError::new(format!(
                "max_players must be at least 2, got {}",
                self.max_players
            )));
        }
        if self.time_bank_secs == 0 {
            return Err(ConfigError::new("time_bank_secs must be positive"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::new("tick_interval_ms must be positive"));
        }
        Ok(())
    }

    /// Session limits derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::new(self.max_players, self.time_bank_secs, self.bust_limit)
    }

    /// Time between clock ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
