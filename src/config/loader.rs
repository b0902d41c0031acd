use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Exit targets past this many surface widths only waste animation time.
const MAX_EXIT_MULTIPLIER: f64 = 10.0;
/// Upper bound for the downward exit travel, in surface units.
const MAX_EXIT_DROP: f64 = 1000.0;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding the config file and the default log file.
    ///
    /// `~/.config/swipedeck` on Unix/macOS, or the platform equivalent via
    /// `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("swipedeck")
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Log file used when none is configured.
    pub fn default_log_path() -> PathBuf {
        Self::config_dir().join("swipedeck.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `commit_ratio` lies in (0, 1]
    /// - exit animation targets stay within a few surface widths
    /// - spring parameters are positive
    /// - batch size and frame interval are non-zero, and the frame step cap
    ///   is no shorter than the frame interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gesture = &self.gesture;
        if !(gesture.commit_ratio > 0.0 && gesture.commit_ratio <= 1.0) {
            return Err(invalid(format!(
                "gesture.commit_ratio must be in (0, 1], got {}",
                gesture.commit_ratio
            )));
        }
        if gesture.card_inset < 0.0 {
            return Err(invalid("gesture.card_inset must not be negative"));
        }
        if !(gesture.exit_multiplier > 1.0 && gesture.exit_multiplier <= MAX_EXIT_MULTIPLIER) {
            return Err(invalid(format!(
                "gesture.exit_multiplier must be in (1, {}], got {}",
                MAX_EXIT_MULTIPLIER, gesture.exit_multiplier
            )));
        }
        if !(0.0..=MAX_EXIT_DROP).contains(&gesture.exit_drop) {
            return Err(invalid(format!(
                "gesture.exit_drop must be in [0, {}], got {}",
                MAX_EXIT_DROP, gesture.exit_drop
            )));
        }

        let spring = &gesture.spring;
        for (name, value) in [
            ("damping", spring.damping),
            ("stiffness", spring.stiffness),
            ("mass", spring.mass),
            ("rest_displacement", spring.rest_displacement),
            ("rest_speed", spring.rest_speed),
        ] {
            if !(value > 0.0) {
                return Err(invalid(format!(
                    "gesture.spring.{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.deck.batch_size == 0 {
            return Err(invalid("deck.batch_size must be at least 1"));
        }
        if self.ui.frame_ms == 0 {
            return Err(invalid("ui.frame_ms must be at least 1"));
        }
        // The step cap must cover at least one regular frame.
        if self.ui.max_frame_step_ms < self.ui.frame_ms {
            return Err(invalid(format!(
                "ui.max_frame_step_ms must be at least ui.frame_ms ({}), got {}",
                self.ui.frame_ms, self.ui.max_frame_step_ms
            )));
        }
        if !(self.ui.column_units > 0.0 && self.ui.row_units > 0.0) {
            return Err(invalid("ui.column_units and ui.row_units must be positive"));
        }
        if self.source.timeout_seconds == 0 {
            return Err(invalid("source.timeout_seconds must be at least 1"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
