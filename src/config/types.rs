use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::deck::GestureConfig;

/// Environment variable consulted when no photo API key is configured.
pub const PHOTO_KEY_ENV_VAR: &str = "SWIPEDECK_UNSPLASH_KEY";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Card queue settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Profiles requested per batch (default: 10).
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

/// Profile source endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Random identity endpoint, queried once per profile.
    #[serde(default = "default_identity_url")]
    pub identity_url: String,
    /// Random photo endpoint, queried once per profile.
    #[serde(default = "default_photo_url")]
    pub photo_url: String,
    /// Search term sent to the photo endpoint.
    #[serde(default = "default_photo_query")]
    pub photo_query: String,
    /// Photo API access key. Falls back to `SWIPEDECK_UNSPLASH_KEY`.
    #[serde(default)]
    pub photo_key: Option<String>,
    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between animation frames in milliseconds (default: 16).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Surface units per terminal column.
    #[serde(default = "default_column_units")]
    pub column_units: f64,
    /// Surface units per terminal row; cells are roughly twice as tall as wide.
    #[serde(default = "default_row_units")]
    pub row_units: f64,
    /// Largest animation step in milliseconds, so a stalled frame can't
    /// teleport a card.
    #[serde(default = "default_max_frame_step_ms")]
    pub max_frame_step_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; the terminal belongs to the UI.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_batch_size() -> usize {
    10
}

fn default_identity_url() -> String {
    "https://randomuser.me/api/?gender=female".to_string()
}

fn default_photo_url() -> String {
    "https://api.unsplash.com/photos/random".to_string()
}

fn default_photo_query() -> String {
    "woman-portrait".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_frame_ms() -> u64 {
    16
}

fn default_column_units() -> f64 {
    4.0
}

fn default_row_units() -> f64 {
    8.0
}

fn default_max_frame_step_ms() -> u64 {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            identity_url: default_identity_url(),
            photo_url: default_photo_url(),
            photo_query: default_photo_query(),
            photo_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl SourceConfig {
    /// Configured key, else the environment variable. Empty values count as unset.
    pub fn photo_api_key(&self) -> Option<String> {
        self.photo_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(PHOTO_KEY_ENV_VAR)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            column_units: default_column_units(),
            row_units: default_row_units(),
            max_frame_step_ms: default_max_frame_step_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
