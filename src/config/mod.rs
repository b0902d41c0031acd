mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{
    Config, DeckConfig, LoggingConfig, SourceConfig, UiConfig, PHOTO_KEY_ENV_VAR,
};
