pub mod config;
pub mod deck;
pub mod logging;
pub mod profile;
pub mod shutdown;
pub mod ui;
