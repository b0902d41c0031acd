//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::path::PathBuf;

use swipedeck::config::SourceConfig;
use swipedeck::profile::Profile;
use tempfile::TempDir;

/// Profiles with predictable names: "Person 0", "Person 1", ...
pub fn sample_profiles(count: usize) -> Vec<Profile> {
    (0..count)
        .map(|i| {
            Profile::new(
                format!("Person {i}"),
                format!("https://images.test/{i}.jpg"),
                "Yogyakarta",
                "Photography",
                "Photo by Test Lens on Unsplash",
            )
        })
        .collect()
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Source config pointing both endpoints at a mock server.
pub fn source_config(base_url: &str) -> SourceConfig {
    SourceConfig {
        identity_url: format!("{base_url}/api/?gender=female"),
        photo_url: format!("{base_url}/photos/random"),
        photo_query: "woman-portrait".to_string(),
        photo_key: Some("test-key".to_string()),
        timeout_seconds: 5,
    }
}
