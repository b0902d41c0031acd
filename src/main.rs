use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use swipedeck::config::{Config, ConfigStore};
use swipedeck::logging::init_tracing;
use swipedeck::profile::HttpProfileSource;
use swipedeck::shutdown::ShutdownHandle;
use tracing::info;

/// Swipe through a stack of profile cards in the terminal.
#[derive(Debug, Parser)]
#[command(name = "swipedeck", version, about)]
struct Cli {
    /// Config file (default: ~/.config/swipedeck/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Profiles to fetch per batch.
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Milliseconds between animation frames.
    #[arg(long, value_name = "MS")]
    frame_ms: Option<u64>,

    /// Log file (default: next to the config file).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, path) = match &cli.config {
        Some(path) => (Config::load_from(path), path.clone()),
        None => (Config::load(), Config::config_path()),
    };
    let config = config.with_context(|| format!("loading config from {}", path.display()))?;
    let store = ConfigStore::new(config, path);
    store.update(|config| apply_overrides(&cli, config));
    let config = store.get();
    config.validate().context("invalid command line override")?;

    let log_path = config
        .logging
        .file
        .clone()
        .unwrap_or_else(Config::default_log_path);
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    info!(config = %store.path().display(), "Starting swipedeck");

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("installing signal handlers")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let source = HttpProfileSource::new(config.source.clone()).context("building HTTP client")?;

    swipedeck::ui::run(store, Arc::new(source), runtime.handle(), shutdown)
        .context("terminal UI failed")?;

    runtime.shutdown_background();
    info!("Goodbye");
    Ok(())
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(count) = cli.count {
        config.deck.batch_size = count;
    }
    if let Some(frame_ms) = cli.frame_ms {
        config.ui.frame_ms = frame_ms;
        config.ui.max_frame_step_ms = config.ui.max_frame_step_ms.max(frame_ms);
    }
    if let Some(log_file) = &cli.log_file {
        config.logging.file = Some(log_file.clone());
    }
}
