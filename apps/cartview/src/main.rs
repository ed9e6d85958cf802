//! # cartview
//!
//! Renders a user/cart state snapshot to stdout.
//!
//! ## Usage
//! ```bash
//! # Render the built-in sample state
//! cartview
//!
//! # Render a snapshot document as HTML and log probe counts
//! cartview --snapshot ./state.json --format html --count-renders
//!
//! # Write the sample state as a snapshot document
//! cartview --dump-snapshot > state.json
//! ```
//!
//! Logs go to stderr, so stdout only carries the rendered page.

mod cli;
mod config;

use std::io::Write;

use anyhow::Context;
use cartview_core::sample::sample_state;
use cartview_core::snapshot::{parse_state, to_json};
use cartview_core::{CountingObserver, Observer, State, TracingObserver};
use cartview_render::render_page;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli).context("Failed to load configuration")?;

    init_tracing(&config.log_filter);
    info!(
        snapshot = ?config.snapshot_path,
        format = ?config.format,
        count_renders = config.count_renders,
        "Configuration loaded"
    );

    let state = load_state(&config)?;

    let mut stdout = std::io::stdout().lock();

    if cli.dump_snapshot {
        let json = to_json(&state).context("Failed to serialize state")?;
        writeln!(stdout, "{}", json)?;
        return Ok(());
    }

    let counter = CountingObserver::new();
    let observer: &dyn Observer = if config.count_renders {
        &counter
    } else {
        &TracingObserver
    };

    let page = render_page(&state, config.format.into(), observer).context("Failed to render state")?;
    stdout.write_all(page.as_bytes())?;
    stdout.flush()?;

    if config.count_renders {
        for (probe, count) in counter.snapshot() {
            info!(probe = %probe, count, "Probe count");
        }
        info!(total = counter.total(), "Render complete");
    }

    Ok(())
}

/// Builds the state from the configured snapshot, or the sample state.
fn load_state(config: &AppConfig) -> anyhow::Result<State> {
    let Some(path) = &config.snapshot_path else {
        info!("No snapshot configured, using sample state");
        return Ok(sample_state());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let state = parse_state(&contents)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;

    info!(path = %path.display(), "Snapshot loaded");
    Ok(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise the configured filter (default `info,cartview=debug`)
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
