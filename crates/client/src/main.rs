//! Platformer client binary.
//!
//! Composition root: reads [`ClientConfig`](config::ClientConfig) from the
//! environment, loads content, builds a [`Session`] and drives it with a
//! scripted input timeline, either as fast as possible or paced in real time.
//!
//! # Examples
//!
//! ```bash
//! # Play the demo script headless
//! cargo run -p platformer-client
//!
//! # Real-time pacing with transition logs
//! PLATFORMER_REALTIME=true RUST_LOG=debug cargo run -p platformer-client
//! ```
mod config;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use platformer_content::ContentFactory;
use platformer_core::{GameError, Vec2};
use runtime::{ScriptedInput, Session, TracingSink};

use crate::config::{ClientConfig, DEFAULT_IDLE_TICKS};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting platformer client");
    tracing::info!("Data dir: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let mut tuning = factory.load_config()?;
    if let Some(viewport) = config.viewport {
        tuning.camera.viewport = Vec2::new(viewport.width, viewport.height);
    }
    let level = factory
        .load_level(&config.level)
        .with_context(|| format!("level {:?}", config.level))?;
    let segments = match &config.script {
        Some(name) => factory
            .load_script(name)
            .with_context(|| format!("script {name:?}"))?,
        None => Vec::new(),
    };

    let mut input = ScriptedInput::new(segments);
    let ticks = config.ticks.unwrap_or_else(|| match input.duration() {
        0 => DEFAULT_IDLE_TICKS,
        duration => duration,
    });

    let mut session =
        Session::new(Arc::new(level.map), tuning, level.spawn).inspect_err(|err| {
            tracing::error!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                fatal = err.severity().is_fatal(),
                "session setup rejected: {err}"
            );
        })?;
    let mut sink = TracingSink;

    tracing::info!(ticks, realtime = config.realtime, level = %config.level, "running session");
    let summary = if config.realtime {
        session.run_realtime(&mut input, &mut sink, ticks).await
    } else {
        session.run_headless(&mut input, &mut sink, ticks)
    };

    tracing::info!(
        ticks = summary.ticks,
        jumps = summary.jumps,
        transitions = summary.transitions,
        "session finished"
    );
    println!(
        "{} ticks, {} jumps, {} transitions; player at ({:.2}, {:.2}), {}",
        summary.ticks,
        summary.jumps,
        summary.transitions,
        summary.position.x,
        summary.position.y,
        summary.animation,
    );
    Ok(())
}
