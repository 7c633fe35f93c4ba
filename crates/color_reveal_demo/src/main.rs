// SPDX-License-Identifier: MIT OR Apache-2.0
//! Color Reveal demo - a headless reveal driver
//!
//! Plays a scripted series of background color changes through the layer
//! sequencer and prints one JSON paint list per frame on stdout:
//! - Color requests fire at their scripted times
//! - The driver animates each layer with the configured easing
//! - Layers commit into the background in request order
//!
//! Usage: `color_reveal_demo [CONFIG.ron]`, or `color_reveal_demo
//! --dump-config` to print the built-in config as a starting point. Logs go
//! to stderr and honor `RUST_LOG`.

mod config;
mod driver;

use color_reveal_sequencer::{LayerSequencer, RevealFrame, Rgba, SequencerError};
use config::{ConfigError, DemoConfig};
use driver::RevealDriver;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Extra frames allowed past the last expected commit
const FRAME_SLACK: usize = 4;

/// One line of output
#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: usize,
    time: f32,
    paint: &'a RevealFrame<Rgba>,
}

/// Error while running the demo
#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Sequencer rejected an operation: {0}")]
    Sequencer(#[from] SequencerError),

    #[error("Failed to write frame: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("color_reveal_demo=info,color_reveal_sequencer=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Color Reveal demo v{}", env!("CARGO_PKG_VERSION"));

    let result = match std::env::args_os().nth(1) {
        Some(arg) if arg == "--dump-config" => dump_config(),
        arg => run(arg.map(PathBuf::from)),
    };
    if let Err(e) = result {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

fn dump_config() -> Result<(), DemoError> {
    let ron_str = DemoConfig::default().to_ron()?;
    let mut out = std::io::stdout().lock();
    out.write_all(ron_str.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn run(config_path: Option<PathBuf>) -> Result<(), DemoError> {
    let config = match config_path {
        Some(path) => DemoConfig::load(&path)?,
        None => {
            tracing::info!("No config given, using built-in script");
            DemoConfig::default()
        }
    };

    let script = config.color_script()?;
    let mut sequencer = LayerSequencer::with_config(config.base_color()?, config.sequencer.clone());
    let mut driver = RevealDriver::new(config.easing);

    let frame_duration = config.frame_duration();
    let last_request = script.last().map_or(0.0, |(at, _)| *at);
    let max_frames = ((last_request + config.sequencer.settle_after() * (script.len() as f32 + 1.0))
        * config.frame_rate)
        .ceil() as usize
        + FRAME_SLACK;

    tracing::info!(
        kind = config.kind.name(),
        requests = script.len(),
        "Playing {}x{} reveal at {} fps",
        config.rect.width,
        config.rect.height,
        config.frame_rate
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut requests = script.into_iter().peekable();

    for frame in 0..max_frames {
        while let Some((_, color)) = requests.next_if(|(at, _)| *at <= driver.time()) {
            match sequencer.on_new_color(color) {
                Ok(_) => tracing::info!("Requested {color} at {:.3}s", driver.time()),
                Err(SequencerError::QueueFull { capacity }) => {
                    tracing::warn!("Dropped {color}: {capacity} layers already queued");
                }
                Err(e) => return Err(e.into()),
            }
        }

        for color in driver.update(frame_duration, &mut sequencer)? {
            tracing::info!("Committed {color} at {:.3}s", driver.time());
        }

        let paint = sequencer.frame(config.rect, config.kind);
        let record = FrameRecord {
            frame,
            time: driver.time(),
            paint: &paint,
        };
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;

        if requests.peek().is_none() && driver.is_idle() && sequencer.is_empty() {
            tracing::info!(frames = frame + 1, "Script finished, background is {}", sequencer.base_color());
            return Ok(());
        }
    }

    tracing::warn!(pending = sequencer.len(), "Stopped after {max_frames} frames with layers still queued");
    Ok(())
}
