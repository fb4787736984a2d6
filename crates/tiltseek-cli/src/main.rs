//! tiltseek - Tilt-Scrub Demo Driver
//!
//! Synthesizes a device-roll trajectory, runs it through the scrub
//! pipeline, and prints the seek timeline a video player would follow.
//! Useful for tuning the smoothing factor, hysteresis band, and step size
//! without a physical device.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;

use tiltseek_reader::prelude::*;

#[derive(Parser)]
#[command(name = "tiltseek")]
#[command(about = "Tilt-scrub demo - synthesize a roll trajectory and print the seek timeline")]
#[command(version)]
struct Cli {
    /// Shape of the synthesized roll trajectory
    #[arg(long, value_enum, default_value = "sweep")]
    trajectory: Trajectory,

    /// Number of synthesized sensor samples
    #[arg(long, default_value_t = 400)]
    samples: usize,

    /// Half-width of the accepted roll window, in degrees
    #[arg(long, default_value_t = 36.0)]
    range_degrees: f32,

    /// Exponential smoothing coefficient in (0, 1]
    #[arg(long, default_value_t = 0.1)]
    smoothing: f32,

    /// Hysteresis band half-width for direction detection
    #[arg(long, default_value_t = 0.1)]
    threshold: f32,

    /// Slider increment per detected direction change
    #[arg(long, default_value_t = 0.1)]
    step: f32,

    /// Simulated media duration in seconds
    #[arg(long, default_value_t = 60.0)]
    duration_secs: f32,

    /// JSON pipeline configuration; overrides the tuning flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Trajectory {
    /// Rock the device back and forth across the full window
    Sine,
    /// Tilt steadily from full left to full right
    Sweep,
    /// Hold the device at full right tilt
    Hold,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let config = load_config(&cli)?;
    if !(cli.duration_secs > 0.0) {
        bail!("media duration must be positive");
    }
    let duration = Some(
        Duration::try_from_secs_f32(cli.duration_secs)
            .context("media duration is not representable")?,
    );

    let source = synthesize(&cli, &config)?;
    let mut reader = config
        .build(source)
        .context("pipeline configuration is invalid")?;

    info!(
        trajectory = ?cli.trajectory,
        samples = cli.samples,
        "running scrub pipeline"
    );

    let interval_ms = config.sample_interval_ms;
    let mut tick = 0u64;
    let mut events = 0u32;
    let mut skipped = 0u32;

    reader.start();
    loop {
        match reader.tick() {
            Ok(Some(outcome)) => {
                if let Some(event) = outcome.event {
                    events += 1;
                    let at = Duration::from_millis(tick * interval_ms);
                    let seek = SeekTarget::from_progress(event.slider, duration)
                        .map_or_else(|| "-".to_string(), |t| format!("{:.1}s", t.as_secs_f32()));
                    println!(
                        "t={:>6.2}s  step={:+.2}  slider={:.2}  seek={}",
                        at.as_secs_f32(),
                        event.step,
                        event.slider,
                        seek
                    );
                }
            }
            Ok(None) => break,
            Err(SignalError::InvalidSample { value }) => {
                tracing::warn!(value, "skipping non-finite sensor reading");
                skipped += 1;
            }
            Err(err) => return Err(err).context("scrub pipeline failed"),
        }
        tick += 1;
    }

    let final_seek = SeekTarget::from_progress(reader.slider(), duration)
        .map_or(0.0, |t| t.as_secs_f32());
    println!(
        "{events} scrub events, {skipped} skipped samples, final position {:.1}s of {:.1}s",
        final_seek, cli.duration_secs
    );

    Ok(())
}

fn load_config(cli: &Cli) -> Result<ReaderConfig> {
    if let Some(path) = &cli.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: ReaderConfig =
            serde_json::from_str(&text).context("parsing pipeline configuration")?;
        return Ok(config);
    }

    let half_width = cli.range_degrees.to_radians();
    Ok(ReaderConfig {
        lower_radians: -half_width,
        upper_radians: half_width,
        smoothing_factor: cli.smoothing,
        direction_threshold: cli.threshold,
        step_size: cli.step,
        ..ReaderConfig::default()
    })
}

fn synthesize(cli: &Cli, config: &ReaderConfig) -> Result<ScriptedMotionSource> {
    if cli.samples == 0 {
        bail!("at least one sample is required");
    }
    let source = match cli.trajectory {
        Trajectory::Sine => {
            ScriptedMotionSource::sine(config.upper_radians, cli.samples / 4, cli.samples)
        }
        Trajectory::Sweep => {
            ScriptedMotionSource::sweep(config.lower_radians, config.upper_radians, cli.samples)
        }
        Trajectory::Hold => ScriptedMotionSource::new(vec![config.upper_radians; cli.samples]),
    };
    Ok(source.with_interval(config.sample_interval()))
}
