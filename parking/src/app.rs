//! # Driver Application Logic
//!
//! Parses nothing itself: [`Args`] is filled in by `clap` in `main`, and
//! [`run`] wires the configuration, the environment, an optional frame
//! recorder and the rollout loop together.

use anyhow::{Context, Result};
use clap::Parser;
use parking::rollout::{run_episode, RolloutOptions};
use render::FrameRecorder;
use rl::{EnvConfig, ParkingEnv};
use std::path::PathBuf;

/// Steps per second when `--pace` is given.
const PACED_STEPS_PER_SEC: f64 = 120.0;

#[derive(Parser, Debug)]
#[command(name = "parking", about = "Roll out random-policy parking episodes")]
pub struct Args {
    /// Number of episodes to run.
    #[arg(long, default_value_t = 5)]
    pub episodes: u32,

    /// Step cap per episode; episodes that neither crash nor park are cut off.
    #[arg(long, default_value_t = 1000)]
    pub max_steps: u64,

    /// Seed for layouts and the random policy.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// JSON file overriding any subset of the environment constants.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to write every rendered frame into.
    #[arg(long)]
    pub frames: Option<PathBuf>,

    /// Sleep between steps so a recorded run plays back in real time.
    #[arg(long)]
    pub pace: bool,

    /// Print one JSON summary per episode on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Run the configured number of episodes.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid,
/// or if a frame cannot be written.
pub fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut config = match &args.config {
        Some(path) => EnvConfig::from_path(path)?,
        None => EnvConfig::default(),
    };
    if args.pace {
        config.pacing_secs = Some(1.0 / PACED_STEPS_PER_SEC);
    }

    let mut env = ParkingEnv::seeded(config, args.seed).context("failed to create environment")?;
    let mut recorder = args.frames.map(FrameRecorder::new).transpose()?;
    let options = RolloutOptions { max_steps: args.max_steps };

    tracing::info!("Running {} episodes with seed {}", args.episodes, args.seed);
    let mut parked = 0;
    for episode in 0..args.episodes {
        let summary = run_episode(&mut env, &options, recorder.as_mut())
            .with_context(|| format!("episode {episode} failed"))?;
        tracing::info!(
            "Episode {} {:?} after {} steps, return {}",
            episode,
            summary.outcome,
            summary.steps,
            summary.total_reward
        );
        if summary.is_success() {
            parked += 1;
        }
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        }
    }

    tracing::info!("Parked in {} of {} episodes", parked, args.episodes);
    if let Some(recorder) = recorder {
        tracing::info!("Wrote {} frames", recorder.frames_written());
    }
    Ok(())
}
