//! Random-policy rollouts, used by the driver binary to exercise the
//! environment end to end.

use anyhow::Result;
use render::FrameRecorder;
use rl::{Env, EpisodeStatus, ParkingEnv};
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct RolloutOptions {
    /// Steps after which an unfinished episode is abandoned.
    pub max_steps: u64,
}

impl Default for RolloutOptions {
    fn default() -> Self {
        Self { max_steps: 1000 }
    }
}

/// How an episode ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Reached the target.
    Parked,
    /// Hit a parked car or left the arena.
    Crashed,
    /// Hit the step cap.
    TimedOut,
}

impl From<EpisodeStatus> for Outcome {
    fn from(status: EpisodeStatus) -> Self {
        match status {
            EpisodeStatus::Truncated => Outcome::Parked,
            EpisodeStatus::Terminated => Outcome::Crashed,
            EpisodeStatus::Running => Outcome::TimedOut,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub outcome: Outcome,
    pub steps: u64,
    pub total_reward: f64,
    pub final_distance: f64,
    /// Row occupancy, as in `upper=[X.X..] lower=[..XXX]`.
    pub layout: String,
}

impl EpisodeSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Parked
    }
}

/// Reset `env` and drive it with uniformly random actions until the episode
/// ends or `options.max_steps` is reached. Every frame, including the one
/// drawn by the reset, goes to `recorder` when one is given.
///
/// # Errors
///
/// Returns environment errors and frame write failures.
pub fn run_episode(
    env: &mut ParkingEnv,
    options: &RolloutOptions,
    mut recorder: Option<&mut FrameRecorder>,
) -> Result<EpisodeSummary> {
    env.reset();
    if let Some(recorder) = recorder.as_deref_mut() {
        recorder.record(env.raster())?;
    }

    let mut total_reward = 0.0;
    for _ in 0..options.max_steps {
        let action = env.sample_action();
        let step = env.step(action)?;
        total_reward += step.reward;
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(env.raster())?;
        }
        if step.is_done() {
            break;
        }
    }

    let episode = env.episode().ok_or(rl::EnvError::UninitializedEpisode)?;
    Ok(EpisodeSummary {
        outcome: episode.status.into(),
        steps: episode.steps,
        total_reward,
        final_distance: episode.distance_to_target(),
        layout: episode.rows().to_string(),
    })
}
