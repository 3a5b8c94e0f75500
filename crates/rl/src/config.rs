//! # Environment Configuration
//!
//! Every constant of the arena lives in [`EnvConfig`]. The defaults describe
//! the standard 800x600 lot with two rows of five 160-pixel slots; a JSON
//! file may override any subset of fields.
//!
//! ```json
//! { "num_rays": 16, "rewards": { "ordering": "penalty_preserving" } }
//! ```

use crate::error::EnvError;
use anyhow::{Context, Result};
use physics::{KinematicParams, Pose};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest accepted arena side, in pixels.
pub const MAX_ARENA_SIDE: u32 = 8192;

/// How the distance reward interacts with a crash on the same step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardOrdering {
    /// The progress/regression reward is assigned after the crash checks and
    /// replaces the crash penalty. Matches the historical reward signal.
    #[default]
    Legacy,
    /// A crash keeps its penalty; only a success overrides it.
    PenaltyPreserving,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewardConfig {
    /// Distance to the target shrank.
    pub progress: f64,
    /// Distance to the target did not shrink.
    pub regression: f64,
    /// Left the arena or hit a parked car.
    pub crash: f64,
    /// Came within `min_distance` of the target.
    pub success: f64,
    pub ordering: RewardOrdering,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            progress: 1.0,
            regression: -5.0,
            crash: -100.0,
            success: 1000.0,
            ordering: RewardOrdering::Legacy,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StartPose {
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub heading: f64,
}

impl Default for StartPose {
    fn default() -> Self {
        Self { x: 400.0, y: 300.0, heading: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Arena width in pixels.
    pub width: u32,
    /// Arena height in pixels.
    pub height: u32,
    pub num_rays: usize,
    /// Ray length in unit steps; also the "nothing seen" reading.
    pub max_ray_distance: u32,
    /// Success threshold on the agent-to-target distance.
    pub min_distance: f64,

    /// Slot pitch along x.
    pub lane_width: f64,
    /// Slot depth along y.
    pub lane_height: f64,
    pub lane_line_width: u32,

    /// Car extent across its heading.
    pub car_width: f64,
    /// Car extent along its heading.
    pub car_height: f64,
    /// Gap between a slot's left lane line and the parked car.
    pub car_inset_x: f64,
    /// Gap between the arena edge and the parked car.
    pub car_inset_y: f64,

    pub linear_step: f64,
    /// Degrees per turning action.
    pub angle_step: f64,
    pub start: StartPose,

    pub rewards: RewardConfig,

    /// Real-time delay per step, for watching recorded runs. `None` runs
    /// flat out.
    pub pacing_secs: Option<f64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            num_rays: 8,
            max_ray_distance: 200,
            min_distance: 50.0,
            lane_width: 160.0,
            lane_height: 160.0,
            lane_line_width: 5,
            car_width: 100.0,
            car_height: 170.0,
            car_inset_x: 30.0,
            car_inset_y: 5.0,
            linear_step: 5.0,
            angle_step: 5.0,
            start: StartPose::default(),
            rewards: RewardConfig::default(),
            pacing_secs: None,
        }
    }
}

impl EnvConfig {
    /// Parse a (possibly partial) JSON configuration.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, unknown fields or values rejected by
    /// [`EnvConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("failed to parse environment config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or [`EnvConfig::from_json`] fails.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in config {}", path.display()))
    }

    /// Reject configurations the environment cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> Result<(), EnvError> {
        let invalid = |msg: &str| Err(EnvError::InvalidConfig(msg.to_owned()));
        if self.width == 0 || self.height == 0 {
            return invalid("arena dimensions must be non-zero");
        }
        if self.width > MAX_ARENA_SIDE || self.height > MAX_ARENA_SIDE {
            return invalid(&format!("arena sides must not exceed {MAX_ARENA_SIDE} pixels"));
        }
        if self.num_rays == 0 {
            return invalid("num_rays must be at least 1");
        }
        if !(positive(self.lane_width) && positive(self.lane_height)) {
            return invalid("lane dimensions must be positive");
        }
        if !(positive(self.car_width) && positive(self.car_height)) {
            return invalid("car dimensions must be positive");
        }
        if !self.linear_step.is_finite() || !self.angle_step.is_finite() {
            return invalid("kinematic steps must be finite");
        }
        let StartPose { x, y, heading } = self.start;
        if !(x.is_finite() && y.is_finite() && heading.is_finite()) {
            return invalid("start pose must be finite");
        }
        if x < 0.0 || x >= f64::from(self.width) || y < 0.0 || y >= f64::from(self.height) {
            return invalid("start position must lie inside the arena");
        }
        if self.min_distance.is_nan() || self.min_distance < 0.0 {
            return invalid("min_distance must be non-negative");
        }
        if let Some(secs) = self.pacing_secs {
            if !secs.is_finite() || secs < 0.0 {
                return invalid("pacing_secs must be a non-negative number of seconds");
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn kinematics(&self) -> KinematicParams {
        KinematicParams {
            linear_step: self.linear_step,
            angle_step: self.angle_step.to_radians(),
        }
    }

    #[must_use]
    pub fn start_pose(&self) -> Pose {
        Pose::new(self.start.x, self.start.y, self.start.heading.to_radians())
    }

    #[must_use]
    pub fn pacing(&self) -> Option<Duration> {
        self.pacing_secs.map(Duration::from_secs_f64)
    }

    /// Length of the flattened observation vector.
    #[must_use]
    pub fn observation_size(&self) -> usize {
        self.num_rays + 5
    }
}

fn positive(v: f64) -> bool {
    v > 0.0
}
