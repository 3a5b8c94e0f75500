//! # Parking Environment
//!
//! [`ParkingEnv`] owns the episode state and the raster it is drawn on. A
//! step moves the agent, redraws the frame, reads the rays back from it and
//! turns the resulting geometry into a reward:
//!
//! 1.  any agent corner outside the arena: terminated, crash penalty;
//! 2.  agent bounding box over a parked car: terminated, crash penalty;
//! 3.  closer to the target than after the previous step: progress reward,
//!     otherwise the regression reward. Under [`RewardOrdering::Legacy`]
//!     this replaces the crash penalty of the same step;
//! 4.  within `min_distance` of the target: truncated, success reward.
//!
//! The environment is single threaded. Parallel rollouts need one
//! `ParkingEnv` each, since the raster is exclusive to its episode.

use crate::config::{EnvConfig, RewardOrdering};
use crate::env::{Env, Step};
use crate::error::EnvError;
use crate::layout::{generate_layout, Layout, RowConfiguration};
use crate::scene::render_frame;
use physics::{apply_action, distance, Action, DVec2, Footprint, KinematicParams, Pose, Rect};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use render::Canvas;

/// Where an episode stands after its latest step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodeStatus {
    Running,
    /// Crashed or left the arena.
    Terminated,
    /// Reached the target.
    Truncated,
}

impl EpisodeStatus {
    #[must_use]
    pub fn is_done(self) -> bool {
        !matches!(self, EpisodeStatus::Running)
    }
}

/// Mutable state of one episode, from a reset to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct Episode {
    pub pose: Pose,
    pub layout: Layout,
    /// Agent-to-target distance after the previous step; `+inf` before the
    /// first one.
    pub previous_distance: f64,
    pub steps: u64,
    pub status: EpisodeStatus,
}

impl Episode {
    #[must_use]
    pub fn new(pose: Pose, layout: Layout) -> Self {
        Self {
            pose,
            layout,
            previous_distance: f64::INFINITY,
            steps: 0,
            status: EpisodeStatus::Running,
        }
    }

    #[must_use]
    pub fn target(&self) -> DVec2 {
        self.layout.target
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Rect] {
        &self.layout.obstacles
    }

    #[must_use]
    pub fn rows(&self) -> &RowConfiguration {
        &self.layout.rows
    }

    #[must_use]
    pub fn distance_to_target(&self) -> f64 {
        distance(self.pose.position(), self.layout.target)
    }
}

/// Ray readings followed by the agent pose and the target.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub rays: Vec<f64>,
    pub agent: Pose,
    pub target: DVec2,
}

impl Observation {
    /// `[ray_0, .., ray_n-1, agent_x, agent_y, target_x, target_y, heading]`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.size());
        out.extend_from_slice(&self.rays);
        out.extend_from_slice(&[self.agent.x, self.agent.y, self.target.x, self.target.y, self.agent.heading]);
        out
    }

    /// Number of values in [`Observation::to_vec`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.rays.len() + 5
    }
}

impl From<Observation> for Vec<f64> {
    fn from(obs: Observation) -> Self {
        obs.to_vec()
    }
}

/// The parking maneuver environment.
///
/// Randomness comes from `R`; the default [`ChaCha8Rng`] makes seeded runs
/// reproducible.
pub struct ParkingEnv<R = ChaCha8Rng> {
    config: EnvConfig,
    kinematics: KinematicParams,
    rng: R,
    canvas: Canvas,
    episode: Option<Episode>,
}

impl ParkingEnv<ChaCha8Rng> {
    /// Environment seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if `config` does not validate.
    pub fn seeded(config: EnvConfig, seed: u64) -> Result<Self, EnvError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParkingEnv<R> {
    /// Environment drawing its layouts from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if `config` does not validate.
    pub fn with_rng(config: EnvConfig, rng: R) -> Result<Self, EnvError> {
        config.validate()?;
        Ok(Self {
            kinematics: config.kinematics(),
            canvas: Canvas::new(config.width, config.height),
            config,
            rng,
            episode: None,
        })
    }

    /// Start an episode on a given layout from a given pose instead of a
    /// random layout and the configured start.
    pub fn reset_with_layout(&mut self, layout: Layout, start: Pose) -> Observation {
        let episode = Episode::new(start, layout);
        let rays = render_frame(&mut self.canvas, &episode.pose, &episode.layout, &self.config);
        let observation = Observation { rays, agent: episode.pose, target: episode.target() };
        self.episode = Some(episode);
        observation
    }

    /// Step with a raw action index.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] for an index outside the action
    /// set, otherwise whatever [`Env::step`] returns.
    pub fn step_index(&mut self, index: usize) -> Result<Step<Observation>, EnvError> {
        let action = Action::try_from(index).map_err(EnvError::InvalidAction)?;
        self.step(action)
    }

    /// Uniformly random action drawn from the environment's RNG.
    pub fn sample_action(&mut self) -> Action {
        Action::sample(&mut self.rng)
    }

    #[must_use]
    pub fn episode(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }

    /// The frame drawn by the latest reset or step.
    #[must_use]
    pub fn raster(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }
}

impl<R: Rng> Env for ParkingEnv<R> {
    type Action = Action;
    type Observation = Observation;

    fn reset(&mut self) -> Observation {
        let layout = generate_layout(&mut self.rng, &self.config);
        let start = self.config.start_pose();
        self.reset_with_layout(layout, start)
    }

    fn step(&mut self, action: Action) -> Result<Step<Observation>, EnvError> {
        let episode = self.episode.as_mut().ok_or(EnvError::UninitializedEpisode)?;
        if let Some(pace) = self.config.pacing() {
            std::thread::sleep(pace);
        }
        if episode.status.is_done() {
            tracing::debug!("Stepping finished episode ({:?}) at step {}", episode.status, episode.steps);
        }

        episode.pose = apply_action(episode.pose, action, &self.kinematics);
        let rays = render_frame(&mut self.canvas, &episode.pose, &episode.layout, &self.config);
        let observation = Observation { rays, agent: episode.pose, target: episode.target() };

        let config = &self.config;
        let rewards = &config.rewards;
        let footprint = Footprint::at(&episode.pose, config.car_height, config.car_width)?;

        let mut reward = 0.0;
        let mut terminated = false;
        let mut truncated = false;

        let outside = footprint.is_outside(f64::from(config.width), f64::from(config.height));
        if outside {
            terminated = true;
            reward = rewards.crash;
        }
        let collided = footprint.hits_any(episode.obstacles());
        if collided {
            terminated = true;
            reward = rewards.crash;
        }

        let current = episode.distance_to_target();
        let distance_reward = if current < episode.previous_distance {
            rewards.progress
        } else {
            rewards.regression
        };
        match rewards.ordering {
            RewardOrdering::Legacy => reward = distance_reward,
            RewardOrdering::PenaltyPreserving if !terminated => reward = distance_reward,
            RewardOrdering::PenaltyPreserving => {}
        }

        if current < config.min_distance {
            truncated = true;
            reward = rewards.success;
        }

        episode.previous_distance = current;
        episode.steps += 1;
        if !episode.status.is_done() {
            if terminated {
                episode.status = EpisodeStatus::Terminated;
            } else if truncated {
                episode.status = EpisodeStatus::Truncated;
            }
        }

        tracing::debug!(
            "step {} {} -> ({:.1}, {:.1}) dist {:.1} reward {} outside={} collided={} truncated={}",
            episode.steps,
            action,
            episode.pose.x,
            episode.pose.y,
            current,
            reward,
            outside,
            collided,
            truncated
        );

        Ok(Step { observation, reward, terminated, truncated })
    }

    fn observation_size(&self) -> usize {
        self.config.observation_size()
    }

    fn action_count(&self) -> usize {
        Action::count()
    }
}
