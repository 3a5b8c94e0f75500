#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Parking Environment
//!
//! A 2D parking maneuver task behind a Gym-style [`Env`] interface. A
//! rectangular car starts in the middle of an 800x600 lot and must reach a
//! randomly chosen free slot in one of two rows of parked cars, using six
//! discrete driving actions and a ring of ray-cast distance sensors.
//!
//! ## Modules
//!
//! -   [`config`]: every constant of the arena, loadable from JSON.
//! -   [`layout`]: the random row arrangement and target slot.
//! -   [`perception`]: ray marching over the rendered raster.
//! -   [`scene`]: drawing a frame onto a [`render::Raster`].
//! -   [`parking`]: the episode state machine, [`ParkingEnv`].
//!
//! ```rust
//! use rl::{Env, EnvConfig, ParkingEnv};
//! use physics::Action;
//!
//! let mut env = ParkingEnv::seeded(EnvConfig::default(), 42)?;
//! let obs = env.reset();
//! assert_eq!(obs.to_vec().len(), env.observation_size());
//! let step = env.step(Action::FrontOnly)?;
//! assert!(step.reward.is_finite());
//! # Ok::<(), rl::EnvError>(())
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod layout;
pub mod parking;
pub mod perception;
pub mod scene;

pub use config::{EnvConfig, RewardConfig, RewardOrdering, StartPose, MAX_ARENA_SIDE};
pub use env::{Env, Step};
pub use error::EnvError;
pub use layout::{generate_layout, Layout, Row, RowConfiguration, Slot, SLOTS_PER_ROW};
pub use parking::{Episode, EpisodeStatus, Observation, ParkingEnv};
pub use perception::{cast_rays, mark_rays};
pub use physics::Action;
