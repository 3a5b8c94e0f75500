#![deny(clippy::all, clippy::pedantic)]
//! # Parking: a 2D Parking Maneuver Environment
//!
//! A small reinforcement learning environment in which a rectangular car has
//! to steer from the middle of a lot into a free slot between parked cars.
//! The agent senses the lot through a ring of ray-cast distance sensors read
//! back from the rendered frame.
//!
//! ## The Crates
//!
//! -   **`parking`:** The crate you are currently viewing. It hosts the
//!     headless driver binary and the [`rollout`] loop it runs.
//! -   **[`physics`]:** Planar geometry, the discrete kinematic model and the
//!     collision helpers.
//! -   **[`render`]:** The [`render::Raster`] drawing contract, an in-memory
//!     [`render::Canvas`] implementing it and PNG frame export.
//! -   **[`rl`]:** Configuration, layout generation, perception and the
//!     [`rl::ParkingEnv`] episode state machine behind the [`rl::Env`] trait.

pub mod rollout;

pub use physics;
pub use render;
pub use rl;
