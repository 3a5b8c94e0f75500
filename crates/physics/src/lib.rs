#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Parking Arena Physics
//!
//! The planar geometry layer of the parking arena. There is no dynamics
//! here: the agent moves by a fixed kinematic offset per discrete action and
//! every function in this crate is pure.
//!
//! ## Key Components
//!
//! -   **Types:** [`Pose`] and [`Rect`] in the [`types`] module, with points
//!     represented as [`glam::DVec2`].
//! -   **Geometry:** distance, oriented-rectangle corners, bounding boxes and
//!     the arena bounds test in [`geometry`].
//! -   **Kinematics:** the six discrete [`Action`]s and [`apply_action`] in
//!     [`kinematics`].
//! -   **Collision:** the agent [`Footprint`] and the obstacle overlap test in
//!     [`collision`].
//!
//! ```rust
//! use physics::{apply_action, Action, KinematicParams, Pose};
//!
//! let params = KinematicParams::default();
//! let pose = apply_action(Pose::new(400.0, 300.0, 0.0), Action::FrontOnly, &params);
//! assert_eq!(pose.x, 405.0);
//! ```

pub mod collision;
pub mod error;
pub mod geometry;
pub mod kinematics;
pub mod types;

pub use collision::{first_overlap, overlaps_any, Footprint};
pub use error::GeometryError;
pub use geometry::{any_point_outside_bounds, bounding_box, distance, rotated_rectangle_corners};
pub use kinematics::{apply_action, normalize_heading, Action, KinematicParams};
pub use types::{Pose, Rect};

pub use glam::DVec2;
