//! # Collision Detection
//!
//! The agent is an oriented rectangle; obstacles are axis-aligned. The
//! narrow test reduces the agent to the axis-aligned box around its rotated
//! corners and checks it against each obstacle with [`Rect::intersects`].

mod broad_phase;

pub use broad_phase::*;

use crate::error::GeometryError;
use crate::geometry::{any_point_outside_bounds, bounding_box, rotated_rectangle_corners};
use crate::types::{Pose, Rect};
use glam::DVec2;

/// Oriented footprint of the agent at a given pose.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Footprint {
    /// Rotated corners, top-left, top-right, bottom-right, bottom-left before rotation.
    pub corners: [DVec2; 4],
    /// Axis-aligned box enclosing `corners`.
    pub bounds: Rect,
}

impl Footprint {
    /// Footprint of a car `length` long (along the heading) and `width` wide.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError::EmptyPointSet`], which cannot happen for
    /// four corners.
    pub fn at(pose: &Pose, length: f64, width: f64) -> Result<Self, GeometryError> {
        let corners = rotated_rectangle_corners(pose.position(), length, width, pose.heading);
        let bounds = bounding_box(&corners)?;
        Ok(Self { corners, bounds })
    }

    #[must_use]
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        any_point_outside_bounds(&self.corners, width, height)
    }

    #[must_use]
    pub fn hits_any(&self, obstacles: &[Rect]) -> bool {
        overlaps_any(&self.bounds, obstacles)
    }
}
