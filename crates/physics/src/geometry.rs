//! # Planar Geometry
//!
//! Small pure helpers shared by the collision checks, the scene drawing and
//! the reward computation.

use crate::error::GeometryError;
use crate::types::Rect;
use glam::DVec2;

/// Euclidean distance between two points.
///
/// Non-finite coordinates propagate as NaN/Inf rather than failing.
#[must_use]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Corners of a `width` x `height` rectangle centred on `center`, rotated by
/// `angle` radians about that centre.
///
/// The winding is fixed before rotation: top-left, top-right, bottom-right,
/// bottom-left.
#[must_use]
pub fn rotated_rectangle_corners(center: DVec2, width: f64, height: f64, angle: f64) -> [DVec2; 4] {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let (sin, cos) = angle.sin_cos();

    let local = [
        DVec2::new(-half_w, -half_h),
        DVec2::new(half_w, -half_h),
        DVec2::new(half_w, half_h),
        DVec2::new(-half_w, half_h),
    ];

    local.map(|p| DVec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + center)
}

/// Smallest axis-aligned rectangle enclosing `points`.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyPointSet`] when `points` is empty.
pub fn bounding_box(points: &[DVec2]) -> Result<Rect, GeometryError> {
    let (first, rest) = points.split_first().ok_or(GeometryError::EmptyPointSet)?;
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
    Ok(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
}

/// Whether any point falls outside the arena `[0, width) x [0, height)`.
///
/// Zero is inside; a coordinate equal to `width` or `height` is outside.
#[must_use]
pub fn any_point_outside_bounds(points: &[DVec2], width: f64, height: f64) -> bool {
    points
        .iter()
        .any(|p| p.x < 0.0 || p.x >= width || p.y < 0.0 || p.y >= height)
}
