//! Axis-aligned overlap queries against the static obstacle list

use crate::types::Rect;

/// Index of the first obstacle overlapping `bounds`, if any.
#[must_use]
pub fn first_overlap(bounds: &Rect, obstacles: &[Rect]) -> Option<usize> {
    obstacles.iter().position(|o| bounds.intersects(o))
}

/// Check if `bounds` overlaps any obstacle
#[must_use]
pub fn overlaps_any(bounds: &Rect, obstacles: &[Rect]) -> bool {
    first_overlap(bounds, obstacles).is_some()
}
