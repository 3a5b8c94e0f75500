//! # Ray-Cast Perception
//!
//! The agent senses its surroundings through `num_rays` rays spread evenly
//! around its heading. Each ray is marched one unit at a time over the
//! rendered raster and stops on the first boundary or obstacle pixel.
//!
//! A reading is the index of the last free pixel visited before the ray was
//! stopped. A ray that is never stopped within range reads the full
//! `max_distance`. Samples that fall outside the raster are skipped without
//! ending the ray.

use physics::Pose;
use render::{Color, Raster};
use std::f64::consts::PI;

/// One sample along a ray: the step index and the pixel it lands on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RaySample {
    pub step: u32,
    pub x: i64,
    pub y: i64,
}

/// Absolute angle of ray `index` out of `num_rays`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ray_angle(pose: &Pose, index: usize, num_rays: usize) -> f64 {
    index as f64 * 2.0 * PI / num_rays as f64 + pose.heading
}

/// Pixels visited by a ray at `angle`, from the agent outwards.
#[allow(clippy::cast_possible_truncation)]
pub fn ray_samples(pose: &Pose, angle: f64, max_distance: u32) -> impl Iterator<Item = RaySample> {
    let (sin, cos) = angle.sin_cos();
    let (x0, y0) = (pose.x, pose.y);
    (0..max_distance).map(move |step| {
        let j = f64::from(step);
        RaySample {
            step,
            x: (x0 + j * cos).trunc() as i64,
            y: (y0 + j * sin).trunc() as i64,
        }
    })
}

/// March a single ray and return its reading.
pub fn cast_ray<R: Raster + ?Sized>(pose: &Pose, angle: f64, raster: &R, max_distance: u32) -> f64 {
    let mut reading = f64::from(max_distance);
    for sample in ray_samples(pose, angle, max_distance) {
        match raster.get_pixel(sample.x, sample.y) {
            None => {}
            Some(color) if color.occludes() => return reading,
            Some(_) => reading = f64::from(sample.step),
        }
    }
    f64::from(max_distance)
}

/// Readings for all rays, starting with the one along the heading.
pub fn cast_rays<R: Raster + ?Sized>(pose: &Pose, raster: &R, num_rays: usize, max_distance: u32) -> Vec<f64> {
    (0..num_rays)
        .map(|i| cast_ray(pose, ray_angle(pose, i, num_rays), raster, max_distance))
        .collect()
}

/// Paint every free pixel each ray passes over, up to its first occluder.
///
/// The ray along the heading is drawn in [`Color::RAY_PRIMARY`], the others in
/// [`Color::RAY`]. Neither colour occludes, so marking leaves later readings
/// unchanged.
pub fn mark_rays<R: Raster + ?Sized>(pose: &Pose, raster: &mut R, num_rays: usize, max_distance: u32) {
    for i in 0..num_rays {
        let color = if i == 0 { Color::RAY_PRIMARY } else { Color::RAY };
        for sample in ray_samples(pose, ray_angle(pose, i, num_rays), max_distance) {
            match raster.get_pixel(sample.x, sample.y) {
                None => {}
                Some(c) if c.occludes() => break,
                Some(_) => raster.set_pixel(sample.x, sample.y, color),
            }
        }
    }
}
