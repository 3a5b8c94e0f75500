//! Draws one frame of the parking lot onto a [`Raster`].
//!
//! Draw order matters to perception: the walls and parked cars are laid down
//! first, rays are cast against them, and only then are the agent and the
//! target drawn on top.

use crate::config::EnvConfig;
use crate::layout::{Layout, SLOTS_PER_ROW};
use crate::perception::{cast_rays, mark_rays};
use physics::{rotated_rectangle_corners, DVec2, Pose};
use render::{Color, Raster};

const TARGET_RADIUS: f64 = 5.0;

/// Lane separators, arena walls and parked cars.
#[allow(clippy::cast_precision_loss)]
pub fn draw_static<R: Raster + ?Sized>(raster: &mut R, layout: &Layout, config: &EnvConfig) {
    let (w, h) = (f64::from(config.width), f64::from(config.height));
    let line = config.lane_line_width;

    raster.fill(Color::BACKGROUND);

    for i in 1..SLOTS_PER_ROW {
        let x = i as f64 * config.lane_width;
        raster.draw_line(DVec2::new(x, 0.0), DVec2::new(x, config.lane_height), Color::LANE, line);
    }
    for i in 1..SLOTS_PER_ROW {
        let x = i as f64 * config.lane_width;
        raster.draw_line(DVec2::new(x, h - config.lane_height), DVec2::new(x, h), Color::LANE, line);
    }

    let walls = [
        (DVec2::new(0.0, 0.0), DVec2::new(0.0, h)),
        (DVec2::new(0.0, 0.0), DVec2::new(w, 0.0)),
        (DVec2::new(0.0, h), DVec2::new(w, h)),
        (DVec2::new(w, 0.0), DVec2::new(w, h)),
    ];
    for (from, to) in walls {
        raster.draw_line(from, to, Color::BOUNDARY, line);
    }

    for car in &layout.obstacles {
        raster.fill_rect(car, Color::OBSTACLE);
    }
}

/// Agent body, target marker and the guide line between them.
pub fn draw_agent<R: Raster + ?Sized>(raster: &mut R, pose: &Pose, target: DVec2, config: &EnvConfig) {
    let body = rotated_rectangle_corners(pose.position(), config.car_height, config.car_width, pose.heading);
    raster.fill_polygon(&body, Color::AGENT);
    raster.fill_circle(target, TARGET_RADIUS, Color::TARGET);
    raster.draw_line(pose.position(), target, Color::TARGET_GUIDE, 1);
}

/// Rebuild the whole frame for `pose` and return the ray readings taken
/// against it.
pub fn render_frame<R: Raster + ?Sized>(raster: &mut R, pose: &Pose, layout: &Layout, config: &EnvConfig) -> Vec<f64> {
    draw_static(raster, layout, config);
    let readings = cast_rays(pose, &*raster, config.num_rays, config.max_ray_distance);
    mark_rays(pose, raster, config.num_rays, config.max_ray_distance);
    draw_agent(raster, pose, layout.target, config);
    readings
}
