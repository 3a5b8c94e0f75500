//! Software rasterizer backing [`Raster`].

use crate::color::Color;
use crate::raster::Raster;
use glam::DVec2;
use physics::Rect;

/// Row-major RGB pixel buffer.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas cleared to [`Color::BACKGROUND`].
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self { width, height, pixels: vec![Color::BACKGROUND; len] }
    }

    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw `RGBRGB...` bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels currently set to `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Paint the horizontal run `[x0, x1]` on row `y`, clipped.
    fn span(&mut self, y: i64, x0: i64, x1: i64, color: Color) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width) - 1);
        for x in x0..=x1 {
            self.set_pixel(x, y, color);
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixel(v: f64) -> i64 {
    v.floor() as i64
}

/// Liang-Barsky clip of `from -> to` against the box `[min, max]`.
///
/// Returns `None` when the segment misses the box or has a non-finite
/// endpoint. An endpoint moved onto an edge takes that edge's coordinate
/// exactly, so very long segments do not lose the clipped end to rounding.
fn clip_segment(from: DVec2, to: DVec2, min: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    if !(from.is_finite() && to.is_finite()) {
        return None;
    }
    let d = to - from;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let (mut start, mut end) = (from, to);
    // (p, q, axis, edge value) per box edge
    let edges = [
        (-d.x, from.x - min.x, 0, min.x),
        (d.x, max.x - from.x, 0, max.x),
        (-d.y, from.y - min.y, 1, min.y),
        (d.y, max.y - from.y, 1, max.y),
    ];
    for (p, q, axis, edge) in edges {
        if p.abs() < f64::EPSILON {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
                start = from + d * r;
                start[axis] = edge;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
                end = from + d * r;
                end[axis] = edge;
            }
        }
    }
    Some((start.clamp(min, max), end.clamp(min, max)))
}

impl Raster for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn get_pixel(&self, x: i64, y: i64) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Bresenham walk between the rounded endpoints. Thickness is added
    /// across the minor axis, centred on the path.
    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Color, width: u32) {
        let width = i64::from(width.max(1));
        let (lo, hi) = (-(width - 1) / 2, width / 2);

        // keep the walk bounded; the margin keeps thick edges that straddle
        // the border intact
        #[allow(clippy::cast_precision_loss)]
        let margin = width as f64;
        let min = DVec2::splat(-margin);
        let max = DVec2::new(f64::from(self.width) - 1.0 + margin, f64::from(self.height) - 1.0 + margin);
        let Some((from, to)) = clip_segment(from, to, min, max) else {
            return;
        };

        let (mut x, mut y) = (to_pixel(from.x.round()), to_pixel(from.y.round()));
        let (x1, y1) = (to_pixel(to.x.round()), to_pixel(to.y.round()));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let steep = dx < -dy;
        let mut err = dx + dy;

        loop {
            for offset in lo..=hi {
                if steep {
                    self.set_pixel(x + offset, y, color);
                } else {
                    self.set_pixel(x, y + offset, color);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Covers pixels `[left, right) x [top, bottom)` after flooring.
    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let (x0, x1) = (to_pixel(rect.left), to_pixel(rect.right()));
        let (y0, y1) = (to_pixel(rect.top), to_pixel(rect.bottom()));
        for y in y0.max(0)..y1.min(i64::from(self.height)) {
            self.span(y, x0, x1 - 1, color);
        }
    }

    /// Even-odd scanline fill sampling pixel centres. Only rows of the
    /// canvas are scanned.
    fn fill_polygon(&mut self, points: &[DVec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

        let mut crossings = Vec::with_capacity(points.len());
        let rows = to_pixel(min_y).max(0)..=to_pixel(max_y).min(i64::from(self.height) - 1);
        for y in rows {
            #[allow(clippy::cast_precision_loss)]
            let sample_y = y as f64 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= sample_y) != (b.y <= sample_y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let x0 = to_pixel((pair[0] - 0.5).ceil());
                let x1 = to_pixel((pair[1] - 0.5).floor());
                if x0 <= x1 {
                    self.span(y, x0, x1, color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let (last_x, last_y) = (i64::from(self.width) - 1, i64::from(self.height) - 1);
        for y in to_pixel(center.y - radius).max(0)..=to_pixel(center.y + radius).min(last_y) {
            for x in to_pixel(center.x - radius).max(0)..=to_pixel(center.x + radius).min(last_x) {
                #[allow(clippy::cast_precision_loss)]
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_inside_the_box_are_untouched() {
        let (min, max) = (DVec2::splat(-5.0), DVec2::splat(100.0));
        let (a, b) = (DVec2::new(1.0, 2.0), DVec2::new(90.0, 40.0));
        assert_eq!(clip_segment(a, b, min, max), Some((a, b)));
    }

    #[test]
    fn huge_segments_are_clipped_into_the_box() {
        let (min, max) = (DVec2::splat(-5.0), DVec2::splat(100.0));
        let (a, b) = clip_segment(DVec2::new(1e30, 50.0), DVec2::new(10.0, 50.0), min, max).unwrap();
        assert_eq!(a, DVec2::new(100.0, 50.0));
        assert_eq!(b, DVec2::new(10.0, 50.0));
    }

    #[test]
    fn misses_and_non_finite_segments_are_dropped() {
        let (min, max) = (DVec2::splat(0.0), DVec2::splat(10.0));
        assert_eq!(clip_segment(DVec2::new(20.0, 0.0), DVec2::new(30.0, 5.0), min, max), None);
        assert_eq!(clip_segment(DVec2::new(f64::NAN, 0.0), DVec2::new(5.0, 5.0), min, max), None);
    }
}
