//! The drawing and query contract between the environment and its display
//! surface.

use crate::color::Color;
use glam::DVec2;
use physics::Rect;

/// A pixel buffer that can be drawn into with solid colours and queried back.
///
/// Pixel coordinates are integers with the origin at the top-left corner.
/// Drawing is clipped to the buffer; queries outside it return `None`.
pub trait Raster {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Overwrite every pixel with `color`.
    fn fill(&mut self, color: Color);

    /// Colour at `(x, y)`, or `None` when the coordinate is out of bounds.
    fn get_pixel(&self, x: i64, y: i64) -> Option<Color>;

    /// Set a single pixel. Out-of-bounds writes are ignored.
    fn set_pixel(&mut self, x: i64, y: i64, color: Color);

    /// Draw a straight segment `width` pixels thick.
    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Color, width: u32);

    fn fill_rect(&mut self, rect: &Rect, color: Color);

    /// Fill a simple polygon given by its vertices in order.
    fn fill_polygon(&mut self, points: &[DVec2], color: Color);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);

    /// Whether `(x, y)` addresses a pixel of this raster.
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }
}
