//! RGB palette shared by the scene drawing and the perception model.

/// Packed 8-bit RGB colour, laid out so a pixel slice casts to raw bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
    /// Arena walls. Occludes rays.
    pub const BOUNDARY: Color = Color::rgb(64, 224, 208);
    /// Parked cars. Occludes rays.
    pub const OBSTACLE: Color = Color::rgb(255, 255, 255);
    pub const LANE: Color = Color::rgb(255, 255, 0);
    pub const AGENT: Color = Color::rgb(0, 0, 255);
    pub const TARGET: Color = Color::rgb(255, 0, 0);
    pub const TARGET_GUIDE: Color = Color::rgb(255, 10, 10);
    /// Trace of the ray cast along the heading.
    pub const RAY_PRIMARY: Color = Color::rgb(0, 255, 0);
    pub const RAY: Color = Color::rgb(150, 150, 150);

    /// Whether a ray stops on this colour.
    #[must_use]
    pub fn occludes(self) -> bool {
        self == Color::BOUNDARY || self == Color::OBSTACLE
    }
}
