//! # Parking Arena Raster
//!
//! The drawing surface of the parking arena. Perception never looks at the
//! geometry directly: it reads back pixel colours from a [`Raster`], so the
//! only contract that matters to the environment is the trait in [`raster`].
//!
//! -   [`Canvas`] is the in-memory implementation used for simulation,
//!     headless runs and tests.
//! -   [`color`] holds the palette. Boundary and obstacle colours are unique
//!     within it, which keeps the exact-match occlusion test unambiguous.
//! -   [`export`] writes canvases to PNG for offline inspection.

pub mod canvas;
pub mod color;
pub mod export;
pub mod raster;

pub use canvas::Canvas;
pub use color::Color;
pub use export::{save_png, FrameRecorder};
pub use raster::Raster;
