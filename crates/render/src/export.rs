//! PNG export of canvases, one file per frame.

use crate::canvas::Canvas;
use crate::raster::Raster;
use anyhow::{Context, Result};
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `canvas` to `path` as an 8-bit RGB PNG.
///
/// # Errors
///
/// Fails when the image cannot be encoded or written.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let image = RgbImage::from_raw(canvas.width(), canvas.height(), canvas.as_bytes().to_vec())
        .context("canvas buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("failed to write frame {}", path.display()))?;
    Ok(())
}

/// Writes successive frames as `frame_000000.png`, `frame_000001.png`, ...
pub struct FrameRecorder {
    dir: PathBuf,
    next: usize,
}

impl FrameRecorder {
    /// Create the output directory if needed.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create frame directory {}", dir.display()))?;
        tracing::info!("Recording frames to {}", dir.display());
        Ok(Self { dir, next: 0 })
    }

    /// Save `canvas` as the next frame and return its path.
    ///
    /// # Errors
    ///
    /// Propagates [`save_png`] failures.
    pub fn record(&mut self, canvas: &Canvas) -> Result<PathBuf> {
        let path = self.dir.join(format!("frame_{:06}.png", self.next));
        save_png(canvas, &path)?;
        self.next += 1;
        Ok(path)
    }

    #[must_use]
    pub fn frames_written(&self) -> usize {
        self.next
    }
}
