//! Per-call rendering context.
//!
//! A [`RenderContext`] owns the pixel buffer one chart is drawn into. It is
//! created at the start of a render and dropped when the render returns, on
//! success or failure, so no drawing state outlives a call or is shared
//! between concurrent calls.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use revchart_common::{ChartError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Bytes per pixel of the RGB canvas.
const CHANNELS: usize = 3;

/// Root drawing area over a context's buffer.
pub type CanvasArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Bounding box of drawn content, in pixels, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    /// Leftmost column.
    pub left: u32,
    /// Topmost row.
    pub top: u32,
    /// Rightmost column.
    pub right: u32,
    /// Bottom row.
    pub bottom: u32,
}

/// An isolated RGB canvas for a single chart.
pub struct RenderContext {
    width: u32,
    height: u32,
    background: RGBColor,
    buffer: Vec<u8>,
}

impl RenderContext {
    /// Allocates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: RGBColor) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::rendering(format!(
                "canvas must have a non-zero size, got {width}x{height}"
            )));
        }

        let pixels = width as usize * height as usize;
        let mut buffer = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            buffer.extend_from_slice(&[background.0, background.1, background.2]);
        }

        Ok(Self {
            width,
            height,
            background,
            buffer,
        })
    }

    /// Canvas size in pixels.
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Runs `draw` against a drawing area backed by this context's buffer.
    ///
    /// The backend is flushed before returning, and released even when
    /// `draw` fails.
    pub fn draw<F>(&mut self, draw: F) -> Result<()>
    where
        F: FnOnce(&CanvasArea<'_>) -> Result<()>,
    {
        let background = self.background;
        let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height))
            .into_drawing_area();
        root.fill(&background)?;
        draw(&root)?;
        root.present()?;
        Ok(())
    }

    /// The smallest box containing every pixel that differs from the background.
    ///
    /// Returns `None` for a blank canvas.
    pub fn content_bounds(&self) -> Option<ContentBounds> {
        let bg = [self.background.0, self.background.1, self.background.2];
        let mut bounds: Option<ContentBounds> = None;

        for (i, pixel) in self.buffer.chunks_exact(CHANNELS).enumerate() {
            if pixel == bg {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let (x, y) = ((i % self.width as usize) as u32, (i / self.width as usize) as u32);
            bounds = Some(match bounds {
                None => ContentBounds {
                    left: x,
                    top: y,
                    right: x,
                    bottom: y,
                },
                Some(b) => ContentBounds {
                    left: b.left.min(x),
                    top: b.top.min(y),
                    right: b.right.max(x),
                    bottom: b.bottom.max(y),
                },
            });
        }
        bounds
    }

    /// Consumes the context and returns the image cropped to its content plus
    /// `pad` pixels on every side, clamped to the canvas.
    pub fn crop_to_content(self, pad: u32) -> Result<RgbImage> {
        let bounds = self.content_bounds();
        let (width, height) = (self.width, self.height);

        let image = RgbImage::from_raw(width, height, self.buffer)
            .ok_or_else(|| ChartError::rendering("canvas buffer does not match its dimensions"))?;

        let Some(b) = bounds else {
            return Ok(image);
        };

        let left = b.left.saturating_sub(pad);
        let top = b.top.saturating_sub(pad);
        let right = b.right.saturating_add(pad).min(width - 1);
        let bottom = b.bottom.saturating_add(pad).min(height - 1);
        let (crop_w, crop_h) = (right - left + 1, bottom - top + 1);

        debug!(
            from = ?(width, height),
            to = ?(crop_w, crop_h),
            "cropped canvas to content"
        );
        Ok(image::imageops::crop_imm(&image, left, top, crop_w, crop_h).to_image())
    }
}

/// Encodes an RGB image as PNG.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgb8,
    )?;
    Ok(bytes)
}

/// Writes `bytes` to `directory/file_name`, creating the directory first.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over the target, so the target is either the complete new image
/// or untouched. An existing file is replaced.
pub fn write_atomically(directory: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(directory).map_err(|e| ChartError::filesystem(directory, e))?;

    let target = directory.join(file_name);
    let mut tmp = tempfile::NamedTempFile::new_in(directory)
        .map_err(|e| ChartError::filesystem(directory, e))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.flush())
        .map_err(|e| ChartError::filesystem(&target, e))?;
    tmp.persist(&target)
        .map_err(|e| ChartError::filesystem(&target, e.error))?;

    Ok(target)
}
