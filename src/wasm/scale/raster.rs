//! Borrowed RGBA raster views with a clamp-to-edge pixel accessor.
//!
//! Buffers are flat, row-major, four channels per pixel. A view validates
//! its geometry at construction so the sampling loops never re-check.

use super::error::ScaleError;
use super::pixel::{self, Color};

/// Read-only view over a caller-owned source raster.
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RasterView<'a> {
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, ScaleError> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(ScaleError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Clamp-to-edge read of one pixel.
    ///
    /// Total for any integer coordinate; the bicubic neighborhood's
    /// off-raster taps rely on this being the single out-of-bounds seam.
    #[inline(always)]
    pub fn pick(&self, x: isize, y: isize) -> Color {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        let offset = (y * self.width + x) * 4;
        pixel::from_bytes(&self.data[offset..offset + 4])
    }
}

/// Mutable view over the caller-allocated destination raster.
#[derive(Debug)]
pub struct RasterMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> RasterMut<'a> {
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Result<Self, ScaleError> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(ScaleError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Write one pixel. `x` and `y` must be in bounds; the driver only
    /// produces in-range destination coordinates.
    #[inline(always)]
    pub fn put(&mut self, x: usize, y: usize, color: Color) {
        let offset = (y * self.width + x) * 4;
        self.data[offset..offset + 4].copy_from_slice(&pixel::to_bytes(color));
    }
}

/// Byte length of a `width` x `height` RGBA buffer, rejecting zero or
/// overflowing dimensions.
pub(crate) fn buffer_len(width: usize, height: usize) -> Result<usize, ScaleError> {
    if width == 0 || height == 0 {
        return Err(ScaleError::InvalidDimensions { width, height });
    }

    width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(4))
        .ok_or(ScaleError::InvalidDimensions { width, height })
}
