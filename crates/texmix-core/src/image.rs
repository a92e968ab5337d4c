//! Raster representation shared by all transforms.

use image::RgbaImage;

use crate::error::{Dimensions, Result, TransformError};
use crate::pixel::Rgba;

/// Row-major grid of 8-bit RGBA pixels.
///
/// Transforms take rasters by shared reference and return new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Wrap a pixel buffer. Fails if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TransformError::BufferSize {
                dimensions: Dimensions { width, height },
                len: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Raster filled with a single pixel value.
    pub fn filled(width: u32, height: u32, px: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![px; width as usize * height as usize],
        }
    }

    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels: &[Rgba] = bytemuck::cast_slice(img.as_raw());
        Self {
            width,
            height,
            pixels: pixels.to_vec(),
        }
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        let bytes: Vec<u8> = bytemuck::cast_slice(&self.pixels).to_vec();
        // Length is width * height * 4 by construction.
        RgbaImage::from_raw(self.width, self.height, bytes)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// New raster of the same size with `f` applied to every pixel.
    pub fn map(&self, f: impl Fn(Rgba) -> Rgba) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    /// Fail with [`TransformError::DimensionMismatch`] unless `other` has the
    /// same size as `self`.
    pub fn ensure_same_size(&self, other: &Raster) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            tracing::warn!(
                "raster size mismatch: expected {}, got {}",
                self.dimensions(),
                other.dimensions()
            );
            return Err(TransformError::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            });
        }
        Ok(())
    }
}
