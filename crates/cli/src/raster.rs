//! 8-bit grayscale rasters backed by image files
//!
//! Inputs may be in any format the `image` crate decodes and are converted
//! to grayscale on load. Outputs are always written as BMP. Cipher output is
//! not a multiple of the width in general, so [`GrayImage::from_stream`]
//! lays an arbitrary byte stream out row by row and zero-fills the final row.

use std::path::Path;

use image::{ColorType, ImageError, ImageFormat};
use teacrypt_api::error::{Error, Result};

/// Grayscale raster, row-major, one byte per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

/// Pixel count for `width` x `height`, rejecting sizes no image file can hold
fn pixel_total(width: usize, height: usize) -> Result<usize> {
    if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
        return Err(Error::resource("image", "dimensions exceed 32 bits"));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| Error::resource("image", "dimensions overflow"))
}

fn image_error(context: &'static str, err: ImageError) -> Error {
    Error::resource(context, err.to_string())
}

impl GrayImage {
    /// Wrap an existing raster
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::resource("image", "image has no pixels"));
        }
        let total = pixel_total(width, height)?;
        if pixels.len() != total {
            return Err(Error::InvalidLength {
                context: "image raster",
                expected: total,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Lay out a byte stream in rows of `width`, zero-filling the last row
    pub fn from_stream(data: &[u8], width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidParameter {
                context: "image width",
                message: "width must be positive".to_string(),
            });
        }
        let height = data.len().div_ceil(width).max(1);
        let total = pixel_total(width, height)?;
        let mut pixels = data.to_vec();
        pixels.resize(total, 0);
        Self::new(width, height, pixels)
    }

    /// Lay out a byte stream with fixed dimensions, truncating or zero-filling
    pub fn with_dimensions(data: &[u8], width: usize, height: usize) -> Result<Self> {
        let total = pixel_total(width, height)?;
        let mut pixels = data[..data.len().min(total)].to_vec();
        pixels.resize(total, 0);
        Self::new(width, height, pixels)
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel count
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Raw pixel bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn from_luma(luma: image::GrayImage) -> Result<Self> {
        let (width, height) = luma.dimensions();
        Self::new(width as usize, height as usize, luma.into_raw())
    }

    /// Decode an in-memory image file of any supported format to grayscale
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|e| image_error("image", e))?;
        Self::from_luma(decoded.to_luma8())
    }

    /// Read an image file, converting it to grayscale
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let decoded = image::open(path).map_err(|e| image_error("input image", e))?;
        Self::from_luma(decoded.to_luma8())
    }

    /// Write the raster as an 8-bit BMP
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        // `new` keeps both dimensions within u32
        image::save_buffer_with_format(
            path,
            &self.pixels,
            self.width as u32,
            self.height as u32,
            ColorType::L8,
            ImageFormat::Bmp,
        )
        .map_err(|e| image_error("output image", e))
    }
}
