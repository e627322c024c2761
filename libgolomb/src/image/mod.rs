//! Lossless 8-bit grayscale images (GIMG)
//!
//! One predictor and one golomb `m` for the whole image; `m` is the best of a
//! fixed candidate sweep, chosen at encode time and stored in the header.

pub mod decoder;
pub mod encoder;
pub mod predictor;

pub use decoder::ImageDecoder;
pub use encoder::{candidate_parameters, select_parameter, ImageEncoder};
pub use predictor::{median_predict, reconstruct_pixel, residuals};

use crate::core::{GolombError, GolombResult};

/// Row-major single channel 8-bit image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> GolombResult<Self> {
        let expected = crate::core::types::pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(GolombError::SizeMismatch {
                what: "pixels",
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
