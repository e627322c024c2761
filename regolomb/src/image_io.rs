use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageFormat};
use libgolomb::{GolombError, PixelBuffer};
use log::debug;

/// Decode PNG/PNM/JPEG/... bytes into an 8-bit single channel buffer
///
/// Colour or 16-bit images are rejected rather than converted.
pub fn load_gray(bytes: &[u8]) -> Result<PixelBuffer> {
    let decoded = image::load_from_memory(bytes).context("Unsupported image format")?;

    match decoded {
        DynamicImage::ImageLuma8(gray) => {
            let (width, height) = gray.dimensions();
            debug!("loaded {}x{} gray image", width, height);
            Ok(PixelBuffer::new(width, height, gray.into_raw())?)
        }
        other => Err(GolombError::UnsupportedFormat(format!(
            "{:?} image, 8-bit single channel required",
            other.color()
        ))
        .into()),
    }
}

fn to_gray_image(image: &PixelBuffer) -> Result<GrayImage> {
    GrayImage::from_raw(image.width(), image.height(), image.pixels().to_vec())
        .context("Pixel buffer does not match its dimensions")
}

/// Write a grayscale buffer, format chosen by the path's extension
pub fn save_gray(path: &Path, image: &PixelBuffer) -> Result<()> {
    to_gray_image(image)?
        .save(path)
        .with_context(|| format!("Failed to write image {}", path.display()))
}

/// Serialize a grayscale buffer in memory
pub fn encode_gray(image: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    to_gray_image(image)?
        .write_to(&mut out, format)
        .context("Failed to encode image")?;
    Ok(out.into_inner())
}
