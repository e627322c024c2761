use crate::core::{BitReader, GolombCoder, GolombError, GolombResult, NegativeMode};
use crate::Reader;

use super::predictor::reconstruct_pixel;
use super::PixelBuffer;

pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        ImageDecoder
    }

    /// decode a GIMG file to a grayscale buffer
    pub fn decode(&self, data: &[u8]) -> GolombResult<PixelBuffer> {
        let file = Reader::new().read_image(data)?;
        let header = &file.header;

        let coder = GolombCoder::new(header.m as u64, NegativeMode::ZigzagInterleaved)?;
        let bit_len = usize::try_from(header.bit_len).map_err(|_| {
            GolombError::UnsupportedFormat(format!("bit length {} too large", header.bit_len))
        })?;
        let mut bits = BitReader::with_bit_len(&file.payload, bit_len)?;

        let expected = header.pixel_count()?;
        // every code is at least one bit
        let mut residuals = Vec::with_capacity(expected.min(bit_len));
        while bits.has_more() && residuals.len() < expected {
            let (residual, _) = coder.decode(&mut bits)?;
            residuals.push(residual);
        }

        if residuals.len() != expected {
            return Err(GolombError::SizeMismatch {
                what: "pixels",
                expected,
                actual: residuals.len(),
            });
        }

        let width = header.width as usize;
        let mut pixels = vec![0u8; expected];
        for (i, &residual) in residuals.iter().enumerate() {
            let prediction = header.predictor.predict(&pixels, width, i / width, i % width);
            pixels[i] = reconstruct_pixel(prediction, residual);
        }

        PixelBuffer::new(header.width, header.height, pixels)
    }
}

impl Default for ImageDecoder {
    fn default() -> Self {
        Self::new()
    }
}
