use log::{debug, trace};

use crate::core::{
    BitWriter, GolombCoder, GolombResult, ImageHeader, ImagePredictor, NegativeMode,
};
use crate::Writer;

use super::predictor::residuals;
use super::PixelBuffer;

/// Candidate divisors in trial order: powers of two, then odd values
pub fn candidate_parameters() -> impl Iterator<Item = u64> {
    let powers = (0..=6).map(|k| 1u64 << k);
    let odds = (3..=31).step_by(2);
    powers.chain(odds)
}

/// Pick the candidate giving the shortest total code length
///
/// Exhaustive over every candidate, O(candidates x residuals). Ties keep the
/// earlier candidate. Returns (m, total bits).
pub fn select_parameter(residuals: &[i64]) -> GolombResult<(u64, u64)> {
    let mut best: Option<(u64, u64)> = None;

    for m in candidate_parameters() {
        let coder = GolombCoder::new(m, NegativeMode::ZigzagInterleaved)?;
        let total: u64 = residuals.iter().map(|&r| coder.encoded_len(r)).sum();
        trace!("image: m={} -> {} bits", m, total);

        match best {
            Some((_, best_total)) if total >= best_total => {}
            _ => best = Some((m, total)),
        }
    }

    // the candidate list is never empty
    Ok(best.unwrap_or((1, 0)))
}

pub struct ImageEncoder {
    predictor: ImagePredictor,
}

impl ImageEncoder {
    pub fn new() -> Self {
        ImageEncoder {
            predictor: ImagePredictor::Median,
        }
    }

    pub fn with_predictor(mut self, predictor: ImagePredictor) -> Self {
        self.predictor = predictor;
        self
    }

    /// encode a grayscale buffer to a GIMG file
    pub fn encode(&self, image: &PixelBuffer) -> GolombResult<Vec<u8>> {
        let residuals = residuals(self.predictor, image.pixels(), image.width() as usize);
        let (m, total_bits) = select_parameter(&residuals)?;

        let coder = GolombCoder::new(m, NegativeMode::ZigzagInterleaved)?;
        let mut bits = BitWriter::with_capacity(total_bits as usize);
        for &r in &residuals {
            coder.encode(r, &mut bits);
        }

        debug!(
            "image: {}x{} {:?} chose m={} bits={}",
            image.width(),
            image.height(),
            self.predictor,
            m,
            bits.len()
        );

        let header = ImageHeader {
            width: image.width(),
            height: image.height(),
            predictor: self.predictor,
            m: m as u32,
            bit_len: bits.len() as u64,
        };

        Writer::new().write_image(&header, &bits)
    }
}

impl Default for ImageEncoder {
    fn default() -> Self {
        Self::new()
    }
}
