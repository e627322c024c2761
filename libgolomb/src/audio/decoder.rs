use log::debug;

use crate::core::{
    AudioHeader, BitReader, GolombCoder, GolombError, GolombResult, NegativeMode,
};
use crate::Reader;

use super::encoder::check_channels;
use super::estimator::AdaptiveEstimator;
use super::predictor::{reconstruct, FramePredictor};

/// decoded GBL1 contents
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub header: AudioHeader,
    /// interleaved PCM16
    pub samples: Vec<i16>,
}

pub struct AudioDecoder;

impl AudioDecoder {
    pub fn new() -> Self {
        AudioDecoder
    }

    /// decode a GBL1 file
    pub fn decode(&self, data: &[u8]) -> GolombResult<DecodedAudio> {
        let file = Reader::new().read_audio(data)?;
        let mut bits = BitReader::with_bit_len(&file.payload, file.bit_len as usize)?;

        let samples = decode_samples(
            &mut bits,
            file.header.channels,
            file.header.frames as usize,
            file.header.negative_mode,
        )?;

        if bits.has_more() {
            debug!("audio: {} trailing bits ignored", bits.remaining());
        }

        Ok(DecodedAudio {
            header: file.header,
            samples,
        })
    }
}

impl Default for AudioDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Inverse of `encode_samples`, replaying the same estimator updates
pub fn decode_samples(
    bits: &mut BitReader,
    channels: u16,
    frames: usize,
    negative_mode: NegativeMode,
) -> GolombResult<Vec<i16>> {
    check_channels(channels)?;

    let mut out = Vec::with_capacity((frames * channels as usize).min(bits.remaining()));
    let mut predictor = FramePredictor::new();
    let mut left_est = AdaptiveEstimator::new();
    let mut right_est = AdaptiveEstimator::new();

    for frame in 0..frames {
        if !bits.has_more() {
            return Err(exhausted("left", frame));
        }
        let coder = GolombCoder::new(left_est.parameter(), negative_mode)?;
        let (residual, _) = coder.decode(bits)?;
        let left = reconstruct(predictor.predict_left(), residual);
        out.push(left);
        left_est.update(residual);

        if channels == 2 {
            if !bits.has_more() {
                return Err(exhausted("right", frame));
            }
            let coder = GolombCoder::new(right_est.parameter(), negative_mode)?;
            let (residual, _) = coder.decode(bits)?;
            out.push(reconstruct(predictor.predict_right(left), residual));
            right_est.update(residual);
        }

        predictor.advance(left);
    }

    let expected = frames * channels as usize;
    if out.len() != expected {
        return Err(GolombError::SizeMismatch {
            what: "samples",
            expected,
            actual: out.len(),
        });
    }

    Ok(out)
}

fn exhausted(channel: &str, frame: usize) -> GolombError {
    GolombError::StreamUnderflow(format!(
        "bitstream exhausted decoding {} channel of frame {}",
        channel, frame
    ))
}
