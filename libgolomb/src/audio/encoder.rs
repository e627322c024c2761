use log::debug;

use crate::core::{
    AudioHeader, BitWriter, GolombCoder, GolombError, GolombResult, NegativeMode,
    BITS_PER_SAMPLE,
};
use crate::Writer;

use super::estimator::AdaptiveEstimator;
use super::predictor::FramePredictor;

pub struct AudioEncoder {
    sample_rate: u32,
    channels: u16,
    negative_mode: NegativeMode,
}

impl AudioEncoder {
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        AudioEncoder {
            sample_rate,
            channels,
            negative_mode: NegativeMode::ZigzagInterleaved,
        }
    }

    pub fn with_negative_mode(mut self, mode: NegativeMode) -> Self {
        self.negative_mode = mode;
        self
    }

    /// encode interleaved PCM16 samples to a GBL1 file
    pub fn encode(&self, samples: &[i16]) -> GolombResult<Vec<u8>> {
        check_channels(self.channels)?;

        let frames = samples.len() / self.channels as usize;
        let partial = samples.len() % self.channels as usize;
        if partial != 0 {
            debug!("audio: dropping {} samples of a partial frame", partial);
        }
        let frames = u32::try_from(frames).map_err(|_| {
            GolombError::UnsupportedFormat(format!("{} frames do not fit GBL1", frames))
        })?;

        let bits = encode_samples(samples, self.channels, self.negative_mode)?;

        debug!(
            "audio: {} frames x {} ch -> {} bits ({:?})",
            frames,
            self.channels,
            bits.len(),
            self.negative_mode
        );

        let header = AudioHeader {
            channels: self.channels,
            sample_rate: self.sample_rate,
            frames,
            bits_per_sample: BITS_PER_SAMPLE,
            negative_mode: self.negative_mode,
        };

        Writer::new().write_audio(&header, &bits)
    }
}

/// Adaptive golomb coding of interleaved mono/stereo samples
///
/// A trailing partial frame is ignored.
pub fn encode_samples(
    samples: &[i16],
    channels: u16,
    negative_mode: NegativeMode,
) -> GolombResult<BitWriter> {
    check_channels(channels)?;

    let mut bits = BitWriter::with_capacity(samples.len() * 4);
    let mut predictor = FramePredictor::new();
    let mut left_est = AdaptiveEstimator::new();
    let mut right_est = AdaptiveEstimator::new();

    for frame in samples.chunks_exact(channels as usize) {
        let left = frame[0];
        let residual = left as i64 - predictor.predict_left();
        GolombCoder::new(left_est.parameter(), negative_mode)?.encode(residual, &mut bits);
        left_est.update(residual);

        if channels == 2 {
            let residual = frame[1] as i64 - predictor.predict_right(left);
            GolombCoder::new(right_est.parameter(), negative_mode)?.encode(residual, &mut bits);
            right_est.update(residual);
        }

        predictor.advance(left);
    }

    Ok(bits)
}

pub(crate) fn check_channels(channels: u16) -> GolombResult<()> {
    if channels == 1 || channels == 2 {
        Ok(())
    } else {
        Err(GolombError::UnsupportedFormat(format!(
            "{} channels, only mono or stereo",
            channels
        )))
    }
}
