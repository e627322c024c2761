//! Temporal / inter-channel prediction for PCM16 frames

/// Prediction state carried across frames
///
/// Left is predicted from the previous left sample (0 for the first frame).
/// Right is predicted from the current left sample, not from previous right.
#[derive(Debug, Clone, Default)]
pub struct FramePredictor {
    previous_left: Option<i16>,
}

impl FramePredictor {
    pub fn new() -> Self {
        FramePredictor {
            previous_left: None,
        }
    }

    pub fn predict_left(&self) -> i64 {
        self.previous_left.map_or(0, i64::from)
    }

    pub fn predict_right(&self, current_left: i16) -> i64 {
        current_left as i64
    }

    /// Close the frame with its left sample
    ///
    /// Older GBL1 decoders derived this as `last - (last - second_last)` over
    /// the output buffer, which is the reconstructed left sample in both
    /// mono and stereo, so streams stay bit compatible.
    pub fn advance(&mut self, left: i16) {
        self.previous_left = Some(left);
    }
}

/// prediction + residual, clamped to i16
#[inline]
pub fn reconstruct(prediction: i64, residual: i64) -> i16 {
    prediction
        .saturating_add(residual)
        .clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_predicts_zero() {
        let mut p = FramePredictor::new();
        assert_eq!(p.predict_left(), 0);
        p.advance(-7);
        assert_eq!(p.predict_left(), -7);
        assert_eq!(p.predict_right(42), 42);
    }

    #[test]
    fn test_reconstruct_clamps() {
        assert_eq!(reconstruct(32767, 5), i16::MAX);
        assert_eq!(reconstruct(-32768, -5), i16::MIN);
        assert_eq!(reconstruct(100, -1), 99);
    }
}
