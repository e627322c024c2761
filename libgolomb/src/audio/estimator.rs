//! Per-channel golomb parameter estimation
//!
//! The decoder derives `m` from its own running average of decoded residuals,
//! so the update below must run in exactly the same order with exactly the
//! same f64 operations on both sides. Nothing about it is stored in the file.

/// EMA smoothing factor
pub const EMA_ALPHA: f64 = 0.01;

/// EMA starting value
pub const EMA_INITIAL: f64 = 1.0;

/// Exponential moving average of absolute residuals for one channel
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveEstimator {
    ema: f64,
}

impl AdaptiveEstimator {
    pub fn new() -> Self {
        AdaptiveEstimator { ema: EMA_INITIAL }
    }

    /// m for the next residual: max(1, round(ema)), halves rounded up
    pub fn parameter(&self) -> u64 {
        let rounded = (self.ema + 0.5).floor();
        rounded.max(1.0) as u64
    }

    /// fold in the residual just coded
    pub fn update(&mut self, residual: i64) {
        self.ema = (1.0 - EMA_ALPHA) * self.ema + EMA_ALPHA * (residual as f64).abs();
    }

    pub fn ema(&self) -> f64 {
        self.ema
    }
}

impl Default for AdaptiveEstimator {
    fn default() -> Self {
        Self::new()
    }
}
