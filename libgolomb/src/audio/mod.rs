//! Lossless PCM16 audio (GBL1)
//!
//! Left is predicted from the previous left sample, right from the current
//! left sample. Residuals are golomb coded with a per-channel `m` that both
//! sides derive from an EMA of past residuals, so no parameter is stored.

pub mod decoder;
pub mod encoder;
pub mod estimator;
pub mod predictor;
pub mod wav;

pub use decoder::{decode_samples, AudioDecoder, DecodedAudio};
pub use encoder::{encode_samples, AudioEncoder};
pub use estimator::{AdaptiveEstimator, EMA_ALPHA, EMA_INITIAL};
pub use predictor::{reconstruct, FramePredictor};
pub use wav::{read_wav, write_wav, WavHeader, WAV_HEADER_SIZE};
