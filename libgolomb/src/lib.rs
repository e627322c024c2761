//! Golomb coding with two predictive lossless codecs on top of it:
//! PCM16 audio in GBL1 containers and 8-bit grayscale images in GIMG
//! containers.
//!
//! ```
//! use libgolomb::{AudioDecoder, AudioEncoder};
//!
//! let samples = [10i16, 12, 9, 9];
//! let gbl = AudioEncoder::new(44100, 1).encode(&samples).unwrap();
//! let decoded = AudioDecoder::new().decode(&gbl).unwrap();
//! assert_eq!(decoded.samples, samples);
//! ```

pub mod audio;
pub mod core;
pub mod image;

mod reader;
mod writer;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::{
    AudioFile, AudioHeader, BitReader, BitWriter, ContainerKind, GolombCoder, GolombError,
    GolombResult, ImageFile, ImageHeader, ImagePredictor, NegativeMode, AUDIO_MAGIC,
    IMAGE_MAGIC,
};
pub use audio::{read_wav, write_wav, AudioDecoder, AudioEncoder, DecodedAudio, WavHeader};
pub use image::{ImageDecoder, ImageEncoder, PixelBuffer};
pub use reader::Reader;
pub use writer::Writer;

// api functions

/// encode a PCM16 WAV file to GBL1
pub fn encode_wav(wav: &[u8], negative_mode: NegativeMode) -> GolombResult<Vec<u8>> {
    let (header, samples) = read_wav(wav)?;
    AudioEncoder::new(header.sample_rate, header.channels)
        .with_negative_mode(negative_mode)
        .encode(&samples)
}

/// decode a GBL1 file to a PCM16 WAV file
pub fn decode_to_wav(gbl: &[u8]) -> GolombResult<Vec<u8>> {
    let decoded = AudioDecoder::new().decode(gbl)?;
    write_wav(
        decoded.header.sample_rate,
        decoded.header.channels,
        &decoded.samples,
    )
}

/// encode a grayscale buffer to GIMG
pub fn encode_gray(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    predictor: ImagePredictor,
) -> GolombResult<Vec<u8>> {
    let image = PixelBuffer::new(width, height, pixels)?;
    ImageEncoder::new().with_predictor(predictor).encode(&image)
}

/// decode a GIMG file to a grayscale buffer
pub fn decode_gray(gimg: &[u8]) -> GolombResult<PixelBuffer> {
    ImageDecoder::new().decode(gimg)
}

/// crate version
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
