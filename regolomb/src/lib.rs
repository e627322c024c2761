//! regolomb - converter library for GBL1 audio and GIMG image containers
//!
//! Wraps libgolomb with file handling: WAV in/out for audio, common image
//! formats in/out (via the `image` crate) for 8-bit grayscale.

pub mod bits;
pub mod image_io;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use libgolomb::{AudioHeader, ContainerKind, ImageEncoder, ImageHeader, Reader};

pub use libgolomb::{ImagePredictor, NegativeMode};

/// Information about a GBL1 / GIMG file
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContainerInfo {
    pub kind: ContainerKind,
    /// libgolomb version doing the inspection
    pub codec_version: String,
    pub file_size: usize,
    pub payload_bits: u64,
    /// size of the uncompressed PCM16 data or 8-bit pixels
    pub raw_size: usize,
    /// raw / compressed
    pub compression_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioHeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageHeader>,
}

/// Get information about a GBL1 / GIMG file
pub fn get_info(data: &[u8]) -> Result<ContainerInfo> {
    let reader = Reader::new();

    let (kind, payload_bits, raw_size, audio, image) = match ContainerKind::detect(data) {
        Some(ContainerKind::Audio) => {
            let file = reader.read_audio(data).context("Invalid GBL1 file")?;
            let raw = file.header.frames as usize
                * file.header.channels as usize
                * (file.header.bits_per_sample as usize / 8);
            (
                ContainerKind::Audio,
                file.bit_len as u64,
                raw,
                Some(file.header),
                None,
            )
        }
        Some(ContainerKind::Image) => {
            let file = reader.read_image(data).context("Invalid GIMG file")?;
            let raw = file.header.pixel_count()?;
            (
                ContainerKind::Image,
                file.header.bit_len,
                raw,
                None,
                Some(file.header),
            )
        }
        None => bail!("Not a GBL1 or GIMG file"),
    };

    let compression_ratio = if data.is_empty() {
        0.0
    } else {
        raw_size as f64 / data.len() as f64
    };

    Ok(ContainerInfo {
        kind,
        codec_version: libgolomb::version(),
        file_size: data.len(),
        payload_bits,
        raw_size,
        compression_ratio,
        audio,
        image,
    })
}

/// Encoding options
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// spatial predictor for images
    pub predictor: ImagePredictor,
    /// signed residual layout for audio
    pub negative_mode: NegativeMode,
}

impl EncodeOptions {
    pub fn with_predictor(mut self, predictor: ImagePredictor) -> Self {
        self.predictor = predictor;
        self
    }

    pub fn with_negative_mode(mut self, mode: NegativeMode) -> Self {
        self.negative_mode = mode;
        self
    }
}

/// Encode WAV bytes (RIFF) to GBL1, anything else as a grayscale image to GIMG
pub fn encode_bytes(input: &[u8], options: &EncodeOptions) -> Result<Vec<u8>> {
    if input.starts_with(b"RIFF") {
        libgolomb::encode_wav(input, options.negative_mode).context("Failed to encode audio")
    } else {
        let image = image_io::load_gray(input)?;
        ImageEncoder::new()
            .with_predictor(options.predictor)
            .encode(&image)
            .context("Failed to encode image")
    }
}

/// Encode a file, returning info about what was written
pub fn encode_file(input: &Path, output: &Path, options: &EncodeOptions) -> Result<ContainerInfo> {
    let data = fs::read(input).context("Failed to read input file")?;
    let encoded = encode_bytes(&data, options)?;
    fs::write(output, &encoded).context("Failed to write output file")?;
    get_info(&encoded)
}

/// Decode a GBL1 file to WAV or a GIMG file to an image (format from the
/// output extension)
pub fn decode_file(input: &Path, output: &Path) -> Result<ContainerKind> {
    let data = fs::read(input).context("Failed to read input file")?;

    match ContainerKind::detect(&data) {
        Some(ContainerKind::Audio) => {
            let wav = libgolomb::decode_to_wav(&data).context("Failed to decode GBL1 file")?;
            fs::write(output, wav).context("Failed to write WAV file")?;
            Ok(ContainerKind::Audio)
        }
        Some(ContainerKind::Image) => {
            let image = libgolomb::decode_gray(&data).context("Failed to decode GIMG file")?;
            image_io::save_gray(output, &image)?;
            Ok(ContainerKind::Image)
        }
        None => bail!("{} is not a GBL1 or GIMG file", input.display()),
    }
}
