//! common types for the golomb codecs

use serde::Serialize;
use thiserror::Error;

// constants

/// Magic number "GBL1" (compressed audio)
pub const AUDIO_MAGIC: [u8; 4] = *b"GBL1";

/// Magic number "GIMG" (compressed grayscale image)
pub const IMAGE_MAGIC: [u8; 4] = *b"GIMG";

/// audio header size including magic, excluding the bit-length field
pub const AUDIO_HEADER_SIZE: usize = 15;

/// image header size including magic and bit-length
pub const IMAGE_HEADER_SIZE: usize = 25;

/// the only sample width the audio path handles
pub const BITS_PER_SAMPLE: u16 = 16;

// errors

/// failure kinds shared by every codec in this crate
#[derive(Debug, Error)]
pub enum GolombError {
    /// m == 0, unknown predictor id, unknown negative mode
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// non-PCM16 wav, wrong channel count, bad magic, truncated header
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// bit reader exhausted or a code consumed no bits
    #[error("bit stream underflow: {0}")]
    StreamUnderflow(String),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// decoded count differs from the header
    #[error("size mismatch: expected {expected} {what}, decoded {actual}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// result type for golomb stuff
pub type GolombResult<T> = Result<T, GolombError>;

// types

/// how signed values reach the unsigned golomb code
///
/// | Value | Mode              | Layout                               |
/// |-------|-------------------|--------------------------------------|
/// | 0     | SignMagnitude     | sign bit (1 = negative), then \|v\|  |
/// | 1     | ZigzagInterleaved | 0,-1,1,-2,2.. mapped onto 0,1,2,3,4.. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum NegativeMode {
    SignMagnitude = 0,
    #[default]
    ZigzagInterleaved = 1,
}

impl TryFrom<u8> for NegativeMode {
    type Error = GolombError;

    fn try_from(v: u8) -> GolombResult<Self> {
        match v {
            0 => Ok(NegativeMode::SignMagnitude),
            1 => Ok(NegativeMode::ZigzagInterleaved),
            other => Err(GolombError::InvalidParameter(format!(
                "unknown negative mode {}",
                other
            ))),
        }
    }
}

/// spatial predictor for the image codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum ImagePredictor {
    /// pixel to the left, 0 at column 0
    Left = 0,
    /// median of left, top and the gradient left + top - topleft
    #[default]
    Median = 1,
}

impl TryFrom<u8> for ImagePredictor {
    type Error = GolombError;

    fn try_from(v: u8) -> GolombResult<Self> {
        match v {
            0 => Ok(ImagePredictor::Left),
            1 => Ok(ImagePredictor::Median),
            other => Err(GolombError::InvalidParameter(format!(
                "unknown predictor id {}",
                other
            ))),
        }
    }
}

// data structures

/// GBL1 header (15 bytes, little endian)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioHeader {
    pub channels: u16,
    pub sample_rate: u32,
    pub frames: u32,
    pub bits_per_sample: u16,
    pub negative_mode: NegativeMode,
}

/// GIMG header (25 bytes, little endian)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub predictor: ImagePredictor,
    pub m: u32,
    pub bit_len: u64,
}

impl ImageHeader {
    /// width * height, refused when it does not fit the address space
    pub fn pixel_count(&self) -> GolombResult<usize> {
        pixel_count(self.width, self.height)
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> GolombResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| {
            GolombError::UnsupportedFormat(format!("{}x{} image is too large", width, height))
        })
}

/// parsed GBL1 file
#[derive(Debug, Clone)]
pub struct AudioFile {
    pub header: AudioHeader,
    pub bit_len: u32,
    pub payload: Vec<u8>,
}

/// parsed GIMG file
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub header: ImageHeader,
    pub payload: Vec<u8>,
}

/// which container a byte buffer holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContainerKind {
    Audio,
    Image,
}

impl ContainerKind {
    /// sniff the magic number
    pub fn detect(data: &[u8]) -> Option<Self> {
        match data.get(..4) {
            Some(m) if m == AUDIO_MAGIC => Some(ContainerKind::Audio),
            Some(m) if m == IMAGE_MAGIC => Some(ContainerKind::Image),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_count() {
        assert_eq!(pixel_count(0, 7).unwrap(), 0);
        assert_eq!(pixel_count(640, 480).unwrap(), 307_200);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_pixel_count_overflow() {
        assert!(matches!(
            pixel_count(u32::MAX, 2),
            Err(GolombError::UnsupportedFormat(_))
        ));
    }
}
