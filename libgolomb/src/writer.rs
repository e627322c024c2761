use crate::core::{AudioHeader, BitWriter, GolombError, GolombResult, ImageHeader};
use crate::{AUDIO_MAGIC, IMAGE_MAGIC};

/// binary writer for GBL1 / GIMG containers
pub struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    /// new writer
    pub fn new() -> Self {
        Writer { buffer: Vec::new() }
    }

    /// write a complete GBL1 file
    pub fn write_audio(mut self, header: &AudioHeader, bits: &BitWriter) -> GolombResult<Vec<u8>> {
        let bit_len = u32::try_from(bits.len()).map_err(|_| {
            GolombError::UnsupportedFormat(format!("{} bits exceed the GBL1 limit", bits.len()))
        })?;

        // Magic "GBL1"
        self.buffer.extend_from_slice(&AUDIO_MAGIC);

        // Channels (u16 LE)
        self.buffer.extend_from_slice(&header.channels.to_le_bytes());

        // Sample Rate (u32 LE)
        self.buffer.extend_from_slice(&header.sample_rate.to_le_bytes());

        // Frames (u32 LE)
        self.buffer.extend_from_slice(&header.frames.to_le_bytes());

        // Bits Per Sample (u16 LE)
        self.buffer.extend_from_slice(&header.bits_per_sample.to_le_bytes());

        // Negative Mode (u8)
        self.buffer.push(header.negative_mode as u8);

        // Bit Length (u32 LE)
        self.buffer.extend_from_slice(&bit_len.to_le_bytes());

        // packed residuals
        self.buffer.extend_from_slice(bits.as_bytes());

        Ok(self.buffer)
    }

    /// write a complete GIMG file
    pub fn write_image(mut self, header: &ImageHeader, bits: &BitWriter) -> GolombResult<Vec<u8>> {
        if header.bit_len != bits.len() as u64 {
            return Err(GolombError::SizeMismatch {
                what: "bits",
                expected: header.bit_len as usize,
                actual: bits.len(),
            });
        }

        // Magic "GIMG"
        self.buffer.extend_from_slice(&IMAGE_MAGIC);

        // Width, Height (u32 LE)
        self.buffer.extend_from_slice(&header.width.to_le_bytes());
        self.buffer.extend_from_slice(&header.height.to_le_bytes());

        // Predictor (u8)
        self.buffer.push(header.predictor as u8);

        // Golomb m (u32 LE)
        self.buffer.extend_from_slice(&header.m.to_le_bytes());

        // Bit Length (u64 LE)
        self.buffer.extend_from_slice(&header.bit_len.to_le_bytes());

        // packed residuals
        self.buffer.extend_from_slice(bits.as_bytes());

        Ok(self.buffer)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
