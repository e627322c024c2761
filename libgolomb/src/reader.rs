use crate::core::{
    AudioFile, AudioHeader, GolombError, GolombResult, ImageFile, ImageHeader, ImagePredictor,
    NegativeMode, BITS_PER_SAMPLE,
};
use crate::{AUDIO_MAGIC, IMAGE_MAGIC};

/// binary reader for GBL1 / GIMG containers
pub struct Reader;

impl Reader {
    /// new reader
    pub fn new() -> Self {
        Reader
    }

    /// read and parse a GBL1 file
    pub fn read_audio(&self, data: &[u8]) -> GolombResult<AudioFile> {
        let mut cursor = Cursor::new(data);

        // magic
        let magic = cursor.read_bytes(4)?;
        if magic != AUDIO_MAGIC {
            return Err(GolombError::UnsupportedFormat(
                "not a GBL1 file: bad magic".to_string(),
            ));
        }

        let header = self.read_audio_header(&mut cursor)?;
        let bit_len = cursor.read_u32_le()?;

        Ok(AudioFile {
            header,
            bit_len,
            payload: cursor.rest().to_vec(),
        })
    }

    fn read_audio_header(&self, cursor: &mut Cursor) -> GolombResult<AudioHeader> {
        let header = AudioHeader {
            channels: cursor.read_u16_le()?,
            sample_rate: cursor.read_u32_le()?,
            frames: cursor.read_u32_le()?,
            bits_per_sample: cursor.read_u16_le()?,
            negative_mode: NegativeMode::try_from(cursor.read_u8()?)?,
        };

        if header.channels != 1 && header.channels != 2 {
            return Err(GolombError::UnsupportedFormat(format!(
                "GBL1 with {} channels",
                header.channels
            )));
        }
        if header.bits_per_sample != BITS_PER_SAMPLE {
            return Err(GolombError::UnsupportedFormat(format!(
                "GBL1 with {} bits per sample",
                header.bits_per_sample
            )));
        }

        Ok(header)
    }

    /// read and parse a GIMG file
    pub fn read_image(&self, data: &[u8]) -> GolombResult<ImageFile> {
        let mut cursor = Cursor::new(data);

        // magic
        let magic = cursor.read_bytes(4)?;
        if magic != IMAGE_MAGIC {
            return Err(GolombError::UnsupportedFormat(
                "not a GIMG file: bad magic".to_string(),
            ));
        }

        let header = ImageHeader {
            width: cursor.read_u32_le()?,
            height: cursor.read_u32_le()?,
            predictor: ImagePredictor::try_from(cursor.read_u8()?)?,
            m: cursor.read_u32_le()?,
            bit_len: cursor.read_u64_le()?,
        };

        Ok(ImageFile {
            header,
            payload: cursor.rest().to_vec(),
        })
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

/// little endian byte cursor for fixed headers
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    pub(crate) fn read_bytes(&mut self, count: usize) -> GolombResult<Vec<u8>> {
        if self.pos + count > self.data.len() {
            return Err(GolombError::UnsupportedFormat(
                "unexpected end of header".to_string(),
            ));
        }
        let bytes = self.data[self.pos..self.pos + count].to_vec();
        self.pos += count;
        Ok(bytes)
    }

    /// everything after the cursor
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub(crate) fn read_u8(&mut self) -> GolombResult<u8> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub(crate) fn read_u16_le(&mut self) -> GolombResult<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn read_u32_le(&mut self) -> GolombResult<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub(crate) fn read_u64_le(&mut self) -> GolombResult<u64> {
        let bytes = self.read_bytes(8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }
}
