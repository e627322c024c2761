//! Minimal fixed-layout PCM16 WAV support (44 byte header)

use log::warn;
use serde::Serialize;

use crate::core::{GolombError, GolombResult, BITS_PER_SAMPLE};
use crate::reader::Cursor;

use super::encoder::check_channels;

pub const WAV_HEADER_SIZE: usize = 44;

/// linear PCM
pub const WAV_FORMAT_PCM: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavHeader {
    pub format_type: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    /// canonical header for `sample_count` interleaved PCM16 samples
    pub fn pcm16(sample_rate: u32, channels: u16, sample_count: usize) -> GolombResult<Self> {
        let too_large = |what: &str| {
            GolombError::UnsupportedFormat(format!("{} does not fit a WAV header", what))
        };

        let block_align = channels
            .checked_mul(BITS_PER_SAMPLE / 8)
            .ok_or_else(|| too_large("block align"))?;
        let byte_rate = sample_rate
            .checked_mul(block_align as u32)
            .ok_or_else(|| too_large("byte rate"))?;
        let data_size = sample_count
            .checked_mul(2)
            .and_then(|n| u32::try_from(n).ok())
            // RIFF chunk size is data_size + 36
            .filter(|n| n.checked_add(36).is_some())
            .ok_or_else(|| too_large("data size"))?;

        Ok(WavHeader {
            format_type: WAV_FORMAT_PCM,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample: BITS_PER_SAMPLE,
            data_size,
        })
    }

    pub fn frames(&self) -> u32 {
        if self.block_align == 0 {
            0
        } else {
            self.data_size / self.block_align as u32
        }
    }
}

/// Parse a 44 byte PCM16 WAV into its header and interleaved samples
pub fn read_wav(data: &[u8]) -> GolombResult<(WavHeader, Vec<i16>)> {
    let mut cursor = Cursor::new(data);

    if cursor.read_bytes(4)? != b"RIFF" {
        return Err(GolombError::UnsupportedFormat("not a RIFF file".to_string()));
    }
    let _overall_size = cursor.read_u32_le()?;
    if cursor.read_bytes(4)? != b"WAVE" {
        return Err(GolombError::UnsupportedFormat("not a WAVE file".to_string()));
    }
    let _fmt_marker = cursor.read_bytes(4)?;
    let _fmt_length = cursor.read_u32_le()?;

    let header = WavHeader {
        format_type: cursor.read_u16_le()?,
        channels: cursor.read_u16_le()?,
        sample_rate: cursor.read_u32_le()?,
        byte_rate: cursor.read_u32_le()?,
        block_align: cursor.read_u16_le()?,
        bits_per_sample: cursor.read_u16_le()?,
        data_size: {
            let _data_marker = cursor.read_bytes(4)?;
            cursor.read_u32_le()?
        },
    };

    if header.format_type != WAV_FORMAT_PCM || header.bits_per_sample != BITS_PER_SAMPLE {
        return Err(GolombError::UnsupportedFormat(format!(
            "only PCM16 supported (format {}, {} bits)",
            header.format_type, header.bits_per_sample
        )));
    }
    check_channels(header.channels)?;

    let body = cursor.rest();
    let mut declared = header.data_size as usize;
    if declared > body.len() {
        warn!(
            "wav data chunk declares {} bytes, only {} present",
            declared,
            body.len()
        );
        declared = body.len();
    }

    let samples = body[..declared]
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();

    Ok((header, samples))
}

/// Serialize interleaved PCM16 samples as a canonical WAV file
pub fn write_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> GolombResult<Vec<u8>> {
    let header = WavHeader::pcm16(sample_rate, channels, samples.len())?;
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + samples.len() * 2);

    // RIFF header
    buffer.extend_from_slice(b"RIFF");
    buffer.extend_from_slice(&(36 + header.data_size).to_le_bytes());
    buffer.extend_from_slice(b"WAVE");

    // fmt chunk
    buffer.extend_from_slice(b"fmt ");
    buffer.extend_from_slice(&16u32.to_le_bytes());
    buffer.extend_from_slice(&header.format_type.to_le_bytes());
    buffer.extend_from_slice(&header.channels.to_le_bytes());
    buffer.extend_from_slice(&header.sample_rate.to_le_bytes());
    buffer.extend_from_slice(&header.byte_rate.to_le_bytes());
    buffer.extend_from_slice(&header.block_align.to_le_bytes());
    buffer.extend_from_slice(&header.bits_per_sample.to_le_bytes());

    // data chunk
    buffer.extend_from_slice(b"data");
    buffer.extend_from_slice(&header.data_size.to_le_bytes());
    for &sample in samples {
        buffer.extend_from_slice(&sample.to_le_bytes());
    }

    Ok(buffer)
}
