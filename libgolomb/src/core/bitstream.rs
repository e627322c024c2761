// Packed MSB-first bit buffers

use super::types::{GolombError, GolombResult};

/// Append-only bit writer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitWriter {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) {
        let bit_pos = self.bit_len % 8;
        if bit_pos == 0 {
            self.bytes.push(0);
        }
        if bit {
            // just pushed or partially filled, never empty here
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - bit_pos);
        }
        self.bit_len += 1;
    }

    /// Writes the low `count` bits of `value`, most significant first
    pub fn write_bits(&mut self, value: u64, count: u32) {
        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    /// Appends every bit of another writer
    pub fn append(&mut self, other: &BitWriter) {
        if self.bit_len % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.bit_len += other.bit_len;
            return;
        }
        let mut reader = other.reader();
        while let Ok(bit) = reader.read_bit() {
            self.write_bit(bit);
        }
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Packed bytes, final byte zero padded
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn reader(&self) -> BitReader<'_> {
        BitReader {
            bytes: &self.bytes,
            bit_len: self.bit_len,
            pos: 0,
        }
    }

    /// Renders as a string of '0' / '1'
    pub fn to_bit_string(&self) -> String {
        let mut reader = self.reader();
        let mut out = String::with_capacity(self.bit_len);
        while let Ok(bit) = reader.read_bit() {
            out.push(if bit { '1' } else { '0' });
        }
        out
    }

    /// Parses '0' / '1' characters, skipping anything else
    pub fn from_bit_str(s: &str) -> Self {
        let mut writer = BitWriter::new();
        for c in s.chars() {
            match c {
                '0' => writer.write_bit(false),
                '1' => writer.write_bit(true),
                _ => {}
            }
        }
        writer
    }
}

/// Forward-only cursor over a packed bit sequence
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: usize,
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Reader over every bit of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReader {
            bytes,
            bit_len: bytes.len() * 8,
            pos: 0,
        }
    }

    /// Reader over the first `bit_len` bits of `bytes`
    pub fn with_bit_len(bytes: &'a [u8], bit_len: usize) -> GolombResult<Self> {
        let available = bytes.len() * 8;
        if bit_len > available {
            return Err(GolombError::StreamUnderflow(format!(
                "payload holds {} bits, {} declared",
                available, bit_len
            )));
        }
        Ok(BitReader {
            bytes,
            bit_len,
            pos: 0,
        })
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.bit_len
    }

    pub fn read_bit(&mut self) -> GolombResult<bool> {
        if self.pos >= self.bit_len {
            return Err(GolombError::StreamUnderflow(format!(
                "read past end of {} bits",
                self.bit_len
            )));
        }

        let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
        self.pos += 1;

        Ok(bit == 1)
    }

    /// Accumulates `count` bits MSB-first
    pub fn read_bits(&mut self, count: u32) -> GolombResult<u64> {
        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u64;
        }
        Ok(value)
    }

    /// Bits consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bit_len - self.pos
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_is_zero() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        assert_eq!(writer.len(), 3);
        assert_eq!(writer.as_bytes(), &[0b1010_0000]);
    }

    #[test]
    fn test_append_unaligned() {
        let mut a = BitWriter::from_bit_str("101");
        let b = BitWriter::from_bit_str("0011 1");
        a.append(&b);
        assert_eq!(a.to_bit_string(), "10100111");

        let mut c = BitWriter::new();
        c.append(&a);
        assert_eq!(c, a);
    }
}
