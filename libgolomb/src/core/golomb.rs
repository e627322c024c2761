// Golomb coding with a truncated-binary remainder

use super::bitstream::{BitReader, BitWriter};
use super::types::{GolombError, GolombResult, NegativeMode};

/// Golomb coder for a fixed divisor `m` and negative-number mode
///
/// A value `n` is split into `q = n / m` and `r = n % m`. The quotient goes
/// out as `q` zero bits closed by a one bit. The remainder uses a truncated
/// binary code: with `b = ceil(log2(m))` and `cutoff = 2^b - m`, remainders
/// below `cutoff` take `b - 1` bits and the rest take `b` bits (as
/// `r + cutoff`). For `m == 1` the code is pure unary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GolombCoder {
    m: u64,
    b: u32,
    cutoff: u64,
    negative_mode: NegativeMode,
}

impl GolombCoder {
    pub fn new(m: u64, negative_mode: NegativeMode) -> GolombResult<Self> {
        if m == 0 {
            return Err(GolombError::InvalidParameter(
                "golomb parameter m must be >= 1".to_string(),
            ));
        }

        // ceil(log2(m)), 0 for m == 1, 64 above 2^63
        let b = u64::BITS - (m - 1).leading_zeros();
        // 2^b may be 2^64, so widen
        let cutoff = if m == 1 {
            0
        } else {
            ((1u128 << b) - m as u128) as u64
        };

        Ok(GolombCoder {
            m,
            b,
            cutoff,
            negative_mode,
        })
    }

    pub fn m(&self) -> u64 {
        self.m
    }

    pub fn b(&self) -> u32 {
        self.b
    }

    pub fn cutoff(&self) -> u64 {
        self.cutoff
    }

    pub fn negative_mode(&self) -> NegativeMode {
        self.negative_mode
    }

    pub fn encode_unsigned(&self, n: u64, bits: &mut BitWriter) {
        let q = n / self.m;
        for _ in 0..q {
            bits.write_bit(false);
        }
        bits.write_bit(true);

        if self.m == 1 {
            return;
        }

        let r = n % self.m;
        if r < self.cutoff {
            bits.write_bits(r, self.b - 1);
        } else {
            bits.write_bits(r + self.cutoff, self.b);
        }
    }

    pub fn decode_unsigned(&self, bits: &mut BitReader) -> GolombResult<u64> {
        let mut q = 0u64;
        while !bits.read_bit()? {
            q += 1;
        }

        let r = if self.b == 0 {
            0
        } else {
            let x = bits.read_bits(self.b - 1)?;
            if x < self.cutoff {
                x
            } else {
                let next = bits.read_bit()? as u64;
                ((x << 1) | next) - self.cutoff
            }
        };

        q.checked_mul(self.m)
            .and_then(|v| v.checked_add(r))
            .ok_or_else(|| {
                GolombError::UnsupportedFormat(format!(
                    "code with quotient {} overflows u64 for m={}",
                    q, self.m
                ))
            })
    }

    /// Writes a signed value using the configured negative mode
    pub fn encode(&self, value: i64, bits: &mut BitWriter) {
        match self.negative_mode {
            NegativeMode::SignMagnitude => {
                bits.write_bit(value < 0);
                self.encode_unsigned(value.unsigned_abs(), bits);
            }
            NegativeMode::ZigzagInterleaved => {
                self.encode_unsigned(zigzag_encode(value), bits);
            }
        }
    }

    /// Reads one signed value, returning it with the number of bits consumed
    pub fn decode(&self, bits: &mut BitReader) -> GolombResult<(i64, usize)> {
        let start = bits.position();

        let value = match self.negative_mode {
            NegativeMode::SignMagnitude => {
                let negative = bits.read_bit()?;
                let magnitude = self.decode_unsigned(bits)?;
                if negative {
                    (magnitude as i64).wrapping_neg()
                } else {
                    magnitude as i64
                }
            }
            NegativeMode::ZigzagInterleaved => zigzag_decode(self.decode_unsigned(bits)?),
        };

        let consumed = bits.position() - start;
        if consumed == 0 {
            return Err(GolombError::StreamUnderflow(
                "code consumed zero bits".to_string(),
            ));
        }

        Ok((value, consumed))
    }

    /// Standalone bitstring for one value
    pub fn encode_to_bits(&self, value: i64) -> BitWriter {
        let mut bits = BitWriter::new();
        self.encode(value, &mut bits);
        bits
    }

    /// Length in bits of the code for `n`, without writing it
    pub fn unsigned_len(&self, n: u64) -> u64 {
        let unary = n / self.m + 1;
        if self.m == 1 {
            return unary;
        }
        let r = n % self.m;
        if r < self.cutoff {
            unary + (self.b - 1) as u64
        } else {
            unary + self.b as u64
        }
    }

    /// Length in bits of the code for a signed value
    pub fn encoded_len(&self, value: i64) -> u64 {
        match self.negative_mode {
            NegativeMode::SignMagnitude => 1 + self.unsigned_len(value.unsigned_abs()),
            NegativeMode::ZigzagInterleaved => self.unsigned_len(zigzag_encode(value)),
        }
    }
}

/// 0 → 0, -1 → 1, 1 → 2, -2 → 3, 2 → 4, ...
#[inline]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// 0 → 0, 1 → -1, 2 → 1, 3 → -2, 4 → 2, ...
#[inline]
pub fn zigzag_decode(z: u64) -> i64 {
    ((z >> 1) as i64) ^ -((z & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_parameters() {
        let cases = [(1, 0, 0), (2, 1, 0), (3, 2, 1), (4, 2, 0), (5, 3, 3), (7, 3, 1), (8, 3, 0)];
        for (m, b, cutoff) in cases {
            let coder = GolombCoder::new(m, NegativeMode::ZigzagInterleaved).unwrap();
            assert_eq!(coder.b(), b, "b for m={}", m);
            assert_eq!(coder.cutoff(), cutoff, "cutoff for m={}", m);
        }
    }

    #[test]
    fn test_derived_parameters_above_two_pow_63() {
        let coder = GolombCoder::new((1 << 63) + 1, NegativeMode::ZigzagInterleaved).unwrap();
        assert_eq!(coder.b(), 64);
        assert_eq!(coder.cutoff(), (1 << 63) - 1);

        let coder = GolombCoder::new(u64::MAX, NegativeMode::ZigzagInterleaved).unwrap();
        assert_eq!(coder.b(), 64);
        assert_eq!(coder.cutoff(), 1);
    }

    #[test]
    fn test_zigzag_order() {
        let mapped: Vec<u64> = [0, -1, 1, -2, 2].iter().map(|&v| zigzag_encode(v)).collect();
        assert_eq!(mapped, vec![0, 1, 2, 3, 4]);
        assert_eq!(zigzag_decode(zigzag_encode(i64::MIN)), i64::MIN);
    }
}
