//! Bit-string front end for a single golomb coder

use anyhow::{bail, Context, Result};
use libgolomb::{BitWriter, GolombCoder, NegativeMode};

/// One value and its code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedValue {
    pub value: i64,
    pub bits: String,
}

/// One value read back from a bit string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedValue {
    pub value: i64,
    pub consumed: usize,
}

/// Accepts sign / sign-magnitude / sign_magnitude and
/// interleave / interleaved / zigzag, case-insensitively
pub fn parse_mode(s: &str) -> Result<NegativeMode> {
    match s.to_lowercase().as_str() {
        "sign" | "sign-magnitude" | "sign_magnitude" => Ok(NegativeMode::SignMagnitude),
        "interleave" | "interleaved" | "zigzag" => Ok(NegativeMode::ZigzagInterleaved),
        _ => bail!("Unknown mode '{}'. Use 'sign' or 'interleave'", s),
    }
}

/// Code each value on its own and as one concatenated stream
pub fn encode_values(
    m: u64,
    mode: NegativeMode,
    values: &[i64],
) -> Result<(Vec<CodedValue>, BitWriter)> {
    let coder = GolombCoder::new(m, mode)?;
    let mut stream = BitWriter::new();
    let mut coded = Vec::with_capacity(values.len());

    for &value in values {
        let bits = coder.encode_to_bits(value);
        stream.append(&bits);
        coded.push(CodedValue {
            value,
            bits: bits.to_bit_string(),
        });
    }

    Ok((coded, stream))
}

/// Decode values until the string runs out
///
/// Characters other than '0' and '1' are ignored. A trailing partial code is
/// an error.
pub fn decode_bit_string(m: u64, mode: NegativeMode, bits: &str) -> Result<Vec<DecodedValue>> {
    let coder = GolombCoder::new(m, mode)?;
    let stream = BitWriter::from_bit_str(bits);
    if stream.is_empty() {
        bail!("Bit string contains no '0'/'1' characters");
    }

    let mut reader = stream.reader();
    let mut out = Vec::new();
    while reader.has_more() {
        let pos = reader.position();
        let (value, consumed) = coder
            .decode(&mut reader)
            .with_context(|| format!("Decoding failed at bit {}", pos))?;
        out.push(DecodedValue { value, consumed });
    }

    Ok(out)
}
