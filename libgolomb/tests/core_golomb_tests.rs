//! Golomb coder tests

use libgolomb::core::{BitReader, BitWriter, GolombCoder, GolombError, NegativeMode};
use proptest::prelude::*;

const MODES: [NegativeMode; 2] = [NegativeMode::SignMagnitude, NegativeMode::ZigzagInterleaved];

fn unsigned_bits(coder: &GolombCoder, n: u64) -> String {
    let mut bits = BitWriter::new();
    coder.encode_unsigned(n, &mut bits);
    bits.to_bit_string()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_zero_m_rejected() {
    for mode in MODES {
        assert!(matches!(
            GolombCoder::new(0, mode),
            Err(GolombError::InvalidParameter(_))
        ));
    }
}

// ============================================================================
// Code Shapes
// ============================================================================

#[test]
fn test_unary_degeneracy() {
    let coder = GolombCoder::new(1, NegativeMode::ZigzagInterleaved).unwrap();
    for n in 0..40u64 {
        let bits = unsigned_bits(&coder, n);
        assert_eq!(bits.len() as u64, n + 1);
        assert_eq!(bits.matches('1').count(), 1);
        assert!(bits.ends_with('1'));
    }
}

#[test]
fn test_truncated_binary_m3() {
    // b = 2, cutoff = 1
    let coder = GolombCoder::new(3, NegativeMode::ZigzagInterleaved).unwrap();
    assert_eq!(unsigned_bits(&coder, 0), "10");
    assert_eq!(unsigned_bits(&coder, 1), "110");
    assert_eq!(unsigned_bits(&coder, 2), "111");
    assert_eq!(unsigned_bits(&coder, 3), "010");
    assert_eq!(unsigned_bits(&coder, 5), "0111");
}

#[test]
fn test_truncated_binary_m5() {
    // b = 3, cutoff = 3: r in 0..3 takes 2 bits, r in 3..5 takes 3
    let coder = GolombCoder::new(5, NegativeMode::ZigzagInterleaved).unwrap();
    assert_eq!(unsigned_bits(&coder, 0), "100");
    assert_eq!(unsigned_bits(&coder, 2), "110");
    assert_eq!(unsigned_bits(&coder, 3), "1110");
    assert_eq!(unsigned_bits(&coder, 4), "1111");
    assert_eq!(unsigned_bits(&coder, 7), "0110");
}

#[test]
fn test_truncated_binary_both_branches_decode() {
    for m in [3u64, 5, 6, 7] {
        let coder = GolombCoder::new(m, NegativeMode::ZigzagInterleaved).unwrap();
        let b = coder.b() as usize;
        let mut short_seen = false;
        let mut long_seen = false;

        for r in 0..m {
            let bits = unsigned_bits(&coder, r);
            // quotient is 0, so the prefix is a single one bit
            if r < coder.cutoff() {
                assert_eq!(bits.len(), 1 + b - 1, "m={} r={}", m, r);
                short_seen = true;
            } else {
                assert_eq!(bits.len(), 1 + b, "m={} r={}", m, r);
                long_seen = true;
            }

            let writer = BitWriter::from_bit_str(&bits);
            let mut reader = writer.reader();
            assert_eq!(coder.decode_unsigned(&mut reader).unwrap(), r);
            assert!(!reader.has_more());
        }

        assert!(short_seen && long_seen, "m={} missed a branch", m);
    }
}

#[test]
fn test_power_of_two_has_no_short_codes() {
    let coder = GolombCoder::new(8, NegativeMode::ZigzagInterleaved).unwrap();
    assert_eq!(coder.cutoff(), 0);
    for r in 0..8 {
        assert_eq!(unsigned_bits(&coder, r).len(), 4);
    }
}

#[test]
fn test_sign_magnitude_layout() {
    let coder = GolombCoder::new(4, NegativeMode::SignMagnitude).unwrap();
    assert_eq!(coder.encode_to_bits(-5).to_bit_string(), "10101");
    assert_eq!(coder.encode_to_bits(5).to_bit_string(), "00101");
    assert_eq!(coder.encode_to_bits(0).to_bit_string(), "0100");
}

#[test]
fn test_zigzag_layout() {
    let coder = GolombCoder::new(1, NegativeMode::ZigzagInterleaved).unwrap();
    assert_eq!(coder.encode_to_bits(0).to_bit_string(), "1");
    assert_eq!(coder.encode_to_bits(-1).to_bit_string(), "01");
    assert_eq!(coder.encode_to_bits(1).to_bit_string(), "001");
    assert_eq!(coder.encode_to_bits(-2).to_bit_string(), "0001");
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_roundtrip_representative_range() {
    for m in [1u64, 2, 3, 4, 5, 8, 16] {
        for mode in MODES {
            let coder = GolombCoder::new(m, mode).unwrap();
            for v in -300i64..=300 {
                let bits = coder.encode_to_bits(v);
                let mut reader = bits.reader();
                let (decoded, consumed) = coder.decode(&mut reader).unwrap();
                assert_eq!(decoded, v, "m={} mode={:?}", m, mode);
                assert_eq!(consumed, bits.len(), "m={} mode={:?} v={}", m, mode, v);
                assert_eq!(coder.encoded_len(v), bits.len() as u64);
            }
        }
    }
}

#[test]
fn test_roundtrip_huge_parameters() {
    let values = [0i64, 1, -1, 12345, -98765, i64::MAX, i64::MIN];
    for m in [1u64 << 63, (1 << 63) + 1, u64::MAX - 1, u64::MAX] {
        for mode in MODES {
            let coder = GolombCoder::new(m, mode).unwrap();
            for &v in &values {
                let bits = coder.encode_to_bits(v);
                assert_eq!(coder.encoded_len(v), bits.len() as u64);
                let (decoded, consumed) = coder.decode(&mut bits.reader()).unwrap();
                assert_eq!(decoded, v, "m={} mode={:?}", m, mode);
                assert_eq!(consumed, bits.len());
            }
        }
    }
}

#[test]
fn test_concatenated_stream() {
    let values = [0i64, -1, 5, 10, -300, 7, 0, 0, 65535, -65536];
    for mode in MODES {
        let coder = GolombCoder::new(3, mode).unwrap();

        let mut stream = BitWriter::new();
        for &v in &values {
            stream.append(&coder.encode_to_bits(v));
        }

        let mut reader = stream.reader();
        let mut decoded = Vec::new();
        while reader.has_more() {
            decoded.push(coder.decode(&mut reader).unwrap().0);
        }
        assert_eq!(decoded, values);
    }
}

// ============================================================================
// Failure
// ============================================================================

#[test]
fn test_decode_empty_stream() {
    for mode in MODES {
        let coder = GolombCoder::new(4, mode).unwrap();
        let mut reader = BitReader::new(&[]);
        assert!(matches!(
            coder.decode(&mut reader),
            Err(GolombError::StreamUnderflow(_))
        ));
    }
}

#[test]
fn test_decode_truncated_code() {
    // unary prefix with no terminating one
    let coder = GolombCoder::new(2, NegativeMode::ZigzagInterleaved).unwrap();
    let bits = BitWriter::from_bit_str("0000");
    assert!(matches!(
        coder.decode(&mut bits.reader()),
        Err(GolombError::StreamUnderflow(_))
    ));

    // remainder cut short
    let coder = GolombCoder::new(16, NegativeMode::ZigzagInterleaved).unwrap();
    let bits = BitWriter::from_bit_str("1 01");
    assert!(matches!(
        coder.decode(&mut bits.reader()),
        Err(GolombError::StreamUnderflow(_))
    ));
}

#[test]
fn test_decode_quotient_overflow() {
    // q = 2 with m = u64::MAX does not fit u64
    let coder = GolombCoder::new(u64::MAX, NegativeMode::ZigzagInterleaved).unwrap();
    let mut bits = BitWriter::new();
    bits.write_bits(0b001, 3);
    bits.write_bits(0, 63);
    assert!(matches!(
        coder.decode(&mut bits.reader()),
        Err(GolombError::UnsupportedFormat(_))
    ));
}

// ============================================================================
// Properties
// ============================================================================

fn any_mode() -> impl Strategy<Value = NegativeMode> {
    prop_oneof![
        Just(NegativeMode::SignMagnitude),
        Just(NegativeMode::ZigzagInterleaved)
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip(value in -200_000i64..200_000, m in 1u64..=64, mode in any_mode()) {
        let coder = GolombCoder::new(m, mode).unwrap();
        let bits = coder.encode_to_bits(value);
        let (decoded, consumed) = coder.decode(&mut bits.reader()).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, bits.len());
    }

    #[test]
    fn prop_concatenation(
        values in prop::collection::vec(-5_000i64..5_000, 0..64),
        m in 1u64..=32,
        mode in any_mode()
    ) {
        let coder = GolombCoder::new(m, mode).unwrap();
        let mut stream = BitWriter::new();
        for &v in &values {
            coder.encode(v, &mut stream);
        }

        let mut reader = stream.reader();
        let mut decoded = Vec::with_capacity(values.len());
        while reader.has_more() {
            decoded.push(coder.decode(&mut reader).unwrap().0);
        }
        prop_assert_eq!(decoded, values);
    }
}
