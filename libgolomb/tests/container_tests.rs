//! GBL1 / GIMG layout tests

use libgolomb::core::{ContainerKind, GolombError, NegativeMode};
use libgolomb::{AudioEncoder, ImageEncoder, PixelBuffer, Reader};

#[test]
fn test_gbl1_layout() {
    let gbl = AudioEncoder::new(44100, 1).encode(&[0]).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(b"GBL1");
    expected.extend_from_slice(&1u16.to_le_bytes()); // channels
    expected.extend_from_slice(&44100u32.to_le_bytes()); // sample rate
    expected.extend_from_slice(&1u32.to_le_bytes()); // frames
    expected.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    expected.push(NegativeMode::ZigzagInterleaved as u8);
    expected.extend_from_slice(&1u32.to_le_bytes()); // bit length
    expected.push(0b1000_0000); // residual 0, m = 1

    assert_eq!(gbl, expected);
}

#[test]
fn test_gimg_layout() {
    let image = PixelBuffer::new(1, 1, vec![0]).unwrap();
    let gimg = ImageEncoder::new().encode(&image).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(b"GIMG");
    expected.extend_from_slice(&1u32.to_le_bytes()); // width
    expected.extend_from_slice(&1u32.to_le_bytes()); // height
    expected.push(1); // median
    expected.extend_from_slice(&1u32.to_le_bytes()); // m
    expected.extend_from_slice(&1u64.to_le_bytes()); // bit length
    expected.push(0b1000_0000);

    assert_eq!(gimg, expected);
}

#[test]
fn test_reader_parses_headers() {
    let samples: Vec<i16> = (0..100).map(|i| i * 3).collect();
    let gbl = AudioEncoder::new(16000, 2)
        .with_negative_mode(NegativeMode::SignMagnitude)
        .encode(&samples)
        .unwrap();

    let file = Reader::new().read_audio(&gbl).unwrap();
    assert_eq!(file.header.channels, 2);
    assert_eq!(file.header.sample_rate, 16000);
    assert_eq!(file.header.frames, 50);
    assert_eq!(file.header.bits_per_sample, 16);
    assert_eq!(file.header.negative_mode, NegativeMode::SignMagnitude);
    assert_eq!(file.payload.len(), (file.bit_len as usize).div_ceil(8));
}

#[test]
fn test_detect() {
    assert_eq!(ContainerKind::detect(b"GBL1...."), Some(ContainerKind::Audio));
    assert_eq!(ContainerKind::detect(b"GIMG"), Some(ContainerKind::Image));
    assert_eq!(ContainerKind::detect(b"RIFF"), None);
    assert_eq!(ContainerKind::detect(b"GB"), None);
}

#[test]
fn test_bad_magic_and_truncation() {
    let reader = Reader::new();
    let gbl = AudioEncoder::new(8000, 1).encode(&[1, 2, 3]).unwrap();

    assert!(matches!(
        reader.read_image(&gbl),
        Err(GolombError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        reader.read_audio(&gbl[..12]),
        Err(GolombError::UnsupportedFormat(_))
    ));

    let mut bad_mode = gbl.clone();
    bad_mode[16] = 9;
    assert!(matches!(
        reader.read_audio(&bad_mode),
        Err(GolombError::InvalidParameter(_))
    ));

    let mut wide = gbl.clone();
    wide[14..16].copy_from_slice(&24u16.to_le_bytes());
    assert!(matches!(
        reader.read_audio(&wide),
        Err(GolombError::UnsupportedFormat(_))
    ));

    let mut surround = gbl;
    surround[4..6].copy_from_slice(&6u16.to_le_bytes());
    assert!(matches!(
        reader.read_audio(&surround),
        Err(GolombError::UnsupportedFormat(_))
    ));
}
