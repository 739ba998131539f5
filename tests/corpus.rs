//! Test corpus: transform properties over generated patterns, plus
//! malformed and hostile inputs.

use zenpbm::*;

fn checkerboard(w: usize, h: usize, encoding: Encoding) -> Bitmap {
    let samples = (0..w * h).map(|i| (i % w + i / w) % 2 == 0).collect();
    Bitmap::from_samples(w, h, samples, encoding).unwrap()
}

fn noise_pattern(w: usize, h: usize, max_value: u8, encoding: Encoding) -> Graymap {
    let mut state: u32 = 0xDEAD_BEEF;
    let samples = (0..w * h)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % (u32::from(max_value) + 1)) as u8
        })
        .collect();
    Graymap::from_samples(w, h, samples, max_value, encoding).unwrap()
}

fn test_images() -> Vec<Image> {
    vec![
        checkerboard(1, 1, Encoding::Plain).into(),
        checkerboard(9, 4, Encoding::Raw).into(),
        checkerboard(4, 9, Encoding::Plain).into(),
        noise_pattern(1, 7, 255, Encoding::Raw).into(),
        noise_pattern(16, 12, 255, Encoding::Raw).into(),
        noise_pattern(5, 3, 31, Encoding::Plain).into(),
    ]
}

fn sample(image: &Image, x: usize, y: usize) -> u8 {
    match image {
        Image::Bitmap(b) => u8::from(b.at(x, y)),
        Image::Graymap(g) => g.at(x, y),
    }
}

// ── transform properties ─────────────────────────────────────────────

#[test]
fn flip_flop_invert_are_involutions() {
    for original in test_images() {
        let mut image = original.clone();
        image.flip();
        image.flip();
        assert_eq!(image, original, "flip twice on {:?}", original.size());

        image.flop();
        image.flop();
        assert_eq!(image, original, "flop twice on {:?}", original.size());

        image.invert();
        image.invert();
        assert_eq!(image, original, "invert twice on {:?}", original.size());
    }
}

#[test]
fn flip_mirrors_columns_and_flop_mirrors_rows() {
    for original in test_images() {
        let (w, h) = original.size();

        let mut flipped = original.clone();
        flipped.flip();
        let mut flopped = original.clone();
        flopped.flop();

        for y in 0..h {
            for x in 0..w {
                assert_eq!(sample(&flipped, x, y), sample(&original, w - 1 - x, y));
                assert_eq!(sample(&flopped, x, y), sample(&original, x, h - 1 - y));
            }
        }
    }
}

#[test]
fn rotation_maps_coordinates() {
    for original in test_images() {
        let (w, h) = original.size();
        let mut rotated = original.clone();
        rotated.rotate();
        assert_eq!(rotated.size(), (h, w));

        for y in 0..w {
            for x in 0..h {
                assert_eq!(
                    sample(&rotated, x, y),
                    sample(&original, y, h - 1 - x),
                    "rotated ({x}, {y}) of {w}x{h}"
                );
            }
        }
    }
}

#[test]
fn four_rotations_restore() {
    for original in test_images() {
        let mut image = original.clone();
        for _ in 0..4 {
            image.rotate();
        }
        assert_eq!(image, original);
    }
}

#[test]
fn rotate_small_graymap() {
    let mut g = Graymap::from_samples(3, 2, vec![1, 2, 3, 4, 5, 6], 9, Encoding::Plain).unwrap();
    g.rotate();
    assert_eq!(g.size(), (2, 3));
    assert_eq!(g.samples(), &[4, 1, 5, 2, 6, 3]);
}

#[test]
fn greymap_invert_uses_max_value() {
    let mut g = Graymap::from_samples(3, 1, vec![0, 7, 31], 31, Encoding::Raw).unwrap();
    g.invert();
    assert_eq!(g.samples(), &[31, 24, 0]);
}

#[test]
fn conversion_threshold() {
    let g = Graymap::from_samples(4, 1, vec![128, 127, 0, 255], 255, Encoding::Raw).unwrap();
    let b = g.to_bitmap();
    assert_eq!(b.samples(), &[true, false, false, true]);
    // source is untouched
    assert_eq!(g.samples(), &[128, 127, 0, 255]);

    // odd max: 15 / 2 == 7, so 7 stays unset and 8 is set
    let g = Graymap::from_samples(2, 1, vec![7, 8], 15, Encoding::Raw).unwrap();
    assert_eq!(g.to_bitmap().samples(), &[false, true]);
}

// ── accessors ────────────────────────────────────────────────────────

#[test]
fn out_of_bounds_reads_are_zero() {
    let b = checkerboard(3, 2, Encoding::Raw);
    assert!(b.at(0, 0));
    assert!(!b.at(3, 0));
    assert!(!b.at(0, 2));
    assert!(!b.at(usize::MAX, usize::MAX));

    let g = Graymap::from_samples(2, 2, vec![9, 9, 9, 9], 9, Encoding::Raw).unwrap();
    assert_eq!(g.at(2, 0), 0);
    assert_eq!(g.at(0, 2), 0);
}

#[test]
fn out_of_bounds_writes_fail() {
    let mut b = checkerboard(3, 2, Encoding::Raw);
    let err = b.set(3, 0, true).unwrap_err();
    assert!(matches!(
        err,
        PnmError::OutOfBounds {
            x: 3,
            y: 0,
            width: 3,
            height: 2
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Index);

    b.set(2, 1, false).unwrap();
    assert!(!b.at(2, 1));
}

#[test]
fn graymap_set_respects_max_value() {
    let mut g = Graymap::new(2, 2, 100, Encoding::Plain).unwrap();
    g.set(1, 1, 100).unwrap();
    assert_eq!(g.at(1, 1), 100);

    let err = g.set(0, 0, 101).unwrap_err();
    assert!(matches!(
        err,
        PnmError::SampleOutOfRange {
            value: 101,
            max_value: 100
        }
    ));
}

#[test]
fn set_max_value_clamps() {
    let mut g = Graymap::from_samples(3, 1, vec![10, 150, 255], 255, Encoding::Raw).unwrap();
    g.set_max_value(100).unwrap();
    assert_eq!(g.max_value(), 100);
    assert_eq!(g.samples(), &[10, 100, 100]);
    assert!(g.set_max_value(0).is_err());
}

#[test]
fn set_format_checks_kind() {
    let mut b = checkerboard(2, 2, Encoding::Raw);
    b.set_format(PnmFormat::PlainBitmap).unwrap();
    assert_eq!(b.encoding(), Encoding::Plain);
    assert!(matches!(
        b.set_format(PnmFormat::RawGraymap),
        Err(PnmError::WrongImageKind { .. })
    ));

    let mut g = noise_pattern(2, 2, 255, Encoding::Plain);
    g.set_format(PnmFormat::from_magic(b"P5").unwrap()).unwrap();
    assert_eq!(g.format(), PnmFormat::RawGraymap);
    assert!(g.set_format(PnmFormat::RawBitmap).is_err());
}

#[test]
fn zero_dimensions_are_rejected() {
    for err in [
        Bitmap::new(0, 3, Encoding::Plain).unwrap_err(),
        Bitmap::from_samples(3, 0, vec![], Encoding::Raw).unwrap_err(),
        Graymap::new(0, 2, 255, Encoding::Raw).unwrap_err(),
        Graymap::from_samples(3, 0, vec![], 255, Encoding::Plain).unwrap_err(),
    ] {
        assert!(
            matches!(err, PnmError::InvalidHeader(ref m) if m.contains("dimensions must be positive")),
            "{err}"
        );
    }
}

// ── malformed input ──────────────────────────────────────────────────

fn format_error(data: &[u8]) -> PnmError {
    let err = decode(data).unwrap_err();
    assert!(err.is_format_error(), "{err:?} should be a format error");
    err
}

#[test]
fn malformed_headers() {
    assert!(matches!(format_error(b""), PnmError::UnexpectedEof));
    assert!(matches!(format_error(b"P6\n1 1\n255\n\0\0\0"), PnmError::UnrecognizedFormat(_)));
    assert!(matches!(format_error(b"P1x\n1 1\n1\n"), PnmError::UnrecognizedFormat(_)));
    assert!(matches!(format_error(b"P1\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(format_error(b"P1\n2\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(format_error(b"P1\n2 x\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(format_error(b"P1\n-2 3\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(format_error(b"P1\n0 3\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(format_error(b"P2\n1 1\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(format_error(b"P2\n1 1\n0\n0\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(format_error(b"P2\n1 1\n256\n0\n"), PnmError::InvalidHeader(_)));
    assert!(matches!(
        format_error(b"P2\n1 1\n99999999999999999999999\n0\n"),
        PnmError::InvalidHeader(_)
    ));
}

#[test]
fn malformed_samples() {
    assert!(matches!(format_error(b"P1\n1 2\n1 2\n"), PnmError::InvalidData(_)));
    assert!(matches!(format_error(b"P1\n1 2\n10\n"), PnmError::InvalidData(_)));
    assert!(matches!(format_error(b"P1\n2 2\n1 0\n1\n"), PnmError::UnexpectedEof));
    assert!(matches!(format_error(b"P2\n2 1\n255\n1 abc\n"), PnmError::InvalidData(_)));
    assert!(matches!(format_error(b"P2\n2 1\n100\n1 101\n"), PnmError::InvalidData(_)));
    assert!(matches!(format_error(b"P2\n2 1\n255\n7\n"), PnmError::UnexpectedEof));
    assert!(matches!(format_error(b"P4\n2 9\n\xff\x80\xff"), PnmError::UnexpectedEof));
    assert!(matches!(format_error(b"P5\n2 2\n255\n\x01\x02\x03"), PnmError::UnexpectedEof));
    assert!(matches!(format_error(b"P5\n2 1\n200\n\x01\xc9"), PnmError::InvalidData(_)));
}

#[test]
fn error_messages_name_the_line() {
    let err = decode(b"P2\n2 2\n255\n1 2\n3 x\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 5"), "{msg}");
    assert!(msg.contains("\"x\""), "{msg}");
}

#[test]
fn kind_mismatch_is_reported() {
    let err = DecodeRequest::new(b"P2\n1 1\n255\n0\n")
        .decode_bitmap()
        .unwrap_err();
    assert!(matches!(
        err,
        PnmError::WrongImageKind {
            expected: "bitmap",
            found: "greymap"
        }
    ));
}

// ── limits ───────────────────────────────────────────────────────────

#[test]
fn limits_reject_large() {
    let encoded = encode(&noise_pattern(3, 2, 255, Encoding::Raw).into());

    let limits = Limits {
        max_pixels: Some(5),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result.unwrap_err() {
        PnmError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_width: Some(3),
        max_height: Some(2),
        max_memory_bytes: Some(6),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&encoded)
            .with_limits(&limits)
            .decode()
            .is_ok()
    );
}

#[test]
fn huge_declared_dimensions_fail_cleanly() {
    assert!(decode(b"P1\n100000 100000\n1 0\n").is_err());
    assert!(decode(b"P5\n100000 100000\n255\n\0").is_err());
    assert!(decode(b"P4\n18446744073709551615 18446744073709551615\n\0").is_err());
}
