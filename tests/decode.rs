//! Scenario tests through the public decode API.

use zenqoi::*;

const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

fn qoi(width: u32, height: u32, channels: u8, colorspace: u8, body: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(22 + body.len());
    data.extend_from_slice(b"qoif");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(channels);
    data.push(colorspace);
    data.extend_from_slice(body);
    data.extend_from_slice(&END_MARKER);
    data
}

/// 2x2: opaque red, run of one, then a half-transparent blue via RGBA and
/// a DIFF step from it.
fn two_by_two(channels: u8) -> Vec<u8> {
    qoi(
        2,
        2,
        channels,
        0,
        &[
            0xfe, 255, 0, 0, // RGB red
            0xc0, // RUN 1
            0xff, 0, 0, 255, 128, // RGBA blue, alpha 128
            0x40 | 0b11_10_10, // DIFF r+1
        ],
    )
}

// ── Concrete scenarios ──────────────────────────────────────────────

#[test]
fn single_rgb_pixel_native() {
    let data = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30]);
    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.width, 1);
    assert_eq!(decoded.height, 1);
    assert_eq!(decoded.channels, Channels::Rgb);
    assert_eq!(decoded.colorspace, ColorSpace::Srgb);
    assert_eq!(decoded.layout, PixelLayout::Rgb8);
    assert_eq!(decoded.pixels(), &[10, 20, 30]);
    assert!(decoded.warning().is_none());
}

#[test]
fn single_rgb_pixel_rgba_mode() {
    let data = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30]);
    let decoded = decode_rgba(&data).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Rgba8);
    assert_eq!(decoded.pixels(), &[10, 20, 30, 255]);
    assert!(decoded.warning().is_none());
}

#[test]
fn buffer_of_21_bytes_is_too_short() {
    let data = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30]);
    match decode(&data[..21]) {
        Err(QoiError::BufferTooShort { len }) => assert_eq!(len, 21),
        other => panic!("expected BufferTooShort, got {other:?}"),
    }
    assert!(matches!(
        decode(&[]),
        Err(QoiError::BufferTooShort { len: 0 })
    ));
}

#[test]
fn bad_magic_rejected_regardless_of_content() {
    let mut data = two_by_two(4);
    data[0..4].copy_from_slice(b"QOIF");
    assert!(matches!(
        decode(&data),
        Err(QoiError::InvalidHeader(HeaderError::BadMagic(_)))
    ));
    // Garbage after a bad magic makes no difference.
    let garbage = [0x42u8; 64];
    assert!(matches!(
        decode(&garbage),
        Err(QoiError::InvalidHeader(HeaderError::BadMagic(_)))
    ));
}

#[test]
fn bad_channels_and_colorspace_rejected() {
    let data = qoi(1, 1, 2, 0, &[0xfe, 1, 2, 3]);
    assert!(matches!(
        decode(&data),
        Err(QoiError::InvalidHeader(HeaderError::BadChannels(2)))
    ));
    let data = qoi(1, 1, 3, 7, &[0xfe, 1, 2, 3]);
    assert!(matches!(
        decode(&data),
        Err(QoiError::InvalidHeader(HeaderError::BadColorSpace(7)))
    ));
}

// ── Output modes ────────────────────────────────────────────────────

#[test]
fn rgba_image_native_and_rgba_modes_agree() {
    let data = two_by_two(4);
    let expected = [255, 0, 0, 255, 255, 0, 0, 255, 0, 0, 255, 128, 1, 0, 255, 128];
    assert_eq!(decode(&data).unwrap().pixels(), &expected);
    assert_eq!(decode_rgba(&data).unwrap().pixels(), &expected);
}

#[test]
fn rgb_image_ignores_stream_alpha() {
    // The stream sets alpha to 128 even though the header says 3 channels.
    let data = two_by_two(3);

    let native = decode(&data).unwrap();
    assert_eq!(native.layout, PixelLayout::Rgb8);
    assert_eq!(native.pixels(), &[255, 0, 0, 255, 0, 0, 0, 0, 255, 1, 0, 255]);

    let rgba = decode_rgba(&data).unwrap();
    assert_eq!(rgba.layout, PixelLayout::Rgba8);
    assert_eq!(
        rgba.pixels(),
        &[255, 0, 0, 255, 255, 0, 0, 255, 0, 0, 255, 255, 1, 0, 255, 255]
    );
}

#[test]
fn linear_colorspace_is_reported_not_applied() {
    let data = qoi(1, 1, 3, 1, &[0xfe, 10, 20, 30]);
    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.colorspace, ColorSpace::Linear);
    assert_eq!(decoded.pixels(), &[10, 20, 30]);
}

// ── Purity ──────────────────────────────────────────────────────────

#[test]
fn decoding_is_deterministic_across_calls() {
    // (9,9,9,9) lands in slot 42; a later decode must not see it there.
    let first = qoi(1, 1, 4, 0, &[0xff, 9, 9, 9, 9]);
    let lookup = qoi(1, 1, 4, 0, &[42]);
    let before = decode(&lookup).unwrap();
    decode(&first).unwrap();
    let after = decode(&lookup).unwrap();
    assert_eq!(before.pixels(), after.pixels());
    assert_eq!(after.pixels(), &[0, 0, 0, 0]);

    let data = two_by_two(4);
    assert_eq!(decode(&data).unwrap().pixels(), decode(&data).unwrap().pixels());
}

#[test]
fn decode_into_reuses_buffer() {
    let mut buf = vec![7u8; 100];
    let data = two_by_two(3);
    let info = DecodeRequest::new(&data).decode_into(&mut buf).unwrap();
    assert_eq!(info.header.width, 2);
    assert_eq!(info.layout, PixelLayout::Rgb8);
    assert!(info.warning.is_none());
    assert_eq!(buf, decode(&data).unwrap().into_pixels());

    let single = qoi(1, 1, 3, 0, &[0xfe, 1, 2, 3]);
    DecodeRequest::new(&single).decode_into(&mut buf).unwrap();
    assert_eq!(buf, [1, 2, 3]);
}

#[test]
fn decode_into_leaves_no_partial_raster_on_error() {
    let mut buf = vec![7u8; 100];

    // Two pixels decode before the third opcode is missing.
    let truncated = qoi(3, 1, 3, 0, &[0xfe, 1, 2, 3, 0xc0]);
    assert!(matches!(
        DecodeRequest::new(&truncated).decode_into(&mut buf),
        Err(QoiError::TruncatedStream { offset: 19 })
    ));
    assert!(buf.is_empty());

    // Whole raster decoded, then rejected by the strict end check.
    buf.extend_from_slice(&[7; 10]);
    let trailing = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30, 0xc0]);
    assert!(matches!(
        DecodeRequest::new(&trailing)
            .with_end_check(EndCheck::Strict)
            .decode_into(&mut buf),
        Err(QoiError::LengthMismatch { .. })
    ));
    assert!(buf.is_empty());

    // Header errors clear it too.
    buf.push(7);
    assert!(DecodeRequest::new(&[0u8; 30]).decode_into(&mut buf).is_err());
    assert!(buf.is_empty());
}

// ── Stream integrity ────────────────────────────────────────────────

#[test]
fn truncated_operand_fails() {
    // RGBA op with only 3 of its 4 operand bytes before the end marker.
    let data = qoi(1, 1, 4, 0, &[0xff, 1, 2, 3]);
    match decode(&data) {
        Err(QoiError::TruncatedStream { offset }) => assert_eq!(offset, 14),
        other => panic!("expected TruncatedStream, got {other:?}"),
    }
}

#[test]
fn too_few_opcodes_fails() {
    let data = qoi(3, 1, 3, 0, &[0xfe, 1, 2, 3, 0xc0]);
    assert!(matches!(
        decode(&data),
        Err(QoiError::TruncatedStream { offset: 19 })
    ));
}

#[test]
fn missing_end_marker_is_truncation_not_out_of_bounds() {
    // Body reaches the buffer end; the last 8 bytes are treated as the marker.
    let mut data = qoi(2, 1, 3, 0, &[0xfe, 1, 2, 3, 0xfe, 4, 5, 6]);
    data.truncate(data.len() - 8);
    assert!(matches!(
        decode(&data),
        Err(QoiError::TruncatedStream { .. })
    ));
}

#[test]
fn trailing_bytes_are_a_warning() {
    let data = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30, 0xc0, 0xc0]);
    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.pixels(), &[10, 20, 30]);
    assert_eq!(
        decoded.warning(),
        Some(&DecodeWarning::LengthMismatch {
            expected: data.len() - 8,
            actual: 18,
        })
    );
}

#[test]
fn trailing_bytes_fail_in_strict_mode() {
    let data = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30, 0xc0]);
    let result = DecodeRequest::new(&data)
        .with_end_check(EndCheck::Strict)
        .decode();
    match result {
        Err(QoiError::LengthMismatch { expected, actual }) => {
            assert_eq!(expected, 19);
            assert_eq!(actual, 18);
        }
        other => panic!("expected LengthMismatch, got {other:?}"),
    }

    let exact = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30]);
    assert!(DecodeRequest::new(&exact)
        .with_end_check(EndCheck::Strict)
        .decode()
        .is_ok());
}

#[test]
fn end_marker_content_is_not_interpreted() {
    let mut data = qoi(1, 1, 3, 0, &[0xfe, 10, 20, 30]);
    let len = data.len();
    data[len - 8..].copy_from_slice(&[0xff; 8]);
    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.pixels(), &[10, 20, 30]);
    assert!(decoded.warning().is_none());
}

#[test]
fn empty_image() {
    let data = qoi(0, 0, 4, 0, &[]);
    let decoded = decode(&data).unwrap();
    assert!(decoded.pixels().is_empty());
    assert!(decoded.warning().is_none());
}

// ── Resource limits ─────────────────────────────────────────────────

#[test]
fn huge_header_with_tiny_stream_fails_before_allocating() {
    let data = qoi(u32::MAX, u32::MAX, 4, 0, &[0xc0 | 61]);
    assert!(matches!(
        decode(&data),
        Err(QoiError::TruncatedStream { .. })
    ));
}

#[test]
fn limits_reject_large() {
    let data = two_by_two(4);
    let limits = Limits {
        max_pixels: Some(3),
        ..Default::default()
    };
    let result = DecodeRequest::new(&data).with_limits(&limits).decode();
    match result.unwrap_err() {
        QoiError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn memory_limit_depends_on_output_mode() {
    // 4 RGB pixels: 12 bytes native, 16 bytes as RGBA.
    let data = two_by_two(3);
    let limits = Limits {
        max_memory_bytes: Some(12),
        ..Default::default()
    };
    assert!(DecodeRequest::new(&data).with_limits(&limits).decode().is_ok());
    assert!(matches!(
        DecodeRequest::new(&data)
            .with_limits(&limits)
            .with_output_mode(OutputMode::Rgba)
            .decode(),
        Err(QoiError::LimitExceeded(_))
    ));
}

// ── Header only ─────────────────────────────────────────────────────

#[test]
fn header_only_parse_matches_decode() {
    let data = two_by_two(4);
    let header = Header::from_bytes(&data).unwrap();
    assert_eq!(header.width, 2);
    assert_eq!(header.height, 2);
    assert_eq!(header.channels, Channels::Rgba);
    assert_eq!(header.pixel_count(), 4);

    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.pixels().len() as u64, header.pixel_count() * 4);
}

// ── Typed pixels ────────────────────────────────────────────────────

#[cfg(feature = "rgb")]
#[test]
fn typed_pixel_views() {
    let data = two_by_two(3);
    let native = decode(&data).unwrap();
    let px: &[rgb::RGB8] = native.as_pixels().unwrap();
    assert_eq!(px[3], rgb::RGB8::new(1, 0, 255));
    assert!(matches!(
        native.as_pixels::<rgb::RGBA8>(),
        Err(QoiError::LayoutMismatch { .. })
    ));

    let rgba = decode_rgba(&data).unwrap();
    let px: &[rgb::RGBA8] = rgba.as_pixels().unwrap();
    assert_eq!(px[0], rgb::RGBA8::new(255, 0, 0, 255));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let decoded = decode_rgba(&two_by_two(4)).unwrap();
    let img = decoded.as_imgref::<rgb::RGBA8>().unwrap();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 2);
    assert_eq!(img[(1usize, 1usize)], rgb::RGBA8::new(1, 0, 255, 128));

    let owned = decoded.to_imgvec::<rgb::RGBA8>().unwrap();
    assert_eq!(owned.buf().len(), 4);
}
