/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use pnm_core::bytestream::{ByteCursor, IoSource};
use pnm_core::format::PnmVariant;
use pnm_core::options::DecoderOptions;
use pnm_stream::{Frame, PnmDecodeErrors, PnmDecoder};

fn gray_frame(width: usize, height: usize, samples: &[u8]) -> Vec<u8> {
    assert_eq!(samples.len(), width * height);
    let mut frame = format!("P5\n{} {}\n255\n", width, height).into_bytes();
    frame.extend_from_slice(samples);
    frame
}

fn rgb_frame(width: usize, height: usize, samples: &[u8]) -> Vec<u8> {
    assert_eq!(samples.len(), width * height * 3);
    let mut frame = format!("P6\n{} {}\n255\n", width, height).into_bytes();
    frame.extend_from_slice(samples);
    frame
}

fn expect_err(result: Result<Option<Frame>, PnmDecodeErrors>) -> PnmDecodeErrors {
    match result {
        Ok(_) => panic!("expected a decode error"),
        Err(e) => e
    }
}

/// Hands out one byte per call, the worst case a pipe can produce
struct TrickleReader<'a> {
    data: &'a [u8],
    pos:  usize
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos == self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

#[test]
fn decode_single_pixmap_frame() {
    let data = rgb_frame(2, 2, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(data));

    let frame = decoder.read_frame().unwrap().unwrap();
    assert_eq!(frame.width(), 2);
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.max_value(), 255);
    assert_eq!(frame.bytes_per_sample(), 1);
    assert_eq!(frame.samples_per_pixel(), 3);
    assert_eq!(frame.variant(), PnmVariant::Pixmap);
    assert_eq!(
        frame.samples(),
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12][..]
    );

    assert_eq!(decoder.dimensions(), Some((2, 2)));
    assert_eq!(decoder.max_value(), Some(255));
    assert_eq!(decoder.bytes_per_sample(), Some(1));
    assert_eq!(decoder.samples_per_pixel(), Some(3));

    assert!(decoder.read_frame().unwrap().is_none());
}

#[test]
fn decode_concatenated_frames_with_varying_geometry() {
    // geometry is per frame, nothing carries over between headers
    let mut data = rgb_frame(2, 1, &[10; 6]);
    data.extend(rgb_frame(3, 2, &[20; 18]));
    data.extend(rgb_frame(1, 1, &[30; 3]));

    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(data));

    let mut seen = Vec::new();
    while let Some(frame) = decoder.read_frame().unwrap() {
        seen.push((frame.width(), frame.height(), frame.samples()[0]));
    }
    assert_eq!(seen, [(2, 1, 10), (3, 2, 20), (1, 1, 30)]);
}

#[test]
fn carry_over_preserves_following_frames() {
    // many tiny frames land in a single prefetch, so every decode after
    // the first starts from surplus bytes slid down from the last one
    let mut data = Vec::new();
    for i in 0..24_u8 {
        data.extend(gray_frame(1, 1, &[i]));
    }

    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(data));
    for i in 0..24_u8 {
        let frame = decoder.read_frame().unwrap().unwrap();
        assert_eq!(frame.samples(), &[i][..]);
    }
    assert!(decoder.read_frame().unwrap().is_none());
}

#[test]
fn buffer_growth_and_reuse() {
    // the first frame is larger than the prefetch window and forces the
    // working buffer to grow, the following small frames reuse it
    let large = vec![7_u8; 20 * 20 * 3];
    let mut data = rgb_frame(20, 20, &large);
    data.extend(rgb_frame(1, 1, &[1, 2, 3]));
    data.extend(rgb_frame(5, 2, &[9; 30]));

    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(data));

    let frame = decoder.read_frame().unwrap().unwrap();
    assert_eq!((frame.width(), frame.height()), (20, 20));
    assert_eq!(frame.samples(), &large[..]);

    let frame = decoder.read_frame().unwrap().unwrap();
    assert_eq!(frame.samples(), &[1, 2, 3][..]);

    let frame = decoder.read_frame().unwrap().unwrap();
    assert_eq!((frame.width(), frame.height()), (5, 2));
    assert_eq!(frame.samples(), &[9; 30][..]);

    assert!(decoder.read_frame().unwrap().is_none());
}

#[test]
fn trickle_source_assembles_frames() {
    let mut data = rgb_frame(2, 2, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    data.extend(rgb_frame(1, 1, &[99, 98, 97]));

    let source = IoSource::new(TrickleReader { data: &data, pos: 0 });
    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, source);

    let frame = decoder.read_frame().unwrap().unwrap();
    assert_eq!(
        frame.samples(),
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12][..]
    );
    let frame = decoder.read_frame().unwrap().unwrap();
    assert_eq!(frame.samples(), &[99, 98, 97][..]);

    assert!(decoder.read_frame().unwrap().is_none());
}

#[test]
fn decode_then_reclaim_source() {
    let data = gray_frame(1, 1, &[7]);
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(&data));
    while decoder.read_frame().unwrap().is_some() {}

    let cursor = decoder.into_inner();
    assert_eq!(cursor.position(), data.len());
}

#[test]
fn reject_foreign_magic() {
    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(b"P3\n1 1\n255\n9 9 9\n"));

    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::FormatMismatch(expected, found)
            if expected == *b"P6\n" && found == *b"P3\n"
    ));
    // the error does not consume the bad bytes, so it repeats
    assert!(decoder.read_frame().is_err());
}

#[test]
fn reject_variant_mismatch() {
    let data = gray_frame(1, 1, &[0]);
    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(&data));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::FormatMismatch(expected, found)
            if expected == *b"P6\n" && found == *b"P5\n"
    ));

    let data = rgb_frame(1, 1, &[0, 0, 0]);
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(&data));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::FormatMismatch(expected, found)
            if expected == *b"P5\n" && found == *b"P6\n"
    ));
}

#[test]
fn reject_wide_sample_values() {
    // 65535 needs two bytes per sample
    let mut data = b"P5\n1 1\n65535\n".to_vec();
    data.extend_from_slice(&[0, 0]);
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(data));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(err, PnmDecodeErrors::UnsupportedFormat(65535, 2)));

    // 256 is the smallest maximum that no longer fits in one byte
    let mut data = b"P5\n1 1\n256\n".to_vec();
    data.extend_from_slice(&[0, 0]);
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(data));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(err, PnmDecodeErrors::UnsupportedFormat(256, 2)));
}

#[test]
fn truncated_payload_reports_shortfall() {
    let data = rgb_frame(2, 2, &[5; 12]);
    // whole frame is 23 bytes, hand the decoder 20
    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(&data[..20]));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(err, PnmDecodeErrors::UnexpectedEndOfStream(23, 20)));
}

#[test]
fn truncated_header_is_invalid() {
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n12 34"));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidHeader("premature end of header")
    ));

    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n"));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidHeader("premature end of header")
    ));
}

#[test]
fn truncated_magic_is_unexpected_eof() {
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5"));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(err, PnmDecodeErrors::UnexpectedEndOfStream(3, 2)));

    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P"));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(err, PnmDecodeErrors::UnexpectedEndOfStream(3, 1)));
}

#[test]
fn empty_stream_is_clean_eof() {
    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new([0_u8; 0]));
    assert!(decoder.read_frame().unwrap().is_none());
    // end of stream is stable
    assert!(decoder.read_frame().unwrap().is_none());
    assert_eq!(decoder.dimensions(), None);
}

#[test]
fn eof_is_stable_after_last_frame() {
    let data = gray_frame(2, 1, &[1, 2]);
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(data));

    assert!(decoder.read_frame().unwrap().is_some());
    assert!(decoder.read_frame().unwrap().is_none());
    assert!(decoder.read_frame().unwrap().is_none());
}

#[test]
fn reject_zero_dimensions() {
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n0 3\n255\n"));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidHeader("zero frame dimension")
    ));

    let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(b"P6\n3 0\n255\n"));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidHeader("zero frame dimension")
    ));

    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n1 1\n0\n"));
    let err = expect_err(decoder.read_frame());
    assert!(matches!(
        err,
        PnmDecodeErrors::InvalidHeader("zero maximum sample value")
    ));
}

#[test]
fn reject_malformed_header_fields() {
    // two spaces after the width
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n2  2\n255\n"));
    assert!(matches!(
        expect_err(decoder.read_frame()),
        PnmDecodeErrors::InvalidHeader("unexpected byte in header")
    ));

    // tab instead of a space
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n2\t2\n255\n"));
    assert!(matches!(
        expect_err(decoder.read_frame()),
        PnmDecodeErrors::InvalidHeader("unexpected byte in header")
    ));

    // leading space makes the width field empty
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n 2 2\n255\n"));
    assert!(matches!(
        expect_err(decoder.read_frame()),
        PnmDecodeErrors::InvalidHeader("empty numeric field")
    ));

    // explicit sign is not part of the grammar
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n+2 2\n255\n"));
    assert!(matches!(
        expect_err(decoder.read_frame()),
        PnmDecodeErrors::InvalidHeader("unexpected byte in header")
    ));

    // carriage return before the newline
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(b"P5\n2 2\r\n255\n"));
    assert!(matches!(
        expect_err(decoder.read_frame()),
        PnmDecodeErrors::InvalidHeader("unexpected byte in header")
    ));
}

#[test]
fn skip_frames_jumps_and_invalidates() {
    let mut data = gray_frame(1, 1, &[1]);
    data.extend(gray_frame(1, 1, &[2]));
    data.extend(gray_frame(1, 1, &[3]));

    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(data));
    decoder.skip_frames(2).unwrap();

    // skipped geometry must not leak out of the accessors
    assert_eq!(decoder.dimensions(), None);
    assert_eq!(decoder.max_value(), None);

    let frame = decoder.read_frame().unwrap().unwrap();
    assert_eq!(frame.samples(), &[3][..]);
    assert!(decoder.read_frame().unwrap().is_none());
}

#[test]
fn skip_past_end_is_an_error() {
    let data = gray_frame(1, 1, &[1]);
    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(data));

    let err = decoder.skip_frames(3).unwrap_err();
    assert!(matches!(err, PnmDecodeErrors::UnexpectedEndOfStream(3, 1)));
}

#[test]
fn respect_dimension_limits() {
    let options = DecoderOptions::default().set_max_width(4).set_max_height(4);

    let data = gray_frame(5, 1, &[0; 5]);
    let mut decoder =
        PnmDecoder::new_with_options(PnmVariant::Graymap, ByteCursor::new(data), options);
    let err = expect_err(decoder.read_frame());
    assert!(matches!(err, PnmDecodeErrors::LargeDimensions(4, 5)));

    let data = gray_frame(1, 9, &[0; 9]);
    let mut decoder =
        PnmDecoder::new_with_options(PnmVariant::Graymap, ByteCursor::new(data), options);
    let err = expect_err(decoder.read_frame());
    assert!(matches!(err, PnmDecodeErrors::LargeDimensions(4, 9)));
}

#[test]
fn accessors_track_decoder_state() {
    let mut data = gray_frame(2, 3, &[0; 6]);
    data.extend_from_slice(b"P5\n0 1\n255\n");

    let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(data));
    assert_eq!(decoder.variant(), PnmVariant::Graymap);
    assert_eq!(decoder.dimensions(), None);

    assert!(decoder.read_frame().unwrap().is_some());
    assert_eq!(decoder.dimensions(), Some((2, 3)));

    // a failed parse clears the previous frame's geometry
    assert!(decoder.read_frame().is_err());
    assert_eq!(decoder.dimensions(), None);
    assert_eq!(decoder.samples_per_pixel(), None);
}
