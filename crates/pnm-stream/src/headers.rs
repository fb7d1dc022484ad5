/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_core::format::PnmVariant;
use pnm_core::options::DecoderOptions;

use crate::errors::PnmDecodeErrors;

/// A fully parsed and validated frame header
///
/// Instances only exist for headers whose every field parsed and
/// validated, there is no partially filled in state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrameHeader {
    /// Frame width in pixels, always at least 1
    pub width:             usize,
    /// Frame height in pixels, always at least 1
    pub height:            usize,
    /// The maximum sample value the header declares, `1..=255`
    pub max_value:         usize,
    /// Bytes holding one sample, derived from `max_value`, always 1
    pub bytes_per_sample:  usize,
    /// Samples making up one pixel, 1 for graymaps and 3 for pixmaps
    pub samples_per_pixel: usize,
    /// Bytes the header occupies on the wire, magic through the newline
    /// terminating the maximum value
    pub header_size:       usize
}

impl FrameHeader {
    /// Size in bytes of the sample payload following this header
    ///
    /// Returns `None` if the multiplication overflows
    pub fn payload_size(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.samples_per_pixel)?
            .checked_mul(self.bytes_per_sample)
    }

    /// Size in bytes of the whole frame, header included
    ///
    /// Returns `None` if the addition overflows
    pub fn frame_size(&self) -> Option<usize> {
        self.payload_size()?.checked_add(self.header_size)
    }
}

/// Bytes for one sample given the largest value a sample may take,
/// the bit length of the value rounded up to whole bytes
const fn bytes_for_max_value(max_value: usize) -> usize {
    (usize::BITS - max_value.leading_zeros()).div_ceil(8) as usize
}

/// Read one decimal field starting at `position`, terminated by exactly
/// one `terminator` byte, returning the value and the position one past
/// the terminator
fn read_decimal_field(
    src: &[u8], mut position: usize, terminator: u8
) -> Result<(usize, usize), PnmDecodeErrors> {
    let mut value: usize = 0;
    let mut digits = 0;

    loop {
        let Some(byte) = src.get(position).copied() else {
            return Err(PnmDecodeErrors::InvalidHeader("premature end of header"));
        };
        match byte {
            b'0'..=b'9' => {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                    .ok_or(PnmDecodeErrors::InvalidHeader("numeric field overflows"))?;
                digits += 1;
                position += 1;
            }
            _ if byte == terminator => {
                if digits == 0 {
                    return Err(PnmDecodeErrors::InvalidHeader("empty numeric field"));
                }
                return Ok((value, position + 1));
            }
            _ => return Err(PnmDecodeErrors::InvalidHeader("unexpected byte in header"))
        }
    }
}

/// Parse one frame header out of `src`
///
/// `src` starts at the frame's magic, which the caller has already
/// checked against `variant`, and holds the prefetched head of the
/// frame, so running out of `src` means the stream ended inside the
/// header region.
///
/// The grammar is strict: `width` is terminated by exactly one space,
/// `height` and the maximum sample value by exactly one newline, and
/// nothing but decimal digits may appear inside a field. Comments and
/// plain-text variants are out of scope.
pub(crate) fn parse_frame_header(
    src: &[u8], variant: PnmVariant, options: &DecoderOptions
) -> Result<FrameHeader, PnmDecodeErrors> {
    let position = variant.magic().len();

    let (width, position) = read_decimal_field(src, position, b' ')?;
    let (height, position) = read_decimal_field(src, position, b'\n')?;
    let (max_value, header_size) = read_decimal_field(src, position, b'\n')?;

    if width == 0 || height == 0 {
        return Err(PnmDecodeErrors::InvalidHeader("zero frame dimension"));
    }
    if max_value == 0 {
        return Err(PnmDecodeErrors::InvalidHeader("zero maximum sample value"));
    }
    if width > options.max_width() {
        return Err(PnmDecodeErrors::LargeDimensions(options.max_width(), width));
    }
    if height > options.max_height() {
        return Err(PnmDecodeErrors::LargeDimensions(options.max_height(), height));
    }

    let bytes_per_sample = bytes_for_max_value(max_value);
    if bytes_per_sample != 1 {
        return Err(PnmDecodeErrors::UnsupportedFormat(max_value, bytes_per_sample));
    }

    Ok(FrameHeader {
        width,
        height,
        max_value,
        bytes_per_sample,
        samples_per_pixel: variant.samples_per_pixel(),
        header_size
    })
}
