/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use pnm_core::bytestream::ByteIoError;

/// PNM frame decoding errors
pub enum PnmDecodeErrors {
    /// The frame does not open with the magic bytes of the variant the
    /// decoder was built for.
    // expected, found
    FormatMismatch([u8; 3], [u8; 3]),
    /// The numeric header region is malformed
    InvalidHeader(&'static str),
    /// The declared maximum sample value needs more than one byte per
    /// sample.
    // max value, derived bytes per sample
    UnsupportedFormat(usize, usize),
    /// A declared dimension is larger than the configured limit.
    // limit, found
    LargeDimensions(usize, usize),
    /// The source ran out mid-frame or mid-skip.
    // expected, found
    UnexpectedEndOfStream(usize, usize),
    /// Growing the frame buffer to this many bytes failed
    ResourceExhaustion(usize),
    /// The transfer destination cannot hold the clipped region.
    // required, found
    TooSmallOutput(usize, usize),
    /// Generic message
    Generic(&'static str),
    IoErrors(ByteIoError)
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PnmDecodeErrors::FormatMismatch(expected, found) => {
                writeln!(
                    f,
                    "Invalid magic bytes, expected \"{}\" but found \"{}\"",
                    expected.escape_ascii(),
                    found.escape_ascii()
                )
            }
            PnmDecodeErrors::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            PnmDecodeErrors::UnsupportedFormat(max_value, bytes_per_sample) => {
                writeln!(
                    f,
                    "Unsupported sample format, maximum value {max_value} needs {bytes_per_sample} bytes per sample but only 1 is supported"
                )
            }
            PnmDecodeErrors::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            PnmDecodeErrors::UnexpectedEndOfStream(expected, found) => {
                writeln!(
                    f,
                    "Unexpected end of stream, expected {expected} but found {found}"
                )
            }
            PnmDecodeErrors::ResourceExhaustion(bytes) => {
                writeln!(f, "Cannot grow the frame buffer to {bytes} bytes")
            }
            PnmDecodeErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small of an output, expected room for at least {expected} but found {found}"
                )
            }
            PnmDecodeErrors::Generic(err) => {
                writeln!(f, "{err}")
            }
            PnmDecodeErrors::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl From<ByteIoError> for PnmDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        PnmDecodeErrors::IoErrors(value)
    }
}

impl From<&'static str> for PnmDecodeErrors {
    fn from(value: &'static str) -> Self {
        PnmDecodeErrors::Generic(value)
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PnmDecodeErrors {}
