/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for feeding bytes into the decoders
//!
//! This exposes the source trait the decoders read from together with
//! the error type source and writer implementations report.

use core::fmt::{Debug, Display, Formatter};

/// The input trait implemented for byte sources.
///
/// Decoders pull their stream through this trait, accumulating partial
/// reads themselves, so an implementation only has to hand over whatever
/// bytes it currently can.
///
/// # Considerations
///
/// Sources are strictly sequential. Frame streams commonly come out of
/// pipes (e.g. a video decoder writing frames to its stdout) where
/// seeking is impossible, hence the trait deliberately has no notion of
/// position or rewind.
///
/// If you have an in-memory buffer, use
/// [`ByteCursor`](crate::bytestream::ByteCursor), for anything
/// implementing [`Read`](std::io::Read) use
/// [`IoSource`](crate::bytestream::IoSource) (requires the `std` feature).
pub trait ByteSourceTrait {
    /// Read bytes into `buf` returning how many bytes were read or an
    /// error if one occurred
    ///
    /// Short reads are allowed, returning fewer bytes than `buf` holds
    /// simply means the caller will come back for the rest.
    ///
    /// ## Arguments
    /// - `buf`: The buffer to fill with bytes
    ///
    /// ## Returns
    /// - `Ok(usize)` - Actual bytes read into the buffer. `Ok(0)` on a
    ///   non-empty `buf` means the end of the stream, and the condition
    ///   must be stable, later calls keep returning `Ok(0)`.
    /// - `Err()` - The error encountered when reading bytes for which we
    ///   couldn't recover
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;
}

/// Errors reported by byte sources and the positioned writer
pub enum ByteIoError {
    /// An error from an underlying `std::io` object
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// The destination cannot hold the requested bytes.
    // requested, available
    NotEnoughBuffer(usize, usize),
    /// A position outside the addressable range was requested
    SeekError(&'static str),
    /// Any other error
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBuffer(requested, available) => {
                writeln!(
                    f,
                    "Not enough buffer to write {requested} bytes, space available is {available}"
                )
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}
