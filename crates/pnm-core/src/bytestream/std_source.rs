/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::io::{ErrorKind, Read};

use crate::bytestream::{ByteIoError, ByteSourceTrait};

/// A byte source backed by any [`Read`](std::io::Read) implementation
///
/// This is the adapter to hand the decoders a file, a TCP stream or the
/// stdout of a child process, the common way of receiving live frame
/// streams:
///
/// ```no_run
/// use std::process::{Command, Stdio};
///
/// use pnm_core::bytestream::IoSource;
///
/// let mut child = Command::new("ffmpeg")
///     .args(["-i", "in.mkv", "-c:v", "ppm", "-f", "image2pipe", "-"])
///     .stdout(Stdio::piped())
///     .spawn()?;
///
/// let source = IoSource::new(child.stdout.take().unwrap());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Reads are passed straight through, wrap the reader in a
/// [`BufReader`](std::io::BufReader) if it hands out bytes in very
/// small chunks.
pub struct IoSource<R: Read> {
    inner: R
}

impl<R: Read> IoSource<R> {
    /// Create a new source reading from `inner`
    pub const fn new(inner: R) -> IoSource<R> {
        IoSource { inner }
    }

    /// Return the inner reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSourceTrait for IoSource<R> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        loop {
            match self.inner.read(buf) {
                Ok(bytes) => return Ok(bytes),
                // interrupted reads are retriable, everything else bubbles up
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(ByteIoError::from(err))
            }
        }
    }
}
