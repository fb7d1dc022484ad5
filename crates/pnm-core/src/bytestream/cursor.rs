/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteSourceTrait};

/// An in-memory byte source
///
/// Wraps anything that dereferences to `&[u8]` and hands its bytes out
/// sequentially. Works in `no_std` environments and is the cheapest
/// source to read from, a read is a bounded `copy_from_slice`.
///
/// # Example
/// ```
/// use pnm_core::bytestream::{ByteCursor, ByteSourceTrait};
///
/// let mut source = ByteCursor::new([1_u8, 2, 3]);
/// let mut buf = [0_u8; 8];
///
/// assert_eq!(source.read_bytes(&mut buf).unwrap(), 3);
/// // end of stream is stable
/// assert_eq!(source.read_bytes(&mut buf).unwrap(), 0);
/// ```
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    /// Create a new cursor reading from the start of `stream`
    pub const fn new(stream: T) -> ByteCursor<T> {
        ByteCursor {
            stream,
            position: 0
        }
    }

    /// Number of bytes handed out so far
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Return the inner buffer
    pub fn into_inner(self) -> T {
        self.stream
    }
}

impl<T: AsRef<[u8]>> ByteSourceTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let stream = self.stream.as_ref();

        let start = core::cmp::min(self.position, stream.len());
        let end = core::cmp::min(self.position + buf.len(), stream.len());

        buf[..end - start].copy_from_slice(&stream[start..end]);
        self.position += end - start;

        Ok(end - start)
    }
}
