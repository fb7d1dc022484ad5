/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::ByteIoError;

/// Encapsulates a position-bearing byte destination
///
/// A `ByteWriter` borrows a caller-owned buffer and tracks a cursor
/// into it. Writes land at the cursor and advance it, the cursor can be
/// placed anywhere inside the buffer (one past the end included), and
/// writes that would run past the end fail without moving it.
///
/// The sample-transfer forms that address their destination through a
/// cursor take one of these, letting consecutive transfers tile a
/// single destination buffer.
pub struct ByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> ByteWriter<'a> {
    /// Create a new writer with the cursor at the start of `buffer`
    pub fn new(buffer: &'a mut [u8]) -> ByteWriter<'a> {
        ByteWriter {
            buffer,
            position: 0
        }
    }

    /// Current cursor position, in bytes from the start of the buffer
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Place the cursor at `position`
    ///
    /// `position` may be anywhere from zero to the buffer length
    /// inclusive, anything past that is an error and the cursor stays
    /// where it was.
    pub fn set_position(&mut self, position: usize) -> Result<(), ByteIoError> {
        if position > self.buffer.len() {
            return Err(ByteIoError::SeekError("position past the end of the buffer"));
        }
        self.position = position;
        Ok(())
    }

    /// Advance the cursor by `num` bytes without writing anything
    ///
    /// Skipped bytes keep whatever content they had.
    pub fn skip(&mut self, num: usize) -> Result<(), ByteIoError> {
        match self.position.checked_add(num) {
            Some(position) => self.set_position(position),
            None => Err(ByteIoError::SeekError("position overflows"))
        }
    }

    /// Number of bytes between the cursor and the end of the buffer
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Return true if the buffer can take in `num` more bytes at the
    /// current cursor
    pub const fn has(&self, num: usize) -> bool {
        self.bytes_left() >= num
    }

    /// Write a single byte at the cursor and advance it
    pub fn write_u8(&mut self, byte: u8) -> Result<(), ByteIoError> {
        match self.buffer.get_mut(self.position) {
            Some(slot) => {
                *slot = byte;
                self.position += 1;
                Ok(())
            }
            None => Err(ByteIoError::NotEnoughBuffer(1, 0))
        }
    }

    /// Write all of `buf` at the cursor and advance it past the written
    /// bytes
    ///
    /// If the buffer cannot hold all of `buf` nothing is written and
    /// the cursor does not move.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        if !self.has(buf.len()) {
            return Err(ByteIoError::NotEnoughBuffer(buf.len(), self.bytes_left()));
        }
        self.buffer[self.position..self.position + buf.len()].copy_from_slice(buf);
        self.position += buf.len();

        Ok(())
    }
}
