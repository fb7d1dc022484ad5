/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use pnm_core::bytestream::ByteSourceTrait;
use pnm_core::format::PnmVariant;
use pnm_core::log::{trace, warn};
use pnm_core::options::DecoderOptions;

use crate::errors::PnmDecodeErrors;
use crate::frame::Frame;
use crate::headers::{parse_frame_header, FrameHeader};

/// Bytes read ahead of each frame to capture its header
///
/// Magic, two dimensions, the maximum sample value and their
/// separators fit comfortably, a `usize` field can take at most 20
/// digits. Reading ahead never goes past this mark, so bytes of the
/// next frame pulled in here are at most one prefetch worth and stay
/// buffered for it.
pub const HEADER_PREFETCH: usize = 256;

/// A streaming decoder for concatenated binary PNM frames
///
/// One decoder reads one stream of frames of a single variant, `P5`
/// graymaps or `P6` pixmaps, chosen at construction. Each call to
/// [`read_frame`](Self::read_frame) yields a borrowed view of the next
/// frame or `None` once the stream ends cleanly.
///
/// Frames share one internal buffer that only ever grows, a stream of
/// same-sized frames allocates once and reuses that space for every
/// frame after the first.
///
/// # Example
/// ```
/// use pnm_stream::pnm_core::bytestream::ByteCursor;
/// use pnm_stream::pnm_core::format::PnmVariant;
/// use pnm_stream::PnmDecoder;
///
/// // two 1x1 graymap frames back to back
/// let stream = b"P5\n1 1\n255\n\x80P5\n1 1\n255\n\x81";
/// let mut decoder = PnmDecoder::new(PnmVariant::Graymap, ByteCursor::new(stream));
///
/// let first = decoder.read_frame().unwrap().unwrap();
/// assert_eq!(first.samples(), &[0x80][..]);
///
/// let second = decoder.read_frame().unwrap().unwrap();
/// assert_eq!(second.samples(), &[0x81][..]);
///
/// assert!(decoder.read_frame().unwrap().is_none());
/// ```
pub struct PnmDecoder<T: ByteSourceTrait> {
    source:  T,
    variant: PnmVariant,
    options: DecoderOptions,
    buffer:  Vec<u8>,
    /// bytes of `buffer` currently holding stream data
    filled:  usize,
    /// bytes at the front of `buffer` owned by the frame most recently
    /// handed out, slid away when the next read begins
    span:    usize,
    frame:   Option<FrameHeader>
}

impl<T: ByteSourceTrait> PnmDecoder<T> {
    /// Create a new decoder expecting `variant` frames from `source`
    pub fn new(variant: PnmVariant, source: T) -> PnmDecoder<T> {
        Self::new_with_options(variant, source, DecoderOptions::default())
    }

    /// Create a new decoder with custom options
    ///
    /// # Arguments
    ///
    /// * `variant`: The frame flavor this stream carries
    /// * `source`: Where the bytes come from
    /// * `options`: Decoder options that influence how decoding occurs
    pub fn new_with_options(
        variant: PnmVariant, source: T, options: DecoderOptions
    ) -> PnmDecoder<T> {
        PnmDecoder {
            source,
            variant,
            options,
            buffer: vec![0; HEADER_PREFETCH],
            filled: 0,
            span: 0,
            frame: None
        }
    }

    /// Read the next frame from the stream
    ///
    /// Returns a borrowed view of the decoded frame, valid until the
    /// next call on this decoder. A stream ending cleanly on a frame
    /// boundary yields `Ok(None)`, the end of the stream is not an
    /// error. A stream ending anywhere inside a frame is an
    /// [`UnexpectedEndOfStream`](PnmDecodeErrors::UnexpectedEndOfStream)
    /// or, inside the header region, an
    /// [`InvalidHeader`](PnmDecodeErrors::InvalidHeader) error.
    ///
    /// Frames in one stream may change geometry freely, each frame's
    /// header is parsed on its own.
    pub fn read_frame(&mut self) -> Result<Option<Frame<'_>>, PnmDecodeErrors> {
        // retire the previous frame, keeping surplus bytes the prefetch
        // may have pulled in past its end
        if self.span != 0 {
            self.buffer.copy_within(self.span..self.filled, 0);
            self.filled -= self.span;
            self.span = 0;
        }
        self.frame = None;

        // top the buffer up to one header's worth, accumulating the
        // short reads a pipe may hand out
        while self.filled < HEADER_PREFETCH {
            let read = self.source.read_bytes(&mut self.buffer[self.filled..HEADER_PREFETCH])?;
            if read == 0 {
                break;
            }
            self.filled += read;
        }
        if self.filled == 0 {
            // clean end of stream on a frame boundary
            return Ok(None);
        }

        let magic = self.variant.magic();
        if self.filled < magic.len() {
            warn!(
                "stream ended {} bytes into a frame's magic",
                self.filled
            );
            return Err(PnmDecodeErrors::UnexpectedEndOfStream(magic.len(), self.filled));
        }
        if self.buffer[..magic.len()] != magic {
            let mut found = [0; 3];
            found.copy_from_slice(&self.buffer[..magic.len()]);
            return Err(PnmDecodeErrors::FormatMismatch(magic, found));
        }

        let header = parse_frame_header(&self.buffer[..self.filled], self.variant, &self.options)?;

        trace!("Frame width: {}", header.width);
        trace!("Frame height: {}", header.height);
        trace!("Maximum sample value: {}", header.max_value);

        let frame_size = header
            .frame_size()
            .ok_or(PnmDecodeErrors::InvalidHeader("frame size overflows"))?;

        // grow, never shrink, to exactly the frame size
        if self.buffer.len() < frame_size {
            let extra = frame_size - self.buffer.len();
            self.buffer
                .try_reserve_exact(extra)
                .map_err(|_| PnmDecodeErrors::ResourceExhaustion(frame_size))?;
            self.buffer.resize(frame_size, 0);
        }

        // pull in the payload, stopping exactly on the frame boundary
        // so the next frame's bytes stay in the source
        while self.filled < frame_size {
            let read = self.source.read_bytes(&mut self.buffer[self.filled..frame_size])?;
            if read == 0 {
                break;
            }
            self.filled += read;
        }
        if self.filled < frame_size {
            warn!(
                "stream ended inside a frame, expected {} bytes but only {} arrived",
                frame_size, self.filled
            );
            return Err(PnmDecodeErrors::UnexpectedEndOfStream(frame_size, self.filled));
        }

        self.span = frame_size;
        self.frame = Some(header);

        Ok(Some(Frame::new(
            header,
            self.variant,
            &self.buffer[header.header_size..frame_size]
        )))
    }

    /// Skip a single frame without decoding a view of it
    ///
    /// The frame is still read and parsed in full, a sequential source
    /// has no cheaper way past it.
    pub fn skip_frame(&mut self) -> Result<(), PnmDecodeErrors> {
        self.skip_frames(1)
    }

    /// Skip `count` frames
    ///
    /// If the stream ends cleanly before `count` frames went by this
    /// fails with
    /// [`UnexpectedEndOfStream`](PnmDecodeErrors::UnexpectedEndOfStream).
    /// After a successful skip no frame is current, the geometry
    /// accessors all return `None` until the next
    /// [`read_frame`](Self::read_frame).
    pub fn skip_frames(&mut self, count: usize) -> Result<(), PnmDecodeErrors> {
        for skipped in 0..count {
            if self.read_frame()?.is_none() {
                return Err(PnmDecodeErrors::UnexpectedEndOfStream(count, skipped));
            }
        }
        self.frame = None;

        Ok(())
    }

    /// Width and height of the current frame
    ///
    /// `None` unless a frame is ready, i.e. between a successful
    /// [`read_frame`](Self::read_frame) and the next call that moves
    /// the stream.
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        match &self.frame {
            Some(header) => Some((header.width, header.height)),
            None => None
        }
    }

    /// The maximum sample value the current frame's header declares
    ///
    /// `None` unless a frame is ready
    pub const fn max_value(&self) -> Option<usize> {
        match &self.frame {
            Some(header) => Some(header.max_value),
            None => None
        }
    }

    /// Bytes per sample of the current frame
    ///
    /// `None` unless a frame is ready
    pub const fn bytes_per_sample(&self) -> Option<usize> {
        match &self.frame {
            Some(header) => Some(header.bytes_per_sample),
            None => None
        }
    }

    /// Samples per pixel of the current frame
    ///
    /// `None` unless a frame is ready
    pub const fn samples_per_pixel(&self) -> Option<usize> {
        match &self.frame {
            Some(header) => Some(header.samples_per_pixel),
            None => None
        }
    }

    /// The variant this decoder was built for
    pub const fn variant(&self) -> PnmVariant {
        self.variant
    }

    /// Return the underlying source
    ///
    /// Bytes already pulled into the decoder's buffer, including any
    /// prefetched start of an unread frame, do not reappear in the
    /// source.
    pub fn into_inner(self) -> T {
        self.source
    }
}
