/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::cmp::min;

use pnm_core::bytestream::ByteWriter;
use pnm_core::format::PnmVariant;

use crate::errors::PnmDecodeErrors;
use crate::headers::FrameHeader;
use crate::image::ArgbImage;

/// A borrowed view of one decoded frame
///
/// Views come out of [`read_frame`](crate::PnmDecoder::read_frame) and
/// stay valid until the decoder moves again, the borrow checker
/// enforces that the underlying bytes cannot change while one is alive.
///
/// All transfer methods share the same geometry rules. The transfer
/// region is clipped to `min(frame, transfer)` in both axes, the
/// destination is addressed through a caller-chosen scanline stride,
/// and destination content outside the clipped region is never touched.
/// Rows are read from the frame at its natural stride, so a clipped
/// transfer takes the top-left corner.
pub struct Frame<'a> {
    header:  FrameHeader,
    variant: PnmVariant,
    samples: &'a [u8]
}

impl<'a> Frame<'a> {
    pub(crate) fn new(header: FrameHeader, variant: PnmVariant, samples: &'a [u8]) -> Frame<'a> {
        Frame {
            header,
            variant,
            samples
        }
    }

    /// Frame width in pixels
    pub const fn width(&self) -> usize {
        self.header.width
    }

    /// Frame height in pixels
    pub const fn height(&self) -> usize {
        self.header.height
    }

    /// The maximum sample value the frame's header declares
    pub const fn max_value(&self) -> usize {
        self.header.max_value
    }

    /// Bytes holding one sample
    pub const fn bytes_per_sample(&self) -> usize {
        self.header.bytes_per_sample
    }

    /// Samples making up one pixel
    pub const fn samples_per_pixel(&self) -> usize {
        self.header.samples_per_pixel
    }

    /// The variant of the stream this frame came from
    pub const fn variant(&self) -> PnmVariant {
        self.variant
    }

    /// A copy of the parsed header
    pub const fn header(&self) -> FrameHeader {
        self.header
    }

    /// The frame's raw payload, `width * height * samples_per_pixel`
    /// bytes in row-major order
    pub const fn samples(&self) -> &'a [u8] {
        self.samples
    }

    /// Clip a requested transfer region against the frame
    fn clip(&self, transfer_width: usize, transfer_height: usize) -> (usize, usize) {
        (
            min(self.header.width, transfer_width),
            min(self.header.height, transfer_height)
        )
    }

    /// Transfer pixels into `pixels` as packed `0xAARRGGBB` values
    ///
    /// The clipped region lands at `offset`, rows `pixels_per_scanline`
    /// elements apart. Graymap luma is replicated into all three color
    /// channels, alpha is always opaque.
    ///
    /// # Arguments
    ///
    /// * `transfer_width`: Width of the requested region in pixels
    /// * `transfer_height`: Height of the requested region in pixels
    /// * `pixels`: Destination slice, one `u32` per pixel
    /// * `offset`: Element the first transferred row starts at
    /// * `pixels_per_scanline`: Destination stride in elements
    pub fn get_pixels(
        &self, transfer_width: usize, transfer_height: usize, pixels: &mut [u32], offset: usize,
        pixels_per_scanline: usize
    ) -> Result<(), PnmDecodeErrors> {
        let (x, y) = self.clip(transfer_width, transfer_height);
        if x == 0 || y == 0 {
            return Ok(());
        }

        let required = Self::required_len(offset, y, pixels_per_scanline, x)?;
        if pixels.len() < required {
            return Err(PnmDecodeErrors::TooSmallOutput(required, pixels.len()));
        }
        self.pack_region(x, y, pixels, offset, pixels_per_scanline);

        Ok(())
    }

    /// Transfer raw samples into `samples`
    ///
    /// The clipped region lands at `offset`, rows `bytes_per_scanline`
    /// bytes apart, each row `x * samples_per_pixel` bytes of payload.
    ///
    /// # Arguments
    ///
    /// * `transfer_width`: Width of the requested region in pixels
    /// * `transfer_height`: Height of the requested region in pixels
    /// * `samples`: Destination slice
    /// * `offset`: Byte the first transferred row starts at
    /// * `bytes_per_scanline`: Destination stride in bytes
    pub fn get_samples(
        &self, transfer_width: usize, transfer_height: usize, samples: &mut [u8], offset: usize,
        bytes_per_scanline: usize
    ) -> Result<(), PnmDecodeErrors> {
        let (x, y) = self.clip(transfer_width, transfer_height);
        if x == 0 || y == 0 {
            return Ok(());
        }

        let row_len = x * self.header.samples_per_pixel;
        let required = Self::required_len(offset, y, bytes_per_scanline, row_len)?;
        if samples.len() < required {
            return Err(PnmDecodeErrors::TooSmallOutput(required, samples.len()));
        }

        let src_stride = self.header.width * self.header.samples_per_pixel;
        if bytes_per_scanline == row_len && self.header.width == x {
            // contiguous on both sides, the whole region is one run
            samples[offset..offset + y * row_len].copy_from_slice(&self.samples[..y * row_len]);
        } else {
            let mut dst = offset;
            let mut src = 0;
            for _ in 0..y {
                samples[dst..dst + row_len].copy_from_slice(&self.samples[src..src + row_len]);
                dst += bytes_per_scanline;
                src += src_stride;
            }
        }

        Ok(())
    }

    /// Transfer raw samples to `writer` starting at its current cursor
    ///
    /// On return the cursor has advanced by exactly
    /// `y * bytes_per_scanline` from where it started, the final row's
    /// padding included, so consecutive transfers tile the destination.
    /// The writer must have room for that whole span.
    pub fn write_samples(
        &self, transfer_width: usize, transfer_height: usize, writer: &mut ByteWriter,
        bytes_per_scanline: usize
    ) -> Result<(), PnmDecodeErrors> {
        let (x, y) = self.clip(transfer_width, transfer_height);
        if x == 0 || y == 0 {
            return Ok(());
        }

        let row_len = x * self.header.samples_per_pixel;
        if bytes_per_scanline < row_len {
            return Err(PnmDecodeErrors::Generic(
                "scanline stride is smaller than the transfer row"
            ));
        }
        let span = y
            .checked_mul(bytes_per_scanline)
            .ok_or(PnmDecodeErrors::Generic("transfer region overflows"))?;
        if !writer.has(span) {
            return Err(PnmDecodeErrors::TooSmallOutput(span, writer.bytes_left()));
        }

        let pad = bytes_per_scanline - row_len;
        let src_stride = self.header.width * self.header.samples_per_pixel;

        let mut src = 0;
        for _ in 0..y {
            writer.write_bytes(&self.samples[src..src + row_len])?;
            writer.skip(pad)?;
            src += src_stride;
        }

        Ok(())
    }

    /// Transfer raw samples to `writer` starting at `position`
    ///
    /// Places the cursor first, then behaves exactly like
    /// [`write_samples`](Self::write_samples), the cursor ends up at
    /// `position + y * bytes_per_scanline`.
    pub fn write_samples_at(
        &self, transfer_width: usize, transfer_height: usize, writer: &mut ByteWriter,
        position: usize, bytes_per_scanline: usize
    ) -> Result<(), PnmDecodeErrors> {
        writer.set_position(position)?;
        self.write_samples(transfer_width, transfer_height, writer, bytes_per_scanline)
    }

    /// Decode the whole frame into a freshly allocated image
    pub fn to_image(&self) -> ArgbImage {
        let mut image = ArgbImage::new(self.header.width, self.header.height);
        self.image_into(&mut image);

        image
    }

    /// Transfer into `image`, clipping against its dimensions
    ///
    /// A smaller image receives the frame's top-left corner, a larger
    /// one keeps its content outside the frame's extent.
    pub fn image_into(&self, image: &mut ArgbImage) {
        let (transfer_width, transfer_height) = image.dimensions();

        let (x, y) = self.clip(transfer_width, transfer_height);
        if x == 0 || y == 0 {
            return;
        }
        // the image invariant pixels.len() == width * height makes the
        // transfer structurally in bounds
        self.pack_region(x, y, image.pixels_mut(), 0, transfer_width);
    }

    /// Destination length needed for a clipped transfer, the final row
    /// carries no trailing padding
    fn required_len(
        offset: usize, rows: usize, stride: usize, row_len: usize
    ) -> Result<usize, PnmDecodeErrors> {
        if stride < row_len {
            return Err(PnmDecodeErrors::Generic(
                "scanline stride is smaller than the transfer row"
            ));
        }
        (rows - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(offset))
            .and_then(|v| v.checked_add(row_len))
            .ok_or(PnmDecodeErrors::Generic("transfer region overflows"))
    }

    /// Pack the clipped `x` by `y` region into `pixels`, bounds already
    /// validated by the caller
    fn pack_region(&self, x: usize, y: usize, pixels: &mut [u32], offset: usize, stride: usize) {
        let spp = self.header.samples_per_pixel;
        let src_stride = self.header.width * spp;

        if stride == x && self.header.width == x {
            // contiguous on both sides, pack the region in one pass
            let region = &mut pixels[offset..offset + x * y];
            for (pixel, samples) in region.iter_mut().zip(self.samples.chunks_exact(spp)) {
                *pixel = self.variant.pack_pixel(samples);
            }
        } else {
            let mut dst = offset;
            let mut src = 0;
            for _ in 0..y {
                let row = &self.samples[src..src + x * spp];
                for (pixel, samples) in pixels[dst..dst + x].iter_mut().zip(row.chunks_exact(spp)) {
                    *pixel = self.variant.pack_pixel(samples);
                }
                dst += stride;
                src += src_stride;
            }
        }
    }
}
