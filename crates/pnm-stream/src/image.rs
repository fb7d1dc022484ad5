/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

/// An owned image of packed `0xAARRGGBB` pixels
///
/// Storage is row major with no scanline padding, `pixels.len()` is
/// always `width * height`.
pub struct ArgbImage {
    width:  usize,
    height: usize,
    pixels: Vec<u32>
}

impl ArgbImage {
    /// Create an image of the given dimensions
    ///
    /// All pixels start at zero.
    pub fn new(width: usize, height: usize) -> ArgbImage {
        ArgbImage {
            width,
            height,
            pixels: vec![0; width * height]
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width and height in one call
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The pixel data in row-major order
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to the pixel data
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Consume the image and take its pixel buffer
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }
}
