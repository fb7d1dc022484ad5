/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The closed set of binary PNM variants supported by the decoders
//!
//! Variants differ only in their magic bytes, the number of samples
//! making up one pixel and how those samples pack into an ARGB value,
//! so each of those is a method on [`PnmVariant`].

use core::fmt::{Display, Formatter};

/// A binary PNM flavor.
///
/// The set is closed: the plain-text flavors (`P1`..`P3`) and PAM (`P7`)
/// are not representable here and streams carrying them are rejected
/// during the magic check.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PnmVariant {
    /// `P5`, binary graymap, one luma sample per pixel
    Graymap,
    /// `P6`, binary pixmap, three samples per pixel in RGB order
    Pixmap
}

impl PnmVariant {
    /// Return the three magic bytes opening every frame of this variant,
    /// the two ASCII identifier bytes plus the newline terminating them
    pub const fn magic(self) -> [u8; 3] {
        match self {
            PnmVariant::Graymap => *b"P5\n",
            PnmVariant::Pixmap => *b"P6\n"
        }
    }

    /// Number of samples making up a single pixel
    ///
    /// One for graymaps, three (RGB) for pixmaps
    pub const fn samples_per_pixel(self) -> usize {
        match self {
            PnmVariant::Graymap => 1,
            PnmVariant::Pixmap => 3
        }
    }

    /// Pack one pixel's samples into a `0xAARRGGBB` value
    ///
    /// Alpha is always opaque. Graymaps replicate the luma sample into
    /// the three color channels.
    ///
    /// # Panics
    /// If `samples` is shorter than [`samples_per_pixel`](Self::samples_per_pixel)
    pub fn pack_pixel(self, samples: &[u8]) -> u32 {
        match self {
            PnmVariant::Graymap => {
                let luma = u32::from(samples[0]);

                0xFF00_0000 | (luma << 16) | (luma << 8) | luma
            }
            PnmVariant::Pixmap => {
                let r = u32::from(samples[0]);
                let g = u32::from(samples[1]);
                let b = u32::from(samples[2]);

                0xFF00_0000 | (r << 16) | (g << 8) | b
            }
        }
    }
}

impl Display for PnmVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PnmVariant::Graymap => write!(f, "P5"),
            PnmVariant::Pixmap => write!(f, "P6")
        }
    }
}
