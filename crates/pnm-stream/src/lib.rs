/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decoder for streams of concatenated binary PNM frames
//!
//! Binary PNM (`P5` graymaps and `P6` pixmaps) is the format video
//! tooling reaches for when piping raw frames between processes, e.g.
//! `ffmpeg -f image2pipe` writes one PNM frame after another to stdout.
//! This crate decodes such streams frame by frame from any sequential
//! byte source and transposes decoded frames into caller-owned buffers,
//! as packed ARGB pixels or as raw samples, with clipping and arbitrary
//! destination strides.
//!
//! # Features
//! - Frames are read through a reusable high-water buffer, a long
//!   stream of same-sized frames allocates once
//! - Sources are strictly sequential, pipes and sockets work as well as
//!   files
//! - `no_std` with `alloc` when the default `std` feature is disabled
//! - No unsafe code, fuzz tested
//!
//! # Usage
//!
//! ```
//! use pnm_stream::pnm_core::bytestream::ByteCursor;
//! use pnm_stream::pnm_core::format::PnmVariant;
//! use pnm_stream::PnmDecoder;
//!
//! // one 2x1 P6 frame: a red pixel followed by a blue one
//! let stream = b"P6\n2 1\n255\n\xFF\x00\x00\x00\x00\xFF";
//!
//! let mut decoder = PnmDecoder::new(PnmVariant::Pixmap, ByteCursor::new(stream));
//!
//! while let Some(frame) = decoder.read_frame().unwrap() {
//!     let image = frame.to_image();
//!
//!     assert_eq!(image.dimensions(), (2, 1));
//!     assert_eq!(image.pixels(), &[0xFFFF_0000, 0xFF00_00FF][..]);
//! }
//! ```
//!
//! # Unsupported formats
//! - Plain-text PNM (`P1`..`P3`) and PAM (`P7`)
//! - Samples wider than 8 bits (maxval above 255 is recognized and
//!   rejected)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![macro_use]
extern crate alloc;
pub extern crate pnm_core;

pub use crate::decoder::{PnmDecoder, HEADER_PREFETCH};
pub use crate::errors::PnmDecodeErrors;
pub use crate::frame::Frame;
pub use crate::headers::FrameHeader;
pub use crate::image::ArgbImage;

mod decoder;
mod errors;
mod frame;
mod headers;
mod image;
