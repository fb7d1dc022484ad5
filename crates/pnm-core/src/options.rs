/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoder options
//!
//! This module exposes the struct through which all decoders in the
//! family receive their shared configuration, currently the dimension
//! limits a header may declare before decoding refuses to allocate.

pub use crate::options::decoder::DecoderOptions;

mod decoder;
