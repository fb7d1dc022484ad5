/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder options

/// Options shared by the decoders
///
/// A stream is untrusted input, a header is free to declare any
/// geometry it likes, so decoders refuse to allocate for frames whose
/// declared dimensions exceed the configured limits and instead return
/// a dimension error.
///
/// The struct is constructed via [`DecoderOptions::default`] and
/// adjusted through its builder methods
///
/// ```
/// use pnm_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default().set_max_width(1920).set_max_height(1080);
///
/// assert_eq!(options.max_width(), 1920);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode frames larger than
    /// the specified width
    ///
    /// - Default value: 16384
    max_width:  usize,
    /// Maximum height for which decoders will not
    /// try to decode frames larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height: usize
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

impl DecoderOptions {
    /// Get the maximum width configured for which the decoder
    /// should not try to decode frames greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get the maximum height configured for which the decoder
    /// should not try to decode frames greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Set the maximum width for which the decoder should not try
    /// decoding frames greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`: The maximum width allowed
    ///
    /// returns: DecoderOptions
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the maximum height for which the decoder should not try
    /// decoding frames greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}
