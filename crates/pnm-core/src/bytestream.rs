/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Sequential byte sources and the positioned byte writer
//!
//! Frame streams arrive over pipes and sockets as often as from files,
//! so the source abstraction here is strictly sequential, there is no
//! seeking and no peeking, a source hands out bytes once and reports a
//! stable end of stream by returning zero bytes read.

pub use crate::bytestream::cursor::ByteCursor;
#[cfg(feature = "std")]
pub use crate::bytestream::std_source::IoSource;
pub use crate::bytestream::traits::{ByteIoError, ByteSourceTrait};
pub use crate::bytestream::writer::ByteWriter;

mod cursor;
mod std_source;
mod traits;
mod writer;
