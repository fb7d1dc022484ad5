/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the pnm family of crates
//!
//! This crate provides the plumbing the decoders build on
//!
//! It currently contains
//!
//! - A sequential byte-source trait with in-memory and `std::io` backed
//!   implementations
//! - A positioned byte writer used as a destination for sample transfers
//! - The closed set of supported PNM variants and their pixel packing rules
//! - Shared decoder options
//!
//! This library is `#[no_std]` with `alloc`, the `std` feature adds
//! interoperability with `std::io` types.
//!
//! # Features
//!  - `std`: Enables sources backed by `std::io::Read` and implements
//!    `std::error::Error` for the error types
//!
//!  - `log`: Routes the `log` facade in this crate to the `log` crate,
//!    without it logging statements compile to nothing
//!
//!  - `serde`: Enables serializing of some of the data structures
//!    present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod format;
pub mod options;
pub mod serde;

#[cfg(feature = "log")]
pub use log;

#[cfg(not(feature = "log"))]
pub mod log;
