//! Internal utilities for the teacrypt library
//!
//! Byte-order conversions used when marshalling 64-bit cipher blocks and
//! 32-bit key words, plus a few constant-time helpers. Not part of the
//! stable public API.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_words};
