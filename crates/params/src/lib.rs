//! Constant parameters for the teacrypt library
//!
//! Every fixed number the cipher, its modes and the text adapter agree on
//! lives here so the crates above never hard-code sizes independently.

#![no_std]
#![forbid(unsafe_code)]

pub mod utils;

pub use utils::symmetric::*;
