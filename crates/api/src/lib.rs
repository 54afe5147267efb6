//! Public API types for the teacrypt library
//!
//! This crate provides the unified error surface shared by every teacrypt
//! crate. Lower-level crates keep their own narrower error types and convert
//! into [`Error`] at their public boundary.

#![forbid(unsafe_code)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
