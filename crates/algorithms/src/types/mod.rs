//! Type-safe wrappers for cipher inputs
//!
//! Keys and initialization vectors get dedicated types so that a four-word
//! key cannot be confused with an arbitrary slice and an IV always has the
//! cipher's block size.

pub mod key;
pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use key::TeaKey;
pub use nonce::{CbcCompatible, Iv, Nonce};
