//! Block cipher implementations
//!
//! The [`BlockCipher`] trait is the seam between a cipher primitive and the
//! modes of operation layered on top of it. Modes only ever see byte blocks
//! of `block_size()` length.

use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub mod modes;
pub mod tea;

// Re-exports
pub use modes::{Cbc, Direction, Ecb};
pub use tea::Tea;

/// Type-level constants describing a cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human readable algorithm name
    fn name() -> &'static str;
}

/// A keyed block cipher that transforms one block in place
pub trait BlockCipher {
    /// Algorithm constants for this cipher
    type Algorithm: CipherAlgorithm;
    /// Key type accepted by [`BlockCipher::new`]
    type Key;

    /// Creates a cipher instance bound to `key`
    fn new(key: &Self::Key) -> Self;

    /// Encrypts exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generates a fresh random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;

    /// Key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}
