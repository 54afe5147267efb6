//! TEA key material
//!
//! A TEA key is exactly four unsigned 32-bit words. The same four words feed
//! every round of every block; no schedule is precomputed.

use core::fmt;

use rand::{CryptoRng, RngCore};
use teacrypt_internal::constant_time::ct_eq_words;
use teacrypt_internal::endian::{u32_from_be_bytes, u32_to_be_bytes};
use teacrypt_params::{TEA_KEY_SIZE, TEA_KEY_WORDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;

/// 128-bit TEA key held as four big-endian words, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TeaKey {
    words: [u32; TEA_KEY_WORDS],
}

impl Sealed for TeaKey {}

impl TeaKey {
    /// Create a key from four words
    pub fn new(words: [u32; TEA_KEY_WORDS]) -> Self {
        Self { words }
    }

    /// Create a key from a word slice, rejecting anything but four words
    pub fn from_words(words: &[u32]) -> Result<Self> {
        validate::length("TEA key words", words.len(), TEA_KEY_WORDS)?;

        let mut key = [0u32; TEA_KEY_WORDS];
        key.copy_from_slice(words);
        Ok(Self { words: key })
    }

    /// Create a key from 16 bytes, each group of four read big-endian
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("TEA key bytes", bytes.len(), TEA_KEY_SIZE)?;

        let mut words = [0u32; TEA_KEY_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32_from_be_bytes(chunk);
        }
        Ok(Self { words })
    }

    /// Create an all-zero key
    pub fn zeroed() -> Self {
        Self {
            words: [0u32; TEA_KEY_WORDS],
        }
    }

    /// Generate a random key
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut words = [0u32; TEA_KEY_WORDS];
        for word in words.iter_mut() {
            *word = rng.next_u32();
        }
        Self { words }
    }

    /// The four key words in order
    pub fn words(&self) -> &[u32; TEA_KEY_WORDS] {
        &self.words
    }

    /// Serialize to 16 big-endian bytes
    pub fn to_bytes(&self) -> [u8; TEA_KEY_SIZE] {
        let mut out = [0u8; TEA_KEY_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&u32_to_be_bytes(*word));
        }
        out
    }
}

impl From<[u32; TEA_KEY_WORDS]> for TeaKey {
    fn from(words: [u32; TEA_KEY_WORDS]) -> Self {
        Self::new(words)
    }
}

impl PartialEq for TeaKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq_words(&self.words, &other.words)
    }
}

impl Eq for TeaKey {}

impl fmt::Debug for TeaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeaKey[REDACTED]")
    }
}
