//! Tiny Encryption Algorithm (TEA)
//!
//! TEA is a Feistel cipher over 64-bit blocks keyed by four 32-bit words.
//! Each round first updates the left (high) half from the right half and
//! key words 0 and 1, then updates the right half from the *new* left half
//! and key words 2 and 3. Decryption runs the same updates in reverse order
//! with subtraction, starting from the accumulator value encryption ended on.
//!
//! All arithmetic is modulo 2^32. The round accumulator is local to one call.

use rand::{CryptoRng, RngCore};
use teacrypt_internal::endian::{join_u64, split_u64, u64_from_be_bytes, write_u64_be};
use teacrypt_params::{TEA_BLOCK_SIZE, TEA_DEFAULT_ROUNDS, TEA_DELTA, TEA_KEY_SIZE, TEA_KEY_WORDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::TeaKey;

/// Round count used by the legacy tool
pub const DEFAULT_ROUNDS: u32 = TEA_DEFAULT_ROUNDS;

/// Mixing function applied to one half with a pair of key words
#[inline(always)]
fn mix(half: u32, sum: u32, k_hi: u32, k_lo: u32) -> u32 {
    (half << 4).wrapping_add(k_hi) ^ half.wrapping_add(sum) ^ (half >> 5).wrapping_add(k_lo)
}

/// Encrypts one 64-bit block
///
/// `block >> 32` is the left half and the low 32 bits the right half.
pub fn encrypt_block(block: u64, key: &[u32; TEA_KEY_WORDS], rounds: u32) -> u64 {
    let (mut left, mut right) = split_u64(block);
    let mut sum: u32 = 0;

    for _ in 0..rounds {
        sum = sum.wrapping_add(TEA_DELTA);
        left = left.wrapping_add(mix(right, sum, key[0], key[1]));
        right = right.wrapping_add(mix(left, sum, key[2], key[3]));
    }

    join_u64(left, right)
}

/// Decrypts one 64-bit block; exact inverse of [`encrypt_block`]
pub fn decrypt_block(block: u64, key: &[u32; TEA_KEY_WORDS], rounds: u32) -> u64 {
    let (mut left, mut right) = split_u64(block);
    let mut sum: u32 = TEA_DELTA.wrapping_mul(rounds);

    for _ in 0..rounds {
        right = right.wrapping_sub(mix(left, sum, key[2], key[3]));
        left = left.wrapping_sub(mix(right, sum, key[0], key[1]));
        sum = sum.wrapping_sub(TEA_DELTA);
    }

    join_u64(left, right)
}

/// Checked variant of [`encrypt_block`] for keys given as a word slice
///
/// Rejects keys that are not exactly four words instead of truncating.
pub fn encrypt_block_words(block: u64, key: &[u32]) -> Result<u64> {
    let key = TeaKey::from_words(key)?;
    Ok(encrypt_block(block, key.words(), DEFAULT_ROUNDS))
}

/// Checked variant of [`decrypt_block`] for keys given as a word slice
pub fn decrypt_block_words(block: u64, key: &[u32]) -> Result<u64> {
    let key = TeaKey::from_words(key)?;
    Ok(decrypt_block(block, key.words(), DEFAULT_ROUNDS))
}

/// Type-level constants for TEA
pub enum TeaAlgorithm {}

impl CipherAlgorithm for TeaAlgorithm {
    const KEY_SIZE: usize = TEA_KEY_SIZE;
    const BLOCK_SIZE: usize = TEA_BLOCK_SIZE;

    fn name() -> &'static str {
        "TEA"
    }
}

/// TEA block cipher bound to a key and a round count
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Tea {
    key: TeaKey,
    rounds: u32,
}

impl Tea {
    /// Creates a cipher with a non-default round count
    pub fn with_rounds(key: &TeaKey, rounds: u32) -> Result<Self> {
        validate::parameter(rounds > 0, "rounds", "TEA needs at least one round")?;
        Ok(Self {
            key: key.clone(),
            rounds,
        })
    }

    /// Number of rounds this instance runs
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Encrypts a block given as a 64-bit integer
    pub fn encrypt_u64(&self, block: u64) -> u64 {
        encrypt_block(block, self.key.words(), self.rounds)
    }

    /// Decrypts a block given as a 64-bit integer
    pub fn decrypt_u64(&self, block: u64) -> u64 {
        decrypt_block(block, self.key.words(), self.rounds)
    }
}

impl BlockCipher for Tea {
    type Algorithm = TeaAlgorithm;
    type Key = TeaKey;

    fn new(key: &Self::Key) -> Self {
        Self {
            key: key.clone(),
            rounds: DEFAULT_ROUNDS,
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("TEA block", block.len(), TEA_BLOCK_SIZE)?;

        let out = self.encrypt_u64(u64_from_be_bytes(block));
        write_u64_be(block, out);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("TEA block", block.len(), TEA_BLOCK_SIZE)?;

        let out = self.decrypt_u64(u64_from_be_bytes(block));
        write_u64_be(block, out);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        TeaKey::generate(rng)
    }
}
