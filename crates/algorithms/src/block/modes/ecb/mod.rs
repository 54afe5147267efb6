//! Electronic Codebook (ECB) mode implementation
//!
//! ECB encrypts every block independently under the same key. Identical
//! plaintext blocks therefore produce identical ciphertext blocks; this is
//! the mode's defining weakness and is reproduced, not fixed.

use teacrypt_params::TEA_BLOCK_SIZE;

use super::padding::ecb_zero_pad;
use super::Direction;
use crate::block::tea::Tea;
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::TeaKey;

/// ECB mode over an arbitrary block cipher
#[derive(Clone)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance with the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts block-aligned data
    ///
    /// Padding must be applied by the caller before calling this function.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.apply(plaintext, Direction::Encrypt)
    }

    /// Decrypts block-aligned data
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.apply(ciphertext, Direction::Decrypt)
    }

    /// Transforms block-aligned data in the given direction
    pub fn apply(&self, data: &[u8], direction: Direction) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_multiple("ECB input", data.len(), block_size)?;

        let mut out = data.to_vec();
        for block in out.chunks_exact_mut(block_size) {
            match direction {
                Direction::Encrypt => self.cipher.encrypt_block(block)?,
                Direction::Decrypt => self.cipher.decrypt_block(block)?,
            }
        }
        Ok(out)
    }
}

/// Applies TEA in ECB mode to an arbitrary byte buffer
///
/// The buffer is zero-padded with `8 - len % 8` bytes in both directions,
/// so aligned input (including empty input) gains one full zero block.
/// Fails only when `key` is not exactly four words.
pub fn ecb_transform(data: &[u8], key: &[u32], direction: Direction) -> Result<Vec<u8>> {
    let key = TeaKey::from_words(key)?;
    let padded = ecb_zero_pad(data);
    debug_assert_eq!(padded.len() % TEA_BLOCK_SIZE, 0);

    Ecb::new(Tea::new(&key)).apply(&padded, direction)
}
