//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode XORs each plaintext block with the previous ciphertext block
//! before encryption. The first block is XORed with an initialization
//! vector (IV). Decryption chains on the ciphertext just consumed, never on
//! the recovered plaintext.
//!
//! The byte-buffer entry points frame the ciphertext as `iv || C1 || .. || Cn`
//! so that [`cbc_decrypt`] needs only the key.

use teacrypt_params::{TEA_BLOCK_SIZE, TEA_IV_SIZE};

use super::padding::cbc_zero_pad;
use crate::block::tea::Tea;
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::{CbcCompatible, Iv, Nonce, TeaKey};

/// CBC mode implementation
#[derive(Clone)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: CbcCompatible,
    {
        validate::length("CBC initialization vector", N, B::block_size())?;

        Ok(Self {
            cipher,
            iv: iv[..].to_vec(),
        })
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size. The IV is not
    /// included in the returned ciphertext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_multiple("CBC plaintext", plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = self.iv.clone();

        for chunk in plaintext.chunks_exact(block_size) {
            let mut block: Vec<u8> = chunk
                .iter()
                .zip(prev_block.iter())
                .map(|(p, c)| p ^ c)
                .collect();

            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            prev_block = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a multiple of the block size and must not
    /// include the IV.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_multiple("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block: &[u8] = &self.iv;

        for chunk in ciphertext.chunks_exact(block_size) {
            let mut block = chunk.to_vec();
            self.cipher.decrypt_block(&mut block)?;

            plaintext.extend(block.iter().zip(prev_block.iter()).map(|(d, c)| d ^ c));
            prev_block = chunk;
        }

        Ok(plaintext)
    }
}

/// Encrypts an arbitrary byte buffer with TEA-CBC
///
/// The data is zero-padded to a multiple of 8 only when it is not already
/// aligned. The returned buffer is the IV followed by the ciphertext blocks,
/// so its length is `8 + padded_len`.
pub fn cbc_encrypt(data: &[u8], key: &[u32], iv: &[u8]) -> Result<Vec<u8>> {
    let key = TeaKey::from_words(key)?;
    let iv = Iv::from_slice(iv)?;
    let padded = cbc_zero_pad(data);

    let body = Cbc::new(Tea::new(&key), &iv)?.encrypt(&padded)?;

    let mut out = Vec::with_capacity(TEA_IV_SIZE + body.len());
    out.extend_from_slice(&iv[..]);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Decrypts a buffer produced by [`cbc_encrypt`]
///
/// The first 8 bytes are taken as the IV. The output excludes the IV and
/// keeps any zero padding. An empty buffer decrypts to an empty buffer; a
/// non-empty buffer that is not a whole number of blocks is rejected.
pub fn cbc_decrypt(data: &[u8], key: &[u32]) -> Result<Vec<u8>> {
    let key = TeaKey::from_words(key)?;
    if data.is_empty() {
        return Ok(Vec::new());
    }
    validate::block_multiple("CBC ciphertext", data.len(), TEA_BLOCK_SIZE)?;

    let (iv, body) = data.split_at(TEA_IV_SIZE);
    let iv = Iv::from_slice(iv)?;

    Cbc::new(Tea::new(&key), &iv)?.decrypt(body)
}
