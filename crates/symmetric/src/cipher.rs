//! Symmetric cipher traits and the high-level TEA cipher
//!
//! [`TeaCipher`] binds a key, a [`Mode`] and a [`Padding`] scheme and
//! dispatches to the engine's mode layer. With [`Padding::Legacy`] the
//! output is byte-identical to the free functions
//! [`ecb_transform`], [`cbc_encrypt`] and [`cbc_decrypt`].

use core::fmt;
use core::str::FromStr;

use rand::{CryptoRng, RngCore};
use teacrypt_algorithms::block::modes::padding::{pkcs7_pad, pkcs7_unpad};
use teacrypt_algorithms::{
    cbc_decrypt, cbc_encrypt, ecb_transform, BlockCipher, Cbc, Direction, Ecb, Iv, Tea, TeaKey,
};
use teacrypt_params::{TEA_BLOCK_SIZE, TEA_IV_SIZE};

use crate::config::CipherConfig;
use crate::error::{Error, Result, SymmetricResultExt};
use crate::mode::Mode;

/// Common trait for symmetric encryption over byte buffers
pub trait SymmetricCipher {
    /// Returns the name of this cipher
    fn name(&self) -> &'static str;

    /// Encrypts an arbitrary-length buffer
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a buffer produced by [`SymmetricCipher::encrypt`]
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Padding scheme applied around the mode layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Padding {
    /// Legacy zero padding, never stripped on decrypt
    ///
    /// ECB always appends `8 - len % 8` zero bytes, in both directions.
    /// CBC pads only unaligned plaintext.
    #[default]
    Legacy,
    /// PKCS#7 in both modes, stripped and verified on decrypt
    Pkcs7,
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Legacy => f.write_str("legacy"),
            Padding::Pkcs7 => f.write_str("pkcs7"),
        }
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "zero" => Ok(Padding::Legacy),
            "pkcs7" => Ok(Padding::Pkcs7),
            other => Err(Error::config(
                "padding",
                format!("unrecognized padding '{}', expected 'legacy' or 'pkcs7'", other),
            )),
        }
    }
}

/// TEA bound to a mode of operation
#[derive(Clone)]
pub struct TeaCipher {
    key: TeaKey,
    mode: Mode,
    iv: Option<Iv>,
    padding: Padding,
}

impl TeaCipher {
    /// ECB cipher with legacy padding
    pub fn ecb(key: TeaKey) -> Self {
        Self {
            key,
            mode: Mode::Ecb,
            iv: None,
            padding: Padding::Legacy,
        }
    }

    /// CBC cipher with legacy padding
    pub fn cbc(key: TeaKey, iv: Iv) -> Self {
        Self {
            key,
            mode: Mode::Cbc,
            iv: Some(iv),
            padding: Padding::Legacy,
        }
    }

    /// Cipher with a fresh random key, and a random IV for CBC
    pub fn generate<R: RngCore + CryptoRng>(mode: Mode, rng: &mut R) -> Self {
        let key = TeaKey::generate(rng);
        match mode {
            Mode::Ecb => Self::ecb(key),
            Mode::Cbc => Self::cbc(key, Iv::random(rng)),
        }
    }

    /// Cipher described by a parsed configuration
    pub fn from_config(config: &CipherConfig) -> Self {
        match config.mode {
            Mode::Ecb => Self::ecb(config.key.clone()),
            Mode::Cbc => Self::cbc(config.key.clone(), config.iv.clone()),
        }
    }

    /// Replace the padding scheme
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the IV used for CBC encryption
    pub fn with_iv(mut self, iv: Iv) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Mode of operation
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Padding scheme
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// IV used for CBC encryption, if any
    pub fn iv(&self) -> Option<&Iv> {
        self.iv.as_ref()
    }

    fn require_iv(&self) -> Result<&Iv> {
        self.iv
            .as_ref()
            .ok_or_else(|| Error::config("initialization vector", "CBC mode requires an IV"))
    }

    fn block_cipher(&self) -> Tea {
        Tea::new(&self.key)
    }
}

impl fmt::Debug for TeaCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeaCipher")
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("iv", &self.iv)
            .finish_non_exhaustive()
    }
}

impl SymmetricCipher for TeaCipher {
    fn name(&self) -> &'static str {
        match self.mode {
            Mode::Ecb => "TEA-ECB",
            Mode::Cbc => "TEA-CBC",
        }
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let words = self.key.words();
        match (self.mode, self.padding) {
            (Mode::Ecb, Padding::Legacy) => {
                ecb_transform(plaintext, words, Direction::Encrypt).map_primitive_err()
            }
            (Mode::Ecb, Padding::Pkcs7) => {
                let padded = pkcs7_pad(plaintext, TEA_BLOCK_SIZE).map_primitive_err()?;
                Ecb::new(self.block_cipher())
                    .encrypt(&padded)
                    .map_primitive_err()
            }
            (Mode::Cbc, Padding::Legacy) => {
                let iv = self.require_iv()?;
                cbc_encrypt(plaintext, words, &iv[..]).map_primitive_err()
            }
            (Mode::Cbc, Padding::Pkcs7) => {
                let iv = self.require_iv()?;
                let padded = pkcs7_pad(plaintext, TEA_BLOCK_SIZE).map_primitive_err()?;
                let body = Cbc::new(self.block_cipher(), iv)
                    .and_then(|cbc| cbc.encrypt(&padded))
                    .map_primitive_err()?;

                let mut out = Vec::with_capacity(TEA_IV_SIZE + body.len());
                out.extend_from_slice(&iv[..]);
                out.extend_from_slice(&body);
                Ok(out)
            }
        }
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let words = self.key.words();
        match (self.mode, self.padding) {
            (Mode::Ecb, Padding::Legacy) => {
                ecb_transform(ciphertext, words, Direction::Decrypt).map_primitive_err()
            }
            (Mode::Ecb, Padding::Pkcs7) => {
                let padded = Ecb::new(self.block_cipher())
                    .decrypt(ciphertext)
                    .map_primitive_err()?;
                Ok(pkcs7_unpad(&padded, TEA_BLOCK_SIZE)
                    .map_primitive_err()?
                    .to_vec())
            }
            (Mode::Cbc, Padding::Legacy) => cbc_decrypt(ciphertext, words).map_primitive_err(),
            (Mode::Cbc, Padding::Pkcs7) => {
                // IV plus at least one padding block
                if ciphertext.len() < TEA_IV_SIZE + TEA_BLOCK_SIZE {
                    return Err(Error::InvalidLength {
                        context: "CBC ciphertext",
                        expected: TEA_IV_SIZE + TEA_BLOCK_SIZE,
                        actual: ciphertext.len(),
                    });
                }
                let (iv, body) = ciphertext.split_at(TEA_IV_SIZE);
                let iv = Iv::from_slice(iv).map_primitive_err()?;
                let padded = Cbc::new(self.block_cipher(), &iv)
                    .and_then(|cbc| cbc.decrypt(body))
                    .map_primitive_err()?;
                Ok(pkcs7_unpad(&padded, TEA_BLOCK_SIZE)
                    .map_primitive_err()?
                    .to_vec())
            }
        }
    }
}
