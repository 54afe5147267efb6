//! Type-safe nonce implementation with generic size parameter
//!
//! CBC uses a one-block nonce as its initialization vector; [`Iv`] is that
//! block-sized specialization.

use core::fmt;
use core::ops::Deref;

use rand::{CryptoRng, RngCore};
use teacrypt_internal::ct_eq;
use teacrypt_internal::endian::{u64_from_be_bytes, u64_to_be_bytes};
use teacrypt_params::TEA_IV_SIZE;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;

/// Generic nonce type with compile-time size guarantee
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

/// A TEA-CBC initialization vector: one 64-bit block
pub type Iv = Nonce<TEA_IV_SIZE>;

// Mark Nonce types as sealed
impl<const N: usize> Sealed for Nonce<N> {}

/// Marker trait for nonces that are usable as a CBC initialization vector
///
/// The size is checked against the cipher's block size when the mode is built.
pub trait CbcCompatible: Sealed {}

impl<const N: usize> CbcCompatible for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    /// Create a new nonce from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed nonce
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Nonce", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random nonce
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the size of this nonce in bytes
    pub fn size() -> usize {
        N
    }
}

impl Nonce<TEA_IV_SIZE> {
    /// Build an IV from a 64-bit block value (big-endian)
    pub fn from_block(block: u64) -> Self {
        Self::new(u64_to_be_bytes(block))
    }

    /// The IV as a 64-bit block value (big-endian)
    pub fn to_block(&self) -> u64 {
        u64_from_be_bytes(&self.data)
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>({:?})", N, &self.data[..])
    }
}
