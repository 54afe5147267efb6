//! # teacrypt
//!
//! The Tiny Encryption Algorithm (TEA) with ECB and CBC modes of operation,
//! reproducing a legacy image-encryption tool bit for bit.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! teacrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): the block cipher engine and modes of operation
//! - `symmetric` (default): key/IV text parsing, configuration and [`TeaCipher`](symmetric::TeaCipher)
//! - `rand`: re-export `rand` with OS randomness for key and IV generation
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`teacrypt-api`]: unified error type
//! - [`teacrypt-params`]: algorithm constants
//! - [`teacrypt-algorithms`]: TEA, ECB and CBC
//! - [`teacrypt-symmetric`]: high-level cipher and configuration
//!
//! ## Example
//!
//! ```
//! use teacrypt::prelude::*;
//!
//! let key = parse_key_hex("0123456789abcdeffedcba9876543210")?;
//! let iv = parse_iv_hex("0001020304050607")?;
//! let cipher = TeaCipher::cbc(key, iv);
//!
//! let ciphertext = cipher.encrypt(b"grayscale pixels")?;
//! assert_eq!(cipher.decrypt(&ciphertext)?, b"grayscale pixels");
//! # Ok::<(), teacrypt::prelude::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use teacrypt_api as api;
pub use teacrypt_internal as internal;
pub use teacrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use teacrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use teacrypt_symmetric as symmetric;

#[cfg(feature = "rand")]
pub use rand;

pub use zeroize;

/// Common imports for teacrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the engine
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        cbc_decrypt, cbc_encrypt, decrypt_block, ecb_transform, encrypt_block, BlockCipher,
        Direction, Iv, Tea, TeaKey, DEFAULT_ROUNDS,
    };

    // Re-export the high-level API
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        parse_iv_hex, parse_key_hex, CipherConfig, Mode, Padding, SymmetricCipher, TeaCipher,
    };
}
