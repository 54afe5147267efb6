//! High-level TEA encryption for the teacrypt library
//!
//! This crate sits between a caller's external representation (key and IV
//! text, a configuration file, raw pixel bytes) and the cipher engine in
//! `teacrypt-algorithms`, and reports failures through the unified API
//! error system.
//!
//! ```
//! use teacrypt_symmetric::{CipherConfig, SymmetricCipher, TeaCipher};
//!
//! let config = CipherConfig::parse(
//!     "cbc\n0123456789abcdeffedcba9876543210\n0001020304050607\nlena.png",
//! )
//! .unwrap();
//! let cipher = TeaCipher::from_config(&config);
//!
//! let ciphertext = cipher.encrypt(&[0x80; 12]).unwrap();
//! assert_eq!(ciphertext.len(), 8 + 16);
//!
//! let plaintext = cipher.decrypt(&ciphertext).unwrap();
//! assert_eq!(&plaintext[..12], &[0x80; 12]);
//! ```

#![forbid(unsafe_code)]

pub mod adapter;
pub mod cipher;
pub mod config;
pub mod error;
pub mod mode;

// Re-export main types for convenience
pub use adapter::{block_from_bytes, block_to_bytes, parse_iv_hex, parse_key_hex};
pub use cipher::{Padding, SymmetricCipher, TeaCipher};
pub use config::CipherConfig;
pub use mode::Mode;

// Re-export the engine types callers hold on to
pub use teacrypt_algorithms::{Iv, TeaKey};

// Re-export the API error system instead of custom error types
pub use teacrypt_api::error::{Error, Result};

// Re-export commonly used validation and error handling utilities
pub use teacrypt_api::error::{validate, ResultExt};
