//! TEA block cipher and modes of operation
//!
//! This crate provides the cryptographic core of teacrypt:
//!
//! - [`block::tea`]: the Tiny Encryption Algorithm, a 32-round Feistel
//!   cipher over 64-bit blocks with a 128-bit key
//! - [`block::modes`]: Electronic Codebook and Cipher Block Chaining over
//!   arbitrary byte buffers, with the legacy zero-padding rules
//!
//! The engine reproduces one specific legacy tool's arithmetic exactly.
//! It makes no claim of cryptographic strength or side-channel resistance.
//!
//! ```
//! use teacrypt_algorithms::{cbc_decrypt, cbc_encrypt};
//!
//! let key = [0x0123_4567, 0x89ab_cdef, 0xfedc_ba98, 0x7654_3210];
//! let iv = [0u8, 1, 2, 3, 4, 5, 6, 7];
//!
//! let ciphertext = cbc_encrypt(b"grayscale pixels", &key, &iv).unwrap();
//! assert_eq!(&ciphertext[..8], &iv);
//!
//! let plaintext = cbc_decrypt(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext, b"grayscale pixels");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::modes::{cbc_decrypt, cbc_encrypt, ecb_transform, Cbc, Direction, Ecb};
pub use block::tea::{decrypt_block, encrypt_block, Tea, DEFAULT_ROUNDS};
pub use block::{BlockCipher, CipherAlgorithm};

// Type system
pub mod types;
pub use types::{Iv, Nonce, TeaKey};
