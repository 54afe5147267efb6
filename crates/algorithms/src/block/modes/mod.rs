//! Block cipher modes of operation
//!
//! This module implements Electronic Codebook (ECB) and Cipher Block Chaining
//! (CBC) over any [`BlockCipher`](super::BlockCipher), plus the byte-buffer
//! entry points that apply the legacy TEA padding rules:
//!
//! | operation        | padding                                    | output          |
//! |------------------|--------------------------------------------|-----------------|
//! | [`ecb_transform`]| always appends `8 - len % 8` zero bytes    | padded blocks   |
//! | [`cbc_encrypt`]  | zero bytes only when `len % 8 != 0`        | `iv \|\| C1..Cn` |
//! | [`cbc_decrypt`]  | none, padding is not stripped              | `P1..Pn`        |

pub mod cbc;
pub mod ecb;
pub mod padding;

// Re-exports
pub use cbc::{cbc_decrypt, cbc_encrypt, Cbc};
pub use ecb::{ecb_transform, Ecb};

/// Which way a mode transforms its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}
