//! Constants for the TEA block cipher and its modes of operation

/// TEA key schedule constant, derived from the golden ratio
pub const TEA_DELTA: u32 = 0x9E37_79B9;

/// Number of Feistel rounds used unless a caller asks otherwise
pub const TEA_DEFAULT_ROUNDS: u32 = 32;

/// TEA block size in bytes (64 bits)
pub const TEA_BLOCK_SIZE: usize = 8;

/// Number of 32-bit words in a TEA key
pub const TEA_KEY_WORDS: usize = 4;

/// TEA key size in bytes (128 bits)
pub const TEA_KEY_SIZE: usize = TEA_KEY_WORDS * 4;

/// CBC initialization vector size in bytes
pub const TEA_IV_SIZE: usize = TEA_BLOCK_SIZE;

/// Hex digits in a fully zero-padded key string
pub const TEA_KEY_HEX_DIGITS: usize = TEA_KEY_SIZE * 2;

/// Hex digits in a fully zero-padded IV string
pub const TEA_IV_HEX_DIGITS: usize = TEA_IV_SIZE * 2;
