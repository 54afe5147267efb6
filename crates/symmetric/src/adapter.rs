//! Byte stream adapter
//!
//! Marshals the caller's external representations into the engine's:
//! key and IV text into [`TeaKey`] and [`Iv`], and 8-byte chunks into the
//! big-endian `u64` blocks the cipher operates on. Nothing here performs
//! cryptography.
//!
//! Key and IV text is hexadecimal. Surrounding whitespace and an optional
//! `0x` prefix are ignored, and the digits are zero-padded on the left to
//! the full width (32 digits for a key, 16 for an IV). Decimal-looking text
//! such as `1234` is read digit for digit as hex.

use teacrypt_algorithms::{Iv, TeaKey};
use teacrypt_internal::endian;
use teacrypt_params::{TEA_BLOCK_SIZE, TEA_IV_HEX_DIGITS, TEA_KEY_HEX_DIGITS};

use crate::error::{validate, Error, Result, ResultExt, SymmetricResultExt};

fn invalid_key(context: &'static str, message: String) -> Error {
    Error::InvalidKey { context, message }
}

fn invalid_config(context: &'static str, message: String) -> Error {
    Error::config(context, message)
}

/// Strip and left-pad hex text to exactly `digits` digits
///
/// Failures are built with `invalid` under the context "hex text"; callers
/// re-tag them with their own context.
fn normalize_hex(
    text: &str,
    digits: usize,
    invalid: fn(&'static str, String) -> Error,
) -> Result<String> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if body.is_empty() {
        return Err(invalid("hex text", "value is empty".to_string()));
    }
    if let Some(bad) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid(
            "hex text",
            format!("'{}' is not a hexadecimal digit", bad),
        ));
    }
    if body.len() > digits {
        return Err(invalid(
            "hex text",
            format!("at most {} hex digits allowed, got {}", digits, body.len()),
        ));
    }

    Ok(format!("{:0>width$}", body, width = digits))
}

/// Parse a key from up to 32 hex digits
///
/// The padded digits split into four 8-digit words, most significant first.
///
/// ```
/// use teacrypt_symmetric::adapter::parse_key_hex;
///
/// let key = parse_key_hex("0x1").unwrap();
/// assert_eq!(key.words(), &[0, 0, 0, 1]);
/// ```
pub fn parse_key_hex(text: &str) -> Result<TeaKey> {
    let digits = normalize_hex(text, TEA_KEY_HEX_DIGITS, invalid_key).with_context("TEA key")?;
    let bytes = hex::decode(&digits).map_err(|e| invalid_key("TEA key", e.to_string()))?;
    TeaKey::from_bytes(&bytes).map_primitive_err()
}

/// Parse an IV from up to 16 hex digits
pub fn parse_iv_hex(text: &str) -> Result<Iv> {
    let digits = normalize_hex(text, TEA_IV_HEX_DIGITS, invalid_config)
        .with_context("initialization vector")?;
    let bytes = hex::decode(&digits)
        .map_err(|e| Error::config("initialization vector", e.to_string()))?;
    Iv::from_slice(&bytes).map_primitive_err()
}

/// Format a key as 32 lowercase hex digits
pub fn key_to_hex(key: &TeaKey) -> String {
    hex::encode(key.to_bytes())
}

/// Format an IV as 16 lowercase hex digits
pub fn iv_to_hex(iv: &Iv) -> String {
    hex::encode(&iv[..])
}

/// Read one big-endian block from exactly eight bytes
pub fn block_from_bytes(bytes: &[u8]) -> Result<u64> {
    validate::length("TEA block", bytes.len(), TEA_BLOCK_SIZE)?;
    Ok(endian::u64_from_be_bytes(bytes))
}

/// Write one block as eight big-endian bytes
pub fn block_to_bytes(block: u64) -> [u8; TEA_BLOCK_SIZE] {
    endian::u64_to_be_bytes(block)
}

/// Split a block-aligned buffer into big-endian blocks
pub fn blocks_from_bytes(bytes: &[u8]) -> Result<Vec<u64>> {
    if bytes.len() % TEA_BLOCK_SIZE != 0 {
        return Err(Error::InvalidLength {
            context: "block buffer",
            expected: (bytes.len() / TEA_BLOCK_SIZE + 1) * TEA_BLOCK_SIZE,
            actual: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(TEA_BLOCK_SIZE)
        .map(endian::u64_from_be_bytes)
        .collect())
}

/// Concatenate blocks back into bytes
pub fn blocks_to_bytes(blocks: &[u64]) -> Vec<u8> {
    let mut out = vec![0u8; blocks.len() * TEA_BLOCK_SIZE];
    for (chunk, &block) in out.chunks_exact_mut(TEA_BLOCK_SIZE).zip(blocks) {
        endian::write_u64_be(chunk, block);
    }
    out
}
