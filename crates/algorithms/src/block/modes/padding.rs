//! Padding schemes
//!
//! The legacy zero padding differs between the two modes: ECB computes
//! `8 - len % 8` without special-casing an aligned buffer, so it always adds
//! between one and eight zero bytes, while CBC pads only unaligned input.
//! Zero padding cannot be removed unambiguously; PKCS#7 is provided as the
//! explicit alternative that can.

use teacrypt_params::TEA_BLOCK_SIZE;

use crate::error::{validate, Error, Result};

/// Length of `len` bytes after ECB zero padding
pub fn ecb_padded_len(len: usize) -> usize {
    len + (TEA_BLOCK_SIZE - len % TEA_BLOCK_SIZE)
}

/// Length of `len` bytes after CBC zero padding
pub fn cbc_padded_len(len: usize) -> usize {
    match len % TEA_BLOCK_SIZE {
        0 => len,
        rem => len + (TEA_BLOCK_SIZE - rem),
    }
}

/// Zero-pad for ECB, appending a whole zero block to aligned input
pub fn ecb_zero_pad(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ecb_padded_len(data.len()));
    out.extend_from_slice(data);
    out.resize(ecb_padded_len(data.len()), 0);
    out
}

/// Zero-pad for CBC, leaving aligned input untouched
pub fn cbc_zero_pad(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(cbc_padded_len(data.len()));
    out.extend_from_slice(data);
    out.resize(cbc_padded_len(data.len()), 0);
    out
}

/// PKCS#7 pad to a multiple of `block_size`
///
/// Always adds between 1 and `block_size` bytes, each equal to the pad length.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "PKCS#7 block size must be between 1 and 255",
    )?;

    let pad = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    Ok(out)
}

/// Strip PKCS#7 padding, validating every pad byte
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "PKCS#7 block size must be between 1 and 255",
    )?;
    validate::block_multiple("PKCS#7 padded data", data.len(), block_size)?;

    let pad = match data.last() {
        Some(&b) => b as usize,
        None => {
            return Err(Error::Length {
                context: "PKCS#7 padded data",
                expected: block_size,
                actual: 0,
            })
        }
    };
    if pad == 0 || pad > block_size || data[data.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(Error::Processing {
            operation: "PKCS#7 unpad",
            details: "malformed padding",
        });
    }
    Ok(&data[..data.len() - pad])
}
