//! Endianness utility functions
//!
//! The cipher treats every 8-byte chunk as a big-endian `u64` and every
//! 8-hex-digit key group as a big-endian `u32`.

use byteorder::{BigEndian, ByteOrder};

/// Read a big-endian u32 from the first four bytes of `bytes`
///
/// Panics if fewer than four bytes are supplied.
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    BigEndian::read_u32(bytes)
}

/// Convert a u32 from native byte order to big-endian bytes
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Read a big-endian u64 from the first eight bytes of `bytes`
///
/// Panics if fewer than eight bytes are supplied.
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    BigEndian::read_u64(bytes)
}

/// Write `value` as big-endian into the first eight bytes of `out`
pub fn write_u64_be(out: &mut [u8], value: u64) {
    BigEndian::write_u64(out, value);
}

/// Convert a u64 from native byte order to big-endian bytes
pub fn u64_to_be_bytes(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Split a u64 into its high and low 32-bit halves
#[inline(always)]
pub fn split_u64(value: u64) -> (u32, u32) {
    ((value >> 32) as u32, value as u32)
}

/// Join high and low 32-bit halves into a u64 without sign extension
#[inline(always)]
pub fn join_u64(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | (low as u64)
}
