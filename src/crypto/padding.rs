//! PKCS#7 padding with a 16-byte block
//!
//! Padding is done here rather than by the cipher crate so that each kind of
//! malformed tail maps to its own error.

use crate::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Number of pad bytes needed for `len` bytes of data, always in `1..=16`
pub fn pad_len(len: usize) -> usize {
    BLOCK_SIZE - len % BLOCK_SIZE
}

/// Append PKCS#7 padding to `data` in place
///
/// Block-aligned input still receives a full block of padding.
pub fn pad(data: &mut Vec<u8>) {
    let n = pad_len(data.len());
    data.resize(data.len() + n, n as u8);
}

/// Return a padded copy of `data`
pub fn padded(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + pad_len(data.len()));
    out.extend_from_slice(data);
    pad(&mut out);
    out
}

/// Validate PKCS#7 padding and return `data` without it
///
/// # Errors
///
/// * `BadData` if `data` is empty or not a multiple of the block size
/// * `BadBlock` if the last byte is 0 or larger than the block size
/// * `BadPad` if the pad bytes do not all equal the pad length
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(Error::BadData);
    }

    let n = data[data.len() - 1] as usize;
    if n == 0 || n > BLOCK_SIZE {
        return Err(Error::BadBlock);
    }

    let (body, tail) = data.split_at(data.len() - n);
    if tail.iter().any(|&b| b as usize != n) {
        return Err(Error::BadPad);
    }

    Ok(body)
}
