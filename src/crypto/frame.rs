//! OpenSSL "Salted__" frame
//!
//! Layout written by `openssl enc` when a password is used:
//!
//! ```text
//! offset 0  : "Salted__"
//! offset 8  : salt (8 bytes)
//! offset 16 : ciphertext (multiple of 16 bytes)
//! ```

use crate::error::{Error, Result};
use crate::{HEADER_LEN, SALT_LEN, SALT_MAGIC};

/// Build the 16-byte header that precedes the ciphertext
pub fn build_header(salt: &[u8; SALT_LEN]) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[..SALT_MAGIC.len()].copy_from_slice(SALT_MAGIC);
    header[SALT_MAGIC.len()..].copy_from_slice(salt);
    header
}

/// Split a frame into its salt and the ciphertext region that follows the header
///
/// The ciphertext region is returned untouched; its length is not validated here.
pub fn parse_frame(data: &[u8]) -> Result<([u8; SALT_LEN], &[u8])> {
    if data.len() < HEADER_LEN {
        return Err(Error::BadBlock);
    }

    let (magic, rest) = data.split_at(SALT_MAGIC.len());
    if magic != SALT_MAGIC {
        return Err(Error::BadSalt);
    }

    let (salt_bytes, ciphertext) = rest.split_at(SALT_LEN);
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(salt_bytes);

    Ok((salt, ciphertext))
}
