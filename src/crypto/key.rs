//! Key derivation for AES-256 encryption
//!
//! Implements OpenSSL's `EVP_BytesToKey` with MD5 and a single round, which is
//! what `openssl enc -aes-256-cbc -md md5 -k PASSWORD` uses:
//! 1. `D_1 = MD5(password || salt)`
//! 2. `D_i = MD5(D_{i-1} || password || salt)`
//! 3. Concatenate digests until 48 bytes are available
//! 4. First 32 bytes are the AES key, next 16 bytes the CBC IV

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::md5::{MD5_LENGTH, md5_concat};
use crate::error::{Error, Result};
use crate::{IV_LEN, KEY_LEN, SALT_LEN};

/// Length of the derived key material (key followed by IV)
const DERIVED_LENGTH: usize = KEY_LEN + IV_LEN;

/// AES-256 key and CBC IV derived from a password and salt
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKey {
    pub key: [u8; KEY_LEN],
    pub iv: [u8; IV_LEN],
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}

/// Derive the AES-256 key and IV from `password` and an 8-byte `salt`
///
/// The output is byte-identical to OpenSSL for the same inputs.
///
/// # Example
///
/// ```
/// use aes256cbc::crypto::derive_key_iv;
///
/// let derived = derive_key_iv(b"123", &[1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(derived.key[..4], [0xb1u8, 0x1e, 0x8c, 0xa0]);
/// assert_eq!(derived.iv[..4], [0xcau8, 0x79, 0xd6, 0xed]);
/// ```
pub fn derive_key_iv(password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut material = Vec::with_capacity(DERIVED_LENGTH + MD5_LENGTH);
    let mut prev = [0u8; MD5_LENGTH];
    let mut prev_len = 0;

    while material.len() < DERIVED_LENGTH {
        prev = md5_concat(&[&prev[..prev_len], password, salt]);
        prev_len = MD5_LENGTH;
        material.extend_from_slice(&prev);
    }

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&material[..KEY_LEN]);
    iv.copy_from_slice(&material[KEY_LEN..DERIVED_LENGTH]);

    DerivedKey { key, iv }
}

/// Bring a caller-supplied salt to exactly 8 bytes
///
/// Shorter salts are padded with zero bytes, longer ones keep their first 8 bytes.
pub fn normalize_salt(salt: &[u8]) -> [u8; SALT_LEN] {
    let mut out = [0u8; SALT_LEN];
    let len = std::cmp::min(salt.len(), SALT_LEN);
    out[..len].copy_from_slice(&salt[..len]);
    out
}

/// Draw a fresh salt from the operating system's secure random source
pub fn random_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| Error::RandomSource(e.to_string()))?;
    Ok(salt)
}
