//! AES-256-CBC encryption and decryption
//!
//! This module produces and consumes the exact format of
//! `openssl enc -aes-256-cbc -md md5 -k PASSWORD`:
//! - Key and IV derived from password and salt with MD5 (`EVP_BytesToKey`)
//! - `Salted__` + salt header in front of the ciphertext
//! - AES-256-CBC over the PKCS#7 padded plaintext
//!
//! **IMPORTANT**: the format has no integrity tag and the key derivation has
//! no work factor. Both are required for OpenSSL compatibility.

use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cbc::{Decryptor, Encryptor};
use log::{debug, trace};

use super::frame::{build_header, parse_frame};
use super::key::{DerivedKey, derive_key_iv, normalize_salt, random_salt};
use super::padding::{pad, pad_len, unpad};
use crate::error::{Error, Result};
use crate::{BLOCK_SIZE, HEADER_LEN};

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// Encrypt `data` with `password` into an OpenSSL "Salted__" frame
///
/// # Arguments
///
/// * `data` - The bytes to encrypt, any length
/// * `password` - The password, used byte for byte
/// * `salt` - Salt to use. `None` or an empty slice draws 8 random bytes;
///   shorter salts are zero padded and longer ones truncated to 8 bytes
///
/// # Returns
///
/// `"Salted__" || salt || ciphertext`, where the ciphertext is a positive
/// multiple of 16 bytes.
///
/// # Example
///
/// ```
/// let frame = aes256cbc::encrypt(b"hello", b"123", Some(b"saltsalt")).unwrap();
/// assert_eq!(&frame[..16], b"Salted__saltsalt");
/// assert_eq!(frame.len(), 32);
/// ```
pub fn encrypt(data: &[u8], password: &[u8], salt: Option<&[u8]>) -> Result<Vec<u8>> {
    let salt = match salt {
        Some(salt) if !salt.is_empty() => normalize_salt(salt),
        _ => {
            trace!("no salt supplied, drawing one from the OS random source");
            random_salt()?
        }
    };

    let derived = derive_key_iv(password, &salt);

    let mut out = Vec::with_capacity(HEADER_LEN + data.len() + pad_len(data.len()));
    out.extend_from_slice(&build_header(&salt));
    out.extend_from_slice(data);
    // The header is exactly one block, so this pads the data region
    pad(&mut out);

    encrypt_region(&mut out[HEADER_LEN..], &derived).inspect_err(|e| {
        debug!("encryption failed: {}", e);
    })?;

    debug!(
        "encrypted {} bytes into a {} byte frame",
        data.len(),
        out.len()
    );
    Ok(out)
}

/// Decrypt an OpenSSL "Salted__" frame with `password`
///
/// Nothing is returned on failure; a wrong password shows up as a padding
/// error (`BadPad` or `BadBlock`) with overwhelming probability.
///
/// # Example
///
/// ```
/// let frame = aes256cbc::encrypt(b"hello", b"123", None).unwrap();
/// assert_eq!(aes256cbc::decrypt(&frame, b"123").unwrap(), b"hello");
/// ```
pub fn decrypt(data: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    decrypt_frame(data, password).inspect_err(|e| {
        debug!("decryption of {} byte frame failed: {}", data.len(), e);
    })
}

fn decrypt_frame(data: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    if data.len() < HEADER_LEN {
        return Err(Error::BadBlock);
    }

    let (salt, ciphertext) = parse_frame(data)?;
    let derived = derive_key_iv(password, &salt);

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::BadBlock);
    }

    let mut buffer = ciphertext.to_vec();
    decrypt_region(&mut buffer, &derived)?;

    let plain_len = unpad(&buffer)?.len();
    buffer.truncate(plain_len);

    debug!(
        "decrypted {} byte frame into {} bytes",
        data.len(),
        buffer.len()
    );
    Ok(buffer)
}

/// CBC-encrypt a block-aligned region in place
fn encrypt_region(region: &mut [u8], derived: &DerivedKey) -> Result<()> {
    let len = region.len();
    Aes256CbcEnc::new_from_slices(&derived.key, &derived.iv)
        .map_err(|e| Error::Key(e.to_string()))?
        .encrypt_padded_mut::<NoPadding>(region, len)
        .map_err(|_| Error::BadBlock)?;
    Ok(())
}

/// CBC-decrypt a block-aligned region in place
fn decrypt_region(region: &mut [u8], derived: &DerivedKey) -> Result<()> {
    Aes256CbcDec::new_from_slices(&derived.key, &derived.iv)
        .map_err(|e| Error::Key(e.to_string()))?
        .decrypt_padded_mut::<NoPadding>(region)
        .map_err(|_| Error::BadBlock)?;
    Ok(())
}
