//! Base64 text form of encrypted frames
//!
//! `openssl enc -a` writes standard base64 wrapped at 64 columns, `-a -A`
//! writes a single line. [`encode`] produces the single-line form and
//! [`decode`] accepts both.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::crypto;
use crate::error::Result;

/// Encode bytes as single-line standard base64 with padding
pub fn encode(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Decode standard base64, ignoring ASCII whitespace such as line breaks
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

/// Encrypt `data` and return the frame as base64 text
///
/// Equivalent to `openssl enc -e -aes-256-cbc -md md5 -a -A -k PASSWORD`.
pub fn encrypt_base64(data: &[u8], password: &[u8], salt: Option<&[u8]>) -> Result<String> {
    let frame = crypto::encrypt(data, password, salt)?;
    Ok(encode(&frame))
}

/// Decode base64 text and decrypt the frame it contains
///
/// Equivalent to `openssl enc -d -aes-256-cbc -md md5 -a -k PASSWORD`.
pub fn decrypt_base64(text: &str, password: &[u8]) -> Result<Vec<u8>> {
    let frame = decode(text)?;
    crypto::decrypt(&frame, password)
}
