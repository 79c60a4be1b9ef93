//! Cryptographic operations for aes256cbc
//!
//! This module implements AES-256-CBC encryption in the `openssl enc` format,
//! split into key derivation, frame header, PKCS#7 padding and the cipher
//! orchestration that ties them together.

mod aes;
mod frame;
mod key;
mod md5;
mod padding;

pub use aes::{decrypt, encrypt};
pub use frame::{build_header, parse_frame};
pub use key::{DerivedKey, derive_key_iv, normalize_salt, random_salt};
pub use padding::{pad, padded, unpad};
