//! # aes256cbc
//!
//! OpenSSL-compatible AES-256-CBC encryption with password based key derivation.
//!
//! ## Features
//!
//! - Key and IV derivation matching `openssl enc -md md5 -k PASSWORD`
//! - The `Salted__` frame written and read by `openssl enc`
//! - Strict PKCS#7 padding validation
//! - Base64 armor compatible with `openssl enc -a`
//!
//! ## Example
//!
//! ```
//! let frame = aes256cbc::encrypt(b"hello", b"123", None).unwrap();
//! let plaintext = aes256cbc::decrypt(&frame, b"123").unwrap();
//! assert_eq!(plaintext, b"hello");
//!
//! // Output of: printf hello | openssl enc -e -aes-256-cbc -md md5 -a -k 123
//! let text = "U2FsdGVkX19N13r0tj+EhUGh3sFlO5NO1Vckxw9YE5s=";
//! assert_eq!(aes256cbc::decrypt_base64(text, b"123").unwrap(), b"hello");
//! ```

pub mod armor;
pub mod crypto;
pub mod error;

// Re-export main types
pub use armor::{decrypt_base64, encrypt_base64};
pub use crypto::{decrypt, encrypt};
pub use error::{Error, Result};

/// Magic bytes at the start of every frame
pub const SALT_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length
pub const SALT_LEN: usize = 8;

/// Frame header length (magic + salt), one cipher block
pub const HEADER_LEN: usize = SALT_MAGIC.len() + SALT_LEN;

/// AES block size
pub const BLOCK_SIZE: usize = 16;

/// AES-256 key length
pub const KEY_LEN: usize = 32;

/// CBC IV length
pub const IV_LEN: usize = 16;
