//! Error types for aes256cbc

use thiserror::Error;

/// Main error type for encryption and decryption
#[derive(Error, Debug)]
pub enum Error {
    /// Input is empty, not block aligned, or shorter than the 16-byte header
    #[error("bad block")]
    BadBlock,

    /// The frame does not start with the `Salted__` magic
    #[error("bad salt")]
    BadSalt,

    /// Decrypted region has an invalid length for PKCS#7 removal
    #[error("bad data")]
    BadData,

    /// Padding bytes disagree with the claimed pad length.
    ///
    /// Almost always caused by a wrong password, occasionally by tampering.
    #[error("bad pad")]
    BadPad,

    /// The secure random source could not supply a salt
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// The cipher rejected the derived key or IV
    #[error("Key error: {0}")]
    Key(String),

    /// Armored text is not valid base64
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A salt given as text could not be parsed
    #[error("Invalid salt: {0}")]
    InvalidSalt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the failures a wrong password or corrupted frame produces.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            Error::BadBlock | Error::BadSalt | Error::BadData | Error::BadPad
        )
    }
}

/// Result type alias for aes256cbc operations
pub type Result<T> = std::result::Result<T, Error>;
