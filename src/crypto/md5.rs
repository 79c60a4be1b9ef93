//! MD5 digest used by the OpenSSL key derivation
//!
//! OpenSSL's `-md md5` derivation hashes the concatenation of the previous
//! digest, the password and the salt. The parts are fed to the hasher one
//! after another instead of being copied into a scratch buffer.

use md5::{Digest, Md5};

/// MD5 digest length in bytes
pub const MD5_LENGTH: usize = 16;

/// Calculate the MD5 digest of the concatenation of `parts`
pub fn md5_concat(parts: &[&[u8]]) -> [u8; MD5_LENGTH] {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();

    let mut out = [0u8; MD5_LENGTH];
    out.copy_from_slice(&digest);
    out
}
