//! Integration tests for aes256cbc
//!
//! The vectors below were produced with OpenSSL 3:
//! `openssl enc -e -aes-256-cbc -md md5 -k PASSWORD [-a]`

use aes256cbc::crypto::{derive_key_iv, normalize_salt, padded, unpad};
use aes256cbc::{Error, HEADER_LEN, decrypt, decrypt_base64, encrypt, encrypt_base64};

/// `printf hello | openssl enc -e -aes-256-cbc -md md5 -k 123`
const OPENSSL_HELLO_FRAME: [u8; 32] = [
    0x53, 0x61, 0x6c, 0x74, 0x65, 0x64, 0x5f, 0x5f,
    0x4d, 0xd7, 0x7a, 0xf4, 0xb6, 0x3f, 0x84, 0x85,
    0x41, 0xa1, 0xde, 0xc1, 0x65, 0x3b, 0x93, 0x4e,
    0xd5, 0x57, 0x24, 0xc7, 0x0f, 0x58, 0x13, 0x9b,
];

#[test]
fn test_decrypt_openssl_frame() {
    let plaintext = decrypt(&OPENSSL_HELLO_FRAME, b"123").unwrap();
    assert_eq!(plaintext, b"hello");
}

#[test]
fn test_decrypt_openssl_base64() {
    let plaintext = decrypt_base64("U2FsdGVkX19N13r0tj+EhUGh3sFlO5NO1Vckxw9YE5s=", b"123").unwrap();
    assert_eq!(plaintext, b"hello");
}

/// Our frame for the same salt must be what OpenSSL writes for that salt
#[test]
fn test_encrypt_matches_openssl_for_same_salt() {
    let salt = &OPENSSL_HELLO_FRAME[8..16];
    let encrypted = encrypt(b"hello", b"123", Some(salt)).unwrap();
    assert_eq!(encrypted, OPENSSL_HELLO_FRAME.to_vec());
}

/// Block aligned plaintext: `printf 0123456789abcdef | openssl enc ... -S a1b2c3d4e5f60718`
#[test]
fn test_block_aligned_vector() {
    let salt = [0xa1, 0xb2, 0xc3, 0xd4, 0xe5, 0xf6, 0x07, 0x18];
    let expected_ciphertext: [u8; 32] = [
        0x1b, 0xbf, 0xd0, 0xe5, 0x4b, 0x7b, 0xc0, 0x79,
        0x9c, 0x70, 0xa9, 0x95, 0x31, 0x23, 0x50, 0xfa,
        0x24, 0x17, 0xa9, 0x4b, 0xb8, 0xa8, 0xc3, 0x6b,
        0x93, 0xcd, 0xc5, 0xf6, 0x03, 0x91, 0xe1, 0x91,
    ];

    let encrypted = encrypt(b"0123456789abcdef", b"123", Some(&salt)).unwrap();
    assert_eq!(encrypted.len(), HEADER_LEN + 32); // 1 data block + 1 padding block
    assert_eq!(&encrypted[HEADER_LEN..], &expected_ciphertext[..]);

    let decrypted = decrypt(&encrypted, b"123").unwrap();
    assert_eq!(decrypted, b"0123456789abcdef");
}

#[test]
fn test_wrong_password_reports_bad_block() {
    // The last decrypted byte is 0xdb, outside 1..=16
    let err = decrypt(&OPENSSL_HELLO_FRAME, b"124").unwrap_err();
    assert!(matches!(err, Error::BadBlock));
    assert!(err.is_decryption_failure());
}

#[test]
fn test_wrong_password_reports_bad_pad() {
    // The last two decrypted bytes are 0xc0 0x02: a pad length of 2 with a mismatching byte
    let err = decrypt(&OPENSSL_HELLO_FRAME, b"wrong20").unwrap_err();
    assert!(matches!(err, Error::BadPad));
    assert!(err.is_decryption_failure());
}

#[test]
fn test_not_a_frame() {
    let data = b"this is plain text, not a salted frame";
    assert!(matches!(decrypt(data, b"123"), Err(Error::BadSalt)));
    assert!(matches!(decrypt(&data[..16], b"123"), Err(Error::BadSalt)));
    assert!(matches!(decrypt(&data[..15], b"123"), Err(Error::BadBlock)));
}

#[test]
fn test_truncated_frame() {
    let truncated = &OPENSSL_HELLO_FRAME[..HEADER_LEN + 8];
    assert!(matches!(decrypt(truncated, b"123"), Err(Error::BadBlock)));
}

#[test]
fn test_roundtrip_various() {
    let cases: [&[u8]; 5] = [
        b"",
        b"a",
        b"exactly sixteen!",
        "Проверка UTF8".as_bytes(),
        &[0u8; 1000],
    ];
    let salts: [Option<&[u8]>; 4] = [None, Some(b""), Some(b"abc"), Some(b"0123456789")];

    for data in cases {
        for salt in salts {
            let encrypted = encrypt(data, b"password", salt).unwrap();
            assert_eq!(decrypt(&encrypted, b"password").unwrap(), data);
        }
    }
}

#[test]
fn test_base64_roundtrip() {
    let text = encrypt_base64(b"hello\n", b"PASSWORD", None).unwrap();
    assert_eq!(decrypt_base64(&text, b"PASSWORD").unwrap(), b"hello\n");
}

#[test]
fn test_salt_normalization_boundary() {
    let a = derive_key_iv(b"pwd", &normalize_salt(b"12345678x"));
    let b = derive_key_iv(b"pwd", &normalize_salt(b"12345678y"));
    assert_eq!(a, b);

    let c = derive_key_iv(b"pwd", &normalize_salt(b"1234567x"));
    assert_ne!(a, c);
}

#[test]
fn test_padding_public_api() {
    let out = padded(&[7u8; 16]);
    assert_eq!(out.len(), 32);
    assert_eq!(unpad(&out).unwrap(), &[7u8; 16][..]);
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let data = vec![i as u8; 100 * i + 1];
                let encrypted = encrypt(&data, b"shared", None).unwrap();
                assert_eq!(decrypt(&encrypted, b"shared").unwrap(), data);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
