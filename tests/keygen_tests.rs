// tests/keygen_tests.rs
mod support;
use support::{IV_B64, KEY_B64};

use simple_aes::{AesCipher, CryptoError, kdf};

#[test]
fn test_generated_material_has_configured_lengths() {
    let aes = AesCipher::new();
    let material = aes.generate_key_pair().unwrap();

    // 16 bytes → 24 chars, 32 bytes → 44 chars in padded base64
    assert_eq!(material.iv.len(), 24);
    assert_eq!(material.key.len(), 44);

    assert_eq!(IV_B64.len(), 24);
    assert_eq!(KEY_B64.len(), 44);
}

#[test]
fn test_generated_pairs_are_random() {
    let aes = AesCipher::new();
    let a = aes.generate_key_pair().unwrap();
    let b = aes.generate_key_pair().unwrap();
    assert_ne!(a.iv, b.iv);
    assert_ne!(a.key, b.key);
    assert_ne!(aes.generate_iv().unwrap(), aes.generate_iv().unwrap());
}

#[test]
fn test_derivation_is_deterministic() {
    let aes = AesCipher::new();
    let first = aes.derive_key_pair("correct horse", "battery staple");
    let second = aes.derive_key_pair("correct horse", "battery staple");
    assert_eq!(first, second);

    let other = aes.derive_key_pair("correct horse", "tr0ub4dor");
    assert_eq!(other.iv, first.iv);
    assert_ne!(other.key, first.key);
}

#[test]
fn test_derivation_golden_values() {
    // PBKDF2-HMAC-SHA1, password as its own salt, 1000 rounds
    let aes = AesCipher::new();
    let material = aes.derive_key_pair("correct horse", "battery staple");
    assert_eq!(material.iv, "mlDdG0mh5rTEF3VSBZF4Xw==");
    assert_eq!(material.key, "Qph4Ve8B56BEs3BRZ5cdsA==");

    assert_eq!(aes.derive_iv("correct horse"), "mlDdG0mh5rTEF3VSBZF4Xw==");
    assert_eq!(
        hex::encode(kdf::derive("correct horse", 16).as_slice()),
        "9a50dd1b49a1e6b4c41775520591785f"
    );
}

#[test]
fn test_derived_key_is_block_sized_and_rejected_by_a_256_bit_facade() {
    // The derivation hands back block/8 bytes for the key as well —
    // usable only when the facade expects a 128-bit key.
    let aes = AesCipher::new();
    let material = aes.derive_key_pair("correct horse", "battery staple");
    let result = aes.encrypt_bytes(b"data", &material.iv, &material.key);
    assert!(matches!(
        result,
        Err(CryptoError::SizeMismatch {
            what: "key",
            expected: 32,
            actual: 16,
        })
    ));
}

#[test]
fn test_derived_material_roundtrips_under_a_128_bit_key() {
    let aes = AesCipher::with_key_size(128);
    let material = aes.derive_key_pair("correct horse", "battery staple");

    let ciphertext = aes
        .encrypt_bytes(b"derived-roundtrip", &material.iv, &material.key)
        .unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "076ad1a5c51bd36a42f27a41082c9849aa847e0bb3b4d9c0bd8561e064f468f0"
    );

    let decrypted = aes
        .decrypt_bytes(&ciphertext, &material.iv, &material.key)
        .unwrap();
    assert_eq!(decrypted, b"derived-roundtrip");
}

#[test]
fn test_derived_material_respects_url_safe_framing() {
    let mut aes = AesCipher::new();
    aes.set_url_safe(true);
    let material = aes.derive_key_pair("correct horse", "battery staple");
    assert_eq!(material.iv, "mlDdG0mh5rTEF3VSBZF4Xw");
    assert!(!material.key.contains('='));
}
