// src/engine.rs
//! One-shot AES-CBC/PKCS7 transforms
//!
//! Everything cryptographic happens in the RustCrypto `aes` + `cbc`
//! crates; this module only validates sizes, dispatches on the key
//! size and maps the engine's errors onto [`CryptoError`]. A fresh
//! cipher context is built per call — nothing is shared, so one
//! facade instance can serve concurrent calls without locking.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};

use crate::consts::{AES_BLOCK_SIZE_BITS, SUPPORTED_KEY_SIZES_BITS};
use crate::error::{CryptoError, Result};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Reject cipher parameters AES can never satisfy.
pub(crate) fn check_params(block_size_bits: usize, key_size_bits: usize) -> Result<()> {
    if block_size_bits != AES_BLOCK_SIZE_BITS {
        return Err(CryptoError::UnsupportedSize {
            what: "block",
            bits: block_size_bits,
        });
    }
    if !SUPPORTED_KEY_SIZES_BITS.contains(&key_size_bits) {
        return Err(CryptoError::UnsupportedSize {
            what: "key",
            bits: key_size_bits,
        });
    }
    Ok(())
}

/// Check decoded IV/key lengths against the configured sizes.
pub(crate) fn check_material(
    block_size_bits: usize,
    key_size_bits: usize,
    iv: &[u8],
    key: &[u8],
) -> Result<()> {
    check_params(block_size_bits, key_size_bits)?;
    let iv_len = block_size_bits / 8;
    if iv.len() != iv_len {
        return Err(CryptoError::SizeMismatch {
            what: "IV",
            expected: iv_len,
            actual: iv.len(),
        });
    }
    let key_len = key_size_bits / 8;
    if key.len() != key_len {
        return Err(CryptoError::SizeMismatch {
            what: "key",
            expected: key_len,
            actual: key.len(),
        });
    }
    Ok(())
}

/// PKCS7-pad and CBC-encrypt the full payload. All-or-nothing.
pub(crate) fn encrypt(
    block_size_bits: usize,
    key_size_bits: usize,
    iv: &[u8],
    key: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    check_material(block_size_bits, key_size_bits, iv, key)?;
    let ciphertext = match key_size_bits {
        128 => new_cipher::<Aes128CbcEnc>(key, iv)?.encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        192 => new_cipher::<Aes192CbcEnc>(key, iv)?.encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        256 => new_cipher::<Aes256CbcEnc>(key, iv)?.encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        _ => unreachable!("checked by check_material"),
    };
    Ok(ciphertext)
}

/// CBC-decrypt and strip PKCS7 padding. All-or-nothing.
pub(crate) fn decrypt(
    block_size_bits: usize,
    key_size_bits: usize,
    iv: &[u8],
    key: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    check_material(block_size_bits, key_size_bits, iv, key)?;
    let block_len = block_size_bits / 8;
    if ciphertext.is_empty() || ciphertext.len() % block_len != 0 {
        return Err(CryptoError::Transform(format!(
            "ciphertext length {} is not a positive multiple of the {block_len}-byte block",
            ciphertext.len()
        )));
    }
    let plaintext = match key_size_bits {
        128 => new_cipher::<Aes128CbcDec>(key, iv)?.decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        192 => new_cipher::<Aes192CbcDec>(key, iv)?.decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        256 => new_cipher::<Aes256CbcDec>(key, iv)?.decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        _ => unreachable!("checked by check_material"),
    };
    plaintext.map_err(|_| CryptoError::Transform("bad PKCS7 padding".into()))
}

fn new_cipher<C: KeyIvInit>(key: &[u8], iv: &[u8]) -> Result<C> {
    C::new_from_slices(key, iv).map_err(|_| CryptoError::Transform("cipher rejected key/IV".into()))
}
