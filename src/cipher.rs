// src/cipher.rs
//! The AES facade — configuration, key/IV generation and the
//! encrypt/decrypt surface
//!
//! A facade instance holds exactly two cipher parameters (block size
//! and key size, fixed at construction) plus the base64 framing flag.
//! Mode and padding are constants: CBC with PKCS7. Every operation
//! builds a one-shot cipher context, so instances are freely shared
//! across threads and concurrent calls.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::consts::{AES_BLOCK_SIZE_BITS, DEFAULT_KEY_SIZE_BITS};
use crate::encoding::{self, Base64Variant};
use crate::error::Result;
use crate::{engine, kdf};

/// Payloads above this yield to the runtime around the transform
const YIELD_THRESHOLD: usize = 8 * 1024;

/// An encoded (IV, key) pair ready to hand to encrypt/decrypt calls.
///
/// Nothing here is persisted by this crate — storing and transporting
/// the material is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMaterial {
    pub iv: String,
    pub key: String,
}

/// Thin facade over AES-CBC/PKCS7.
///
/// ```
/// use simple_aes::AesCipher;
///
/// let aes = AesCipher::new();
/// let material = aes.generate_key_pair().unwrap();
/// let secret = aes.encrypt_str("attack at dawn", &material.iv, &material.key).unwrap();
/// let round = aes.decrypt_bytes(
///     &aes.encrypt_bytes(b"attack at dawn", &material.iv, &material.key).unwrap(),
///     &material.iv,
///     &material.key,
/// ).unwrap();
/// assert_eq!(round, b"attack at dawn");
/// # let _ = secret;
/// ```
#[derive(Debug, Clone)]
pub struct AesCipher {
    block_size_bits: usize,
    key_size_bits: usize,
    url_safe: bool,
}

impl Default for AesCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl AesCipher {
    /// 128-bit block, 256-bit key, standard base64 framing
    #[must_use]
    pub fn new() -> Self {
        Self::with_sizes(AES_BLOCK_SIZE_BITS, DEFAULT_KEY_SIZE_BITS)
    }

    /// 128-bit block with an explicit key size (128, 192 or 256 bits)
    #[must_use]
    pub fn with_key_size(key_size_bits: usize) -> Self {
        Self::with_sizes(AES_BLOCK_SIZE_BITS, key_size_bits)
    }

    /// Explicit block and key sizes.
    ///
    /// Sizes are not validated here; operations fail fast with
    /// [`crate::CryptoError::UnsupportedSize`] when the engine cannot
    /// satisfy them (AES only defines 128-bit blocks).
    #[must_use]
    pub fn with_sizes(block_size_bits: usize, key_size_bits: usize) -> Self {
        Self {
            block_size_bits,
            key_size_bits,
            url_safe: false,
        }
    }

    /// Switch between standard base64 (`false`, default) and
    /// unpadded base64url (`true`) framing for keys, IVs and
    /// string-form ciphertext.
    pub fn set_url_safe(&mut self, enabled: bool) {
        self.url_safe = enabled;
    }

    fn variant(&self) -> Base64Variant {
        if self.url_safe {
            Base64Variant::UrlSafe
        } else {
            Base64Variant::Standard
        }
    }

    fn encode(&self, data: &[u8]) -> String {
        encoding::encode(data, self.variant())
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        encoding::decode(text, self.variant())
    }

    // ── key / IV generation ─────────────────────────────────────

    /// Generate a random IV/key pair of the configured sizes, encoded.
    pub fn generate_key_pair(&self) -> Result<KeyMaterial> {
        engine::check_params(self.block_size_bits, self.key_size_bits)?;
        let mut iv = vec![0u8; self.block_size_bits / 8];
        let mut key = Zeroizing::new(vec![0u8; self.key_size_bits / 8]);
        rand::rng().fill_bytes(&mut iv);
        rand::rng().fill_bytes(&mut key);
        Ok(KeyMaterial {
            iv: self.encode(&iv),
            key: self.encode(&key),
        })
    }

    /// Derive an IV/key pair from two passwords, deterministically.
    ///
    /// The IV comes from `iv_password`, the key from `key_password`;
    /// both are `block_size / 8` bytes long, exactly as the original
    /// derivation produced them. With the default 256-bit key
    /// configuration the derived key is therefore 16 bytes and the
    /// engine rejects it at use time — construct the facade with
    /// [`AesCipher::with_key_size`]`(128)` when encrypting under
    /// derived keys. See [`crate::kdf`]'s caveats before treating any
    /// of this as secure derivation.
    #[must_use]
    pub fn derive_key_pair(&self, iv_password: &str, key_password: &str) -> KeyMaterial {
        let len = self.block_size_bits / 8;
        let iv = kdf::derive(iv_password, len);
        let key = kdf::derive(key_password, len);
        KeyMaterial {
            iv: self.encode(&iv),
            key: self.encode(&key),
        }
    }

    /// Generate a random IV of the configured block size, encoded.
    pub fn generate_iv(&self) -> Result<String> {
        engine::check_params(self.block_size_bits, self.key_size_bits)?;
        let mut iv = vec![0u8; self.block_size_bits / 8];
        rand::rng().fill_bytes(&mut iv);
        Ok(self.encode(&iv))
    }

    /// Derive an IV from a password, deterministically.
    #[must_use]
    pub fn derive_iv(&self, password: &str) -> String {
        let iv = kdf::derive(password, self.block_size_bits / 8);
        self.encode(&iv)
    }

    // ── synchronous transforms ──────────────────────────────────

    /// Encrypt a UTF-8 string (no byte-order mark is added) and
    /// return the ciphertext encoded with the configured variant.
    pub fn encrypt_str(&self, value: &str, iv: &str, key: &str) -> Result<String> {
        let ciphertext = self.encrypt_bytes(value.as_bytes(), iv, key)?;
        Ok(self.encode(&ciphertext))
    }

    /// Encrypt raw bytes. Returns raw ciphertext bytes — unlike the
    /// string form, no base64 framing is applied.
    pub fn encrypt_bytes(&self, data: &[u8], iv: &str, key: &str) -> Result<Vec<u8>> {
        let iv_bytes = self.decode(iv)?;
        let key_bytes = Zeroizing::new(self.decode(key)?);
        debug!(len = data.len(), "encrypting payload");
        engine::encrypt(
            self.block_size_bits,
            self.key_size_bits,
            &iv_bytes,
            &key_bytes,
            data,
        )
    }

    /// Decrypt base64-framed ciphertext and return the decrypted
    /// bytes RE-ENCODED with the configured variant.
    ///
    /// This is not a typo: the synchronous string form has always
    /// returned base64 of the plaintext bytes, not the plaintext
    /// itself, and callers depend on it. Use
    /// [`AesCipher::decrypt_str_async`] for the decoded text, or
    /// decode the returned base64 yourself.
    pub fn decrypt_str(&self, value: &str, iv: &str, key: &str) -> Result<String> {
        let ciphertext = self.decode(value)?;
        let plaintext = self.decrypt_bytes(&ciphertext, iv, key)?;
        Ok(self.encode(&plaintext))
    }

    /// Decrypt raw ciphertext bytes.
    pub fn decrypt_bytes(&self, data: &[u8], iv: &str, key: &str) -> Result<Vec<u8>> {
        let iv_bytes = self.decode(iv)?;
        let key_bytes = Zeroizing::new(self.decode(key)?);
        debug!(len = data.len(), "decrypting payload");
        engine::decrypt(
            self.block_size_bits,
            self.key_size_bits,
            &iv_bytes,
            &key_bytes,
            data,
        )
    }

    // ── asynchronous transforms ─────────────────────────────────
    //
    // Identical transforms; large payloads yield to the runtime on
    // either side of the cipher call so a busy executor is not
    // starved. No cancellation — wrap the future externally if you
    // need a timeout.

    /// Async form of [`AesCipher::encrypt_str`].
    pub async fn encrypt_str_async(&self, value: &str, iv: &str, key: &str) -> Result<String> {
        let ciphertext = self.encrypt_bytes_async(value.as_bytes(), iv, key).await?;
        Ok(self.encode(&ciphertext))
    }

    /// Async form of [`AesCipher::encrypt_bytes`].
    pub async fn encrypt_bytes_async(&self, data: &[u8], iv: &str, key: &str) -> Result<Vec<u8>> {
        yield_for(data.len()).await;
        let ciphertext = self.encrypt_bytes(data, iv, key)?;
        yield_for(ciphertext.len()).await;
        Ok(ciphertext)
    }

    /// Decrypt base64-framed ciphertext and return the plaintext as
    /// text (invalid UTF-8 becomes replacement characters).
    ///
    /// Unlike [`AesCipher::decrypt_str`], this returns the decoded
    /// text itself — the two forms are deliberately NOT equivalent.
    pub async fn decrypt_str_async(&self, value: &str, iv: &str, key: &str) -> Result<String> {
        let ciphertext = self.decode(value)?;
        let plaintext = self.decrypt_bytes_async(&ciphertext, iv, key).await?;
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }

    /// Async form of [`AesCipher::decrypt_bytes`].
    pub async fn decrypt_bytes_async(&self, data: &[u8], iv: &str, key: &str) -> Result<Vec<u8>> {
        yield_for(data.len()).await;
        let plaintext = self.decrypt_bytes(data, iv, key)?;
        yield_for(plaintext.len()).await;
        Ok(plaintext)
    }

    // ── validation ──────────────────────────────────────────────

    /// `true` if the string-form ciphertext decrypts under this
    /// IV/key. Never fails — any error becomes `false`.
    #[must_use]
    pub fn validate_encrypted_str(&self, value: &str, iv: &str, key: &str) -> bool {
        self.decrypt_str(value, iv, key).is_ok()
    }

    /// `true` if the raw ciphertext decrypts under this IV/key.
    #[must_use]
    pub fn validate_encrypted_bytes(&self, data: &[u8], iv: &str, key: &str) -> bool {
        self.decrypt_bytes(data, iv, key).is_ok()
    }

    /// Async form of [`AesCipher::validate_encrypted_str`].
    pub async fn validate_encrypted_str_async(&self, value: &str, iv: &str, key: &str) -> bool {
        self.decrypt_str_async(value, iv, key).await.is_ok()
    }

    /// Async form of [`AesCipher::validate_encrypted_bytes`].
    pub async fn validate_encrypted_bytes_async(&self, data: &[u8], iv: &str, key: &str) -> bool {
        self.decrypt_bytes_async(data, iv, key).await.is_ok()
    }
}

async fn yield_for(len: usize) {
    if len > YIELD_THRESHOLD {
        tokio::task::yield_now().await;
    }
}
