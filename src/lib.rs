// src/lib.rs
//! simple-aes — a thin convenience layer over AES-CBC/PKCS7
//!
//! Features:
//! - Random and password-derived key/IV generation, base64-framed
//! - Standard base64 or unpadded base64url framing, per instance
//! - Sync + async encrypt/decrypt for strings and byte slices
//! - Validation helpers that report a bool instead of an error
//!
//! The AES transform itself (block chaining, padding) lives in the
//! RustCrypto `aes`/`cbc` crates; this crate only configures and
//! invokes it. There is no integrity protection — CBC without a MAC
//! detects nothing — and the password derivation exists for
//! compatibility with old data, not for security. See [`kdf`].

pub mod cipher;
pub mod consts;
pub mod encoding;
pub mod error;
pub mod kdf;

mod engine;

// Re-export everything users need at the crate root
pub use cipher::{AesCipher, KeyMaterial};
pub use encoding::Base64Variant;
pub use error::{CryptoError, Result};
