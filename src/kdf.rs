// src/kdf.rs
//! Password-based derivation of IV and key bytes
//!
//! PBKDF2-HMAC-SHA1 with the password's own UTF-8 bytes as the salt
//! and a low, fixed round count. This is NOT secure key derivation —
//! it reproduces, byte for byte, the derivation that existing
//! ciphertext was produced under. Adding an independent salt or a
//! modern hash would orphan all of that data, so the weakness is
//! documented here instead of fixed.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::consts::KDF_ITERATIONS;

/// Derive `length` bytes from `password`, deterministically.
///
/// Identical passwords always yield identical output. The result is
/// zeroed on drop.
pub fn derive(password: &str, length: usize) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; length]);
    pbkdf2_hmac::<Sha1>(
        password.as_bytes(),
        password.as_bytes(),
        KDF_ITERATIONS,
        &mut out,
    );
    out
}
