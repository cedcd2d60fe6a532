// src/encoding.rs
//! Base64 framing for IVs, keys and string-form ciphertext
//!
//! Two alphabets: standard (padded) and URL-safe. URL-safe output
//! carries no `=` padding; URL-safe input is accepted with or
//! without padding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// URL-safe engine: unpadded on encode, padding-indifferent on decode
const URL_SAFE_TOLERANT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Which base64 alphabet frames keys, IVs and string ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Base64Variant {
    /// RFC 4648 standard alphabet, `=`-padded
    #[default]
    Standard,
    /// `-`/`_` alphabet, no padding — safe in URLs and filenames
    UrlSafe,
}

/// Encode bytes with the given variant
pub fn encode(data: &[u8], variant: Base64Variant) -> String {
    match variant {
        Base64Variant::Standard => STANDARD.encode(data),
        Base64Variant::UrlSafe => URL_SAFE_TOLERANT.encode(data),
    }
}

/// Decode text with the given variant
///
/// Fails with [`crate::CryptoError::Format`] on characters outside the
/// applicable alphabet or an invalid length.
pub fn decode(text: &str, variant: Base64Variant) -> Result<Vec<u8>> {
    let bytes = match variant {
        Base64Variant::Standard => STANDARD.decode(text)?,
        Base64Variant::UrlSafe => URL_SAFE_TOLERANT.decode(text)?,
    };
    Ok(bytes)
}
