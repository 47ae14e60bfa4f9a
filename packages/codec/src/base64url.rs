//! Base64url transcoding (RFC 7515 §2): URL-safe alphabet, no `=` padding on the wire.

use crate::error::{JwtError, JwtResult};
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::URL_SAFE_NO_PAD},
};

/// Decoder used after padding has been restored. Non-zero trailing bits are
/// tolerated, as the common browser decoders do.
const PADDED_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Encode bytes as unpadded base64url
#[inline]
#[must_use]
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded (or already padded) base64url into bytes
///
/// # Errors
/// Returns [`JwtError::Decode`] for characters outside the base64url alphabet or
/// an impossible length.
pub fn decode_to_bytes(input: &str) -> JwtResult<Vec<u8>> {
    PADDED_URL_SAFE
        .decode(restore_padding(input))
        .map_err(|e| JwtError::decode(format!("invalid base64url: {e}")))
}

/// Encode a UTF-8 string as unpadded base64url
#[inline]
#[must_use]
pub fn encode_utf8(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode base64url into a UTF-8 string
///
/// # Errors
/// Returns [`JwtError::Decode`] when the base64url is invalid or the bytes are not UTF-8.
pub fn decode_to_utf8(input: &str) -> JwtResult<String> {
    let bytes = decode_to_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| JwtError::decode(format!("invalid UTF-8: {e}")))
}

fn restore_padding(input: &str) -> String {
    let missing = (4 - input.len() % 4) % 4;
    let mut padded = String::with_capacity(input.len() + missing);
    padded.push_str(input);
    padded.push_str(&"=".repeat(missing));
    padded
}
