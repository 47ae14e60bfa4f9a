//! Token structure parsing
//!
//! Decoding answers "what does this token say", never "should it be trusted".
//! It is synchronous and touches no key material, so a presentation layer can
//! call it on every input change.

use crate::{
    base64url,
    error::{JwtError, JwtResult},
    types::{DecodeResult, JsonObject},
};

/// Split a compact token into its three raw segments
pub(crate) fn split_segments(token: &str) -> Result<[&str; 3], usize> {
    let parts: Vec<&str> = token.split('.').collect();
    match parts.as_slice() {
        [header, payload, signature] => Ok([*header, *payload, *signature]),
        _ => Err(parts.len()),
    }
}

/// Base64url-decode one segment and parse it as a JSON object
pub(crate) fn decode_json_segment(segment: &str) -> JwtResult<JsonObject> {
    let json = base64url::decode_to_utf8(segment)?;
    serde_json::from_str::<JsonObject>(&json)
        .map_err(|e| JwtError::decode(format!("invalid JSON: {e}")))
}

/// Decode a token into header, payload and raw signature without verifying it.
///
/// The header is decoded first; if it fails the payload is not attempted.
#[must_use]
pub fn decode(token: &str) -> DecodeResult {
    let token = token.trim();
    if token.is_empty() {
        return DecodeResult::invalid("No token provided");
    }

    let [header_b64, payload_b64, signature] = match split_segments(token) {
        Ok(segments) => segments,
        Err(count) => {
            return DecodeResult::invalid(format!(
                "Invalid JWT structure. Expected 3 parts, got {count}"
            ));
        }
    };

    let header = match decode_json_segment(header_b64) {
        Ok(header) => header,
        Err(e) => return DecodeResult::invalid(format!("Invalid header: {e}")),
    };

    let payload = match decode_json_segment(payload_b64) {
        Ok(payload) => payload,
        Err(e) => {
            return DecodeResult {
                header: Some(header),
                error: Some(format!("Invalid payload: {e}")),
                ..DecodeResult::default()
            };
        }
    };

    DecodeResult {
        header: Some(header),
        payload: Some(payload),
        signature: signature.to_string(),
        is_valid: true,
        error: None,
    }
}

/// Decode only the header segment of a token
///
/// # Errors
/// Returns [`JwtError::Structure`] when the token does not have three segments and
/// [`JwtError::Decode`] when the header is not a base64url JSON object.
pub fn decode_header(token: &str) -> JwtResult<JsonObject> {
    let [header_b64, _, _] = split_segments(token.trim())
        .map_err(|count| JwtError::structure(format!("expected 3 parts, got {count}")))?;
    decode_json_segment(header_b64)
}
