//! HS256: HMAC-SHA256

use crate::{
    api::keys::HmacSecret,
    base64url,
    error::{JwtError, JwtResult},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Sign with HMAC-SHA256, returning the 32-byte tag
pub(crate) fn sign_hs256(secret: &HmacSecret, message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| JwtError::key_import("invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Recompute the tag and compare its base64url form against the wire segment
///
/// The comparison is on the encoded strings so that a segment which decodes to the
/// right bytes through a non-canonical encoding is still rejected.
pub(crate) fn verify_hs256(
    secret: &HmacSecret,
    message: &[u8],
    signature_b64: &str,
) -> JwtResult<bool> {
    let expected = base64url::encode_bytes(&sign_hs256(secret, message)?);
    Ok(expected.as_bytes().ct_eq(signature_b64.as_bytes()).into())
}
