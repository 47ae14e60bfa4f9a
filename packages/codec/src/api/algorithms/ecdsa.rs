//! ES256: ECDSA over P-256 with SHA-256
//!
//! The wire signature is always raw `R || S`. [`EcdsaSignatureFormat`] says what the
//! back-end works in, and the DER converter is applied on both sides or neither.

use crate::{
    crypto::der::{RAW_SIGNATURE_LEN, der_to_raw, raw_to_der},
    error::{JwtError, JwtResult},
    options::EcdsaSignatureFormat,
};
use p256::ecdsa::{
    Signature, SigningKey, VerifyingKey,
    signature::{Signer, Verifier},
};

/// Sign with ECDSA P-256, returning the 64-byte wire signature
pub(crate) fn sign_es256(
    key: &SigningKey,
    message: &[u8],
    format: EcdsaSignatureFormat,
) -> JwtResult<[u8; RAW_SIGNATURE_LEN]> {
    let signature: Signature = key
        .try_sign(message)
        .map_err(|e| JwtError::signing(format!("ECDSA signing failed: {e}")))?;

    match format {
        EcdsaSignatureFormat::Raw => {
            let mut raw = [0u8; RAW_SIGNATURE_LEN];
            raw.copy_from_slice(&signature.to_bytes());
            Ok(raw)
        }
        EcdsaSignatureFormat::Der => der_to_raw(signature.to_der().as_bytes()),
    }
}

/// Verify a 64-byte wire signature against the message
///
/// # Errors
/// A signature of the wrong width, or one whose scalars are out of range, is a
/// format error rather than a mismatch, in both back-end formats alike.
pub(crate) fn verify_es256(
    key: &VerifyingKey,
    message: &[u8],
    raw: &[u8],
    format: EcdsaSignatureFormat,
) -> JwtResult<bool> {
    if raw.len() != RAW_SIGNATURE_LEN {
        return Err(JwtError::signature_format(format!(
            "expected {RAW_SIGNATURE_LEN}-byte R||S signature, got {} bytes",
            raw.len()
        )));
    }

    let signature = match format {
        EcdsaSignatureFormat::Raw => Signature::from_slice(raw),
        EcdsaSignatureFormat::Der => Signature::from_der(&raw_to_der(raw)?),
    }
    .map_err(|e| JwtError::signature_format(format!("invalid ECDSA signature: {e}")))?;

    Ok(key.verify(message, &signature).is_ok())
}
