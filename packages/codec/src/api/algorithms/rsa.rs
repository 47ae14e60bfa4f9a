//! RS256: RSASSA-PKCS1-v1_5 with SHA-256

use crate::error::{JwtError, JwtResult};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use sha2::Sha256;

/// Sign with RSA-SHA256. Signature length equals the modulus length.
pub(crate) fn sign_rs256(key: &SigningKey<Sha256>, message: &[u8]) -> JwtResult<Vec<u8>> {
    let signature = key
        .try_sign(message)
        .map_err(|e| JwtError::signing(format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

/// Verify an RSA-SHA256 signature
///
/// # Errors
/// A signature whose width differs from the modulus is a format error rather than
/// a mismatch.
pub(crate) fn verify_rs256(
    key: &VerifyingKey<Sha256>,
    modulus_len: usize,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    if signature.len() != modulus_len {
        return Err(JwtError::signature_format(format!(
            "expected {modulus_len}-byte RSA signature, got {} bytes",
            signature.len()
        )));
    }
    let signature = Signature::try_from(signature)
        .map_err(|e| JwtError::signature_format(format!("invalid RSA signature: {e}")))?;
    Ok(key.verify(message, &signature).is_ok())
}
