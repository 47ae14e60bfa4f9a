//! JWT Core Algorithm Operations
//!
//! Imports the key for the resolved algorithm and dispatches to its handler. The
//! key handle's material variant is fixed by the algorithm it was imported for,
//! so the single `match` per direction is the algorithm dispatch.

use super::{ecdsa, hmac, rsa};
use crate::{
    algorithm::Algorithm,
    api::keys::{
        SigningMaterial, VerificationMaterial, import_signing_key, import_verification_key,
    },
    base64url,
    error::JwtResult,
    options::CodecOptions,
};

/// Sign `signing_input` (`header_b64.payload_b64`) and return the raw signature bytes
pub(crate) fn sign_input(
    algorithm: Algorithm,
    signing_input: &[u8],
    key_material: &str,
    options: &CodecOptions,
) -> JwtResult<Vec<u8>> {
    let key = import_signing_key(algorithm, key_material)?;
    match &key.material {
        SigningMaterial::Hmac(secret) => hmac::sign_hs256(secret, signing_input),
        SigningMaterial::Rsa(signing_key) => rsa::sign_rs256(signing_key, signing_input),
        SigningMaterial::Ecdsa(signing_key) => {
            ecdsa::sign_es256(signing_key, signing_input, options.ecdsa_format).map(Vec::from)
        }
    }
}

/// Check the wire signature segment against `signing_input`
///
/// `Ok(false)` is a cryptographic mismatch; `Err` means the check could not run.
pub(crate) fn verify_input(
    algorithm: Algorithm,
    signing_input: &[u8],
    signature_b64: &str,
    key_material: &str,
    options: &CodecOptions,
) -> JwtResult<bool> {
    let key = import_verification_key(algorithm, key_material)?;
    match &key.material {
        VerificationMaterial::Hmac(secret) => {
            hmac::verify_hs256(secret, signing_input, signature_b64)
        }
        VerificationMaterial::Rsa { key, modulus_len } => {
            let signature = base64url::decode_to_bytes(signature_b64)?;
            rsa::verify_rs256(key, *modulus_len, signing_input, &signature)
        }
        VerificationMaterial::Ecdsa(verifying_key) => {
            let signature = base64url::decode_to_bytes(signature_b64)?;
            ecdsa::verify_es256(verifying_key, signing_input, &signature, options.ecdsa_format)
        }
    }
}
