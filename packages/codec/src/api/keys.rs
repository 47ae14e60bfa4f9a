//! JWT key import
//!
//! Turns caller-supplied key material into opaque handles for one sign or verify
//! call. Handles cannot be cloned, do not expose their bytes and print redacted.

use crate::{
    algorithm::Algorithm,
    crypto::pem::parse_pem,
    error::{JwtError, JwtResult},
};
use p256::pkcs8::{DecodePrivateKey as _, DecodePublicKey as _};
use rsa::{
    RsaPrivateKey, RsaPublicKey,
    pkcs8::{DecodePrivateKey as _, DecodePublicKey as _},
    traits::PublicKeyParts as _,
};
use sha2::Sha256;
use zeroize::Zeroizing;

const PKCS8_LABEL: &str = "PRIVATE KEY";
const SPKI_LABEL: &str = "PUBLIC KEY";

/// Shared HMAC secret bytes, wiped on drop
pub(crate) struct HmacSecret(Zeroizing<Vec<u8>>);

impl HmacSecret {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

pub(crate) enum SigningMaterial {
    Hmac(HmacSecret),
    Rsa(Box<rsa::pkcs1v15::SigningKey<Sha256>>),
    Ecdsa(p256::ecdsa::SigningKey),
}

pub(crate) enum VerificationMaterial {
    Hmac(HmacSecret),
    Rsa {
        key: Box<rsa::pkcs1v15::VerifyingKey<Sha256>>,
        /// Modulus width in bytes, which every valid signature has
        modulus_len: usize,
    },
    Ecdsa(p256::ecdsa::VerifyingKey),
}

/// Opaque key able to produce signatures for one algorithm
pub struct SigningKeyHandle {
    algorithm: Algorithm,
    pub(crate) material: SigningMaterial,
}

/// Opaque key able to check signatures for one algorithm
pub struct VerificationKeyHandle {
    algorithm: Algorithm,
    pub(crate) material: VerificationMaterial,
}

impl SigningKeyHandle {
    /// Algorithm this key was imported for
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl VerificationKeyHandle {
    /// Algorithm this key was imported for
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl std::fmt::Debug for SigningKeyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyHandle")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for VerificationKeyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationKeyHandle")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Import key material for signing
///
/// HS256 takes the UTF-8 bytes of `key_material` as the secret. RS256 and ES256
/// take a PEM (or bare base64) PKCS#8 private key.
///
/// # Errors
/// Returns [`JwtError::KeyFormat`] for a malformed PEM envelope and
/// [`JwtError::KeyImport`] for an empty secret, a wrong PEM label, or DER that is
/// not a key of the right type or curve.
pub fn import_signing_key(algorithm: Algorithm, key_material: &str) -> JwtResult<SigningKeyHandle> {
    let material = match algorithm {
        Algorithm::Hs256 => SigningMaterial::Hmac(hmac_secret(key_material)?),
        Algorithm::Rs256 => {
            let der = pem_body(key_material, PKCS8_LABEL)?;
            let key = RsaPrivateKey::from_pkcs8_der(&der)
                .map_err(|e| JwtError::key_import(format!("invalid RSA private key: {e}")))?;
            SigningMaterial::Rsa(Box::new(rsa::pkcs1v15::SigningKey::<Sha256>::new(key)))
        }
        Algorithm::Es256 => {
            let der = pem_body(key_material, PKCS8_LABEL)?;
            let key = p256::ecdsa::SigningKey::from_pkcs8_der(&der).map_err(|e| {
                JwtError::key_import(format!("invalid P-256 private key: {e}"))
            })?;
            SigningMaterial::Ecdsa(key)
        }
    };
    Ok(SigningKeyHandle {
        algorithm,
        material,
    })
}

/// Import key material for verification
///
/// HS256 takes the same secret used to sign. RS256 and ES256 take a PEM (or bare
/// base64) SPKI public key.
///
/// # Errors
/// Same as [`import_signing_key`].
pub fn import_verification_key(
    algorithm: Algorithm,
    key_material: &str,
) -> JwtResult<VerificationKeyHandle> {
    let material = match algorithm {
        Algorithm::Hs256 => VerificationMaterial::Hmac(hmac_secret(key_material)?),
        Algorithm::Rs256 => {
            let der = pem_body(key_material, SPKI_LABEL)?;
            let key = RsaPublicKey::from_public_key_der(&der)
                .map_err(|e| JwtError::key_import(format!("invalid RSA public key: {e}")))?;
            VerificationMaterial::Rsa {
                modulus_len: key.size(),
                key: Box::new(rsa::pkcs1v15::VerifyingKey::<Sha256>::new(key)),
            }
        }
        Algorithm::Es256 => {
            let der = pem_body(key_material, SPKI_LABEL)?;
            let key = p256::ecdsa::VerifyingKey::from_public_key_der(&der)
                .map_err(|e| JwtError::key_import(format!("invalid P-256 public key: {e}")))?;
            VerificationMaterial::Ecdsa(key)
        }
    };
    Ok(VerificationKeyHandle {
        algorithm,
        material,
    })
}

fn hmac_secret(secret: &str) -> JwtResult<HmacSecret> {
    if secret.is_empty() {
        return Err(JwtError::key_import("HMAC secret is empty"));
    }
    Ok(HmacSecret(Zeroizing::new(secret.as_bytes().to_vec())))
}

/// DER body of a PEM document whose label, if present, must be `expected_label`
fn pem_body(pem: &str, expected_label: &str) -> JwtResult<Zeroizing<Vec<u8>>> {
    let doc = parse_pem(pem)?;
    if let Some(label) = doc.label.as_deref() {
        if label != expected_label {
            return Err(JwtError::key_import(format!(
                "expected PEM label \"{expected_label}\", found \"{label}\""
            )));
        }
    }
    Ok(Zeroizing::new(doc.der))
}
