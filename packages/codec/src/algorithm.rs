//! Supported signature algorithms and their metadata
//!
//! [`Algorithm`] is the only place the supported set is defined. The encode and
//! verify paths both parse the header `alg` through it, so anything outside the
//! enum is rejected before a key is ever imported.

use crate::error::JwtError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How key material is shared between signer and verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyTopology {
    /// One shared secret signs and verifies
    Symmetric,
    /// PKCS#8 private key signs, SPKI public key verifies
    Asymmetric,
}

/// JWS algorithm identifiers understood by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC using SHA-256
    #[serde(rename = "HS256")]
    Hs256,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    #[serde(rename = "RS256")]
    Rs256,
    /// ECDSA using P-256 and SHA-256
    #[serde(rename = "ES256")]
    Es256,
}

impl Algorithm {
    /// Every supported algorithm, in display order
    pub const ALL: [Algorithm; 3] = [Algorithm::Hs256, Algorithm::Rs256, Algorithm::Es256];

    /// Header `alg` value
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Rs256 => "RS256",
            Algorithm::Es256 => "ES256",
        }
    }

    /// Whether the algorithm uses a shared secret or a key pair
    #[must_use]
    pub const fn key_topology(self) -> KeyTopology {
        match self {
            Algorithm::Hs256 => KeyTopology::Symmetric,
            Algorithm::Rs256 | Algorithm::Es256 => KeyTopology::Asymmetric,
        }
    }

    /// Human readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HMAC using SHA-256",
            Algorithm::Rs256 => "RSASSA-PKCS1-v1_5 using SHA-256",
            Algorithm::Es256 => "ECDSA using P-256 and SHA-256",
        }
    }

    /// Recommended key size in bytes (secret length, RSA modulus, or curve order)
    #[must_use]
    pub const fn recommended_key_size(self) -> usize {
        match self {
            Algorithm::Hs256 | Algorithm::Es256 => 32,
            Algorithm::Rs256 => 256,
        }
    }

    /// Message reported when encoding is attempted without key material
    #[must_use]
    pub const fn required_key_message(self) -> &'static str {
        match self.key_topology() {
            KeyTopology::Symmetric => "Secret is required",
            KeyTopology::Asymmetric => "Private key is required",
        }
    }

    /// `"HS256, RS256, ES256"`
    #[must_use]
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|alg| alg.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve the `alg` member of a decoded header
    ///
    /// # Errors
    /// Returns [`JwtError::UnsupportedAlgorithm`] when `alg` is absent, not a string,
    /// or names an algorithm outside [`Algorithm::ALL`].
    pub fn from_header(header: &crate::JsonObject) -> Result<Self, JwtError> {
        match header.get("alg") {
            Some(serde_json::Value::String(alg)) => alg.parse(),
            Some(other) => Err(JwtError::unsupported_algorithm(other.to_string())),
            None => Err(JwtError::unsupported_algorithm("")),
        }
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
