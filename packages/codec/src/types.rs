//! Result value types returned by the public operations

use serde::{Deserialize, Serialize};

/// A JSON object as it appears in a JWT header or payload.
///
/// Key order is preserved from input to output.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Structural decode of a token. `is_valid` makes no claim about the signature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResult {
    /// Decoded header, `None` if absent or undecodable
    pub header: Option<JsonObject>,
    /// Decoded payload, `None` if absent or undecodable
    pub payload: Option<JsonObject>,
    /// Signature segment exactly as it appeared on the wire
    pub signature: String,
    /// Three segments with JSON-object header and payload
    pub is_valid: bool,
    /// Why the token is not structurally valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeResult {
    pub(crate) fn invalid(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Outcome of a signature check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Signature matched
    pub verified: bool,
    /// `alg` from the header, once it has been read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Reason for a negative result; always present when `verified` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    pub(crate) fn verified(algorithm: &str) -> Self {
        Self {
            verified: true,
            algorithm: Some(algorithm.to_string()),
            error: None,
        }
    }

    pub(crate) fn rejected(algorithm: Option<&str>, error: impl Into<String>) -> Self {
        Self {
            verified: false,
            algorithm: algorithm.map(str::to_string),
            error: Some(error.into()),
        }
    }
}

/// Outcome of signing a token. `token` is empty exactly when `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResult {
    /// Compact serialization `header.payload.signature`
    pub token: String,
    /// Why encoding failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EncodeResult {
    pub(crate) fn ok(token: String) -> Self {
        Self { token, error: None }
    }

    pub(crate) fn failed(error: impl Into<String>) -> Self {
        Self {
            token: String::new(),
            error: Some(error.into()),
        }
    }

    /// `true` when a token was produced
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
