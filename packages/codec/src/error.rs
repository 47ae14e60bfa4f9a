//! JWT error types
//!
//! These never cross the public operation boundary as `Err`: [`crate::JwtCodec`]
//! folds them into the `error` field of its result values. They are public so the
//! lower-level helpers (transcoder, PEM, DER, key import) can be used directly.

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token does not have the three-segment compact shape
    #[error("{0}")]
    Structure(String),

    /// Base64url, UTF-8 or JSON decoding failed
    #[error("{0}")]
    Decode(String),

    /// `alg` is absent or outside the supported set
    #[error("Algorithm \"{alg}\" is not supported. Supported: {supported}")]
    UnsupportedAlgorithm {
        /// The offending `alg` value as found in the header
        alg: String,
        /// Comma separated list of supported algorithm names
        supported: String,
    },

    /// Key or secret was empty
    #[error("{0}")]
    MissingKey(String),

    /// PEM armor or body is malformed
    #[error("Invalid PEM: {0}")]
    KeyFormat(String),

    /// DER key material could not be imported for the algorithm
    #[error("Key import failed: {0}")]
    KeyImport(String),

    /// ECDSA signature could not be converted between raw and DER form
    #[error("Invalid signature format: {0}")]
    SignatureFormat(String),

    /// The signing primitive failed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Header or payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Background task failed
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl JwtError {
    /// Create a structure error
    #[inline]
    #[must_use]
    pub fn structure(msg: impl Into<String>) -> Self {
        JwtError::Structure(msg.into())
    }

    /// Create a decode error
    #[inline]
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        JwtError::Decode(msg.into())
    }

    /// Create an unsupported algorithm error listing every supported algorithm
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: impl Into<String>) -> Self {
        JwtError::UnsupportedAlgorithm {
            alg: alg.into(),
            supported: crate::Algorithm::supported_list(),
        }
    }

    /// Create a missing key error
    #[inline]
    #[must_use]
    pub fn missing_key(msg: impl Into<String>) -> Self {
        JwtError::MissingKey(msg.into())
    }

    /// Create a key format error
    #[inline]
    #[must_use]
    pub fn key_format(msg: impl Into<String>) -> Self {
        JwtError::KeyFormat(msg.into())
    }

    /// Create a key import error
    #[inline]
    #[must_use]
    pub fn key_import(msg: impl Into<String>) -> Self {
        JwtError::KeyImport(msg.into())
    }

    /// Create a signature format error
    #[inline]
    #[must_use]
    pub fn signature_format(msg: impl Into<String>) -> Self {
        JwtError::SignatureFormat(msg.into())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: impl Into<String>) -> Self {
        JwtError::Signing(msg.into())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        JwtError::Serialization(msg.into())
    }

    /// Short kind name for log events; never includes message detail
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JwtError::Structure(_) => "structure",
            JwtError::Decode(_) => "decode",
            JwtError::UnsupportedAlgorithm { .. } => "unsupported_algorithm",
            JwtError::MissingKey(_) => "missing_key",
            JwtError::KeyFormat(_) => "key_format",
            JwtError::KeyImport(_) => "key_import",
            JwtError::SignatureFormat(_) => "signature_format",
            JwtError::Signing(_) => "signing",
            JwtError::Serialization(_) => "serialization",
            JwtError::TaskFailed(_) => "task_failed",
        }
    }
}
