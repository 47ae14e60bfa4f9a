//! JSON Web Token codec and signature engine
//!
//! This crate provides:
//! - structural decoding of compact JWTs, with no trust decision
//! - signing and verification for HS256, RS256 and ES256
//! - base64url, PEM and ECDSA raw/DER helpers those operations are built on
//!
//! The three public operations never fail outward: [`decode`], [`encode`] and
//! [`verify`] report every problem in the `error` field of their result.
//!
//! ```no_run
//! # async fn demo() {
//! use serde_json::json;
//!
//! let header = json!({"alg": "HS256", "typ": "JWT"});
//! let payload = json!({"sub": "1234567890"});
//! let (Some(header), Some(payload)) = (header.as_object(), payload.as_object()) else {
//!     return;
//! };
//!
//! let encoded = jwtkit_codec::encode(header, payload, "your-256-bit-secret").await;
//! let checked = jwtkit_codec::verify(&encoded.token, "your-256-bit-secret").await;
//! assert!(checked.verified);
//! # }
//! ```

mod algorithm;
pub mod api;
pub mod base64url;
pub mod crypto;
mod decoder;
mod error;
mod options;
mod types;

pub use algorithm::{Algorithm, KeyTopology};
pub use api::{Jwt, JwtCodec};
pub use decoder::{decode, decode_header};
pub use error::{JwtError, JwtResult};
pub use options::{CodecOptions, EcdsaSignatureFormat};
pub use types::{DecodeResult, EncodeResult, JsonObject, VerificationResult};

/// Sign with default [`CodecOptions`], see [`JwtCodec::encode`]
pub async fn encode(header: &JsonObject, payload: &JsonObject, key: &str) -> EncodeResult {
    JwtCodec::new().encode(header, payload, key).await
}

/// Verify with default [`CodecOptions`], see [`JwtCodec::verify`]
pub async fn verify(token: &str, key: &str) -> VerificationResult {
    JwtCodec::new().verify(token, key).await
}
