//! JWT codec entry points
//!
//! [`JwtCodec`] is the boundary where every internal [`JwtError`] becomes the
//! `error` string of a result value. Nothing below it is allowed to reach the
//! caller as a panic or an `Err`.

use super::algorithms::{sign_input, verify_input};
use crate::{
    algorithm::Algorithm,
    base64url, decoder,
    error::{JwtError, JwtResult},
    options::CodecOptions,
    types::{DecodeResult, EncodeResult, JsonObject, VerificationResult},
};
use zeroize::Zeroizing;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Codec with default options
    #[inline]
    #[must_use]
    pub fn codec() -> JwtCodec {
        JwtCodec::new()
    }
}

/// Decodes, signs and verifies compact JWTs
#[derive(Debug, Clone, Default)]
pub struct JwtCodec {
    options: CodecOptions,
}

impl JwtCodec {
    /// Create a codec with default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the codec options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options
    #[inline]
    #[must_use]
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Structural decode, see [`decoder::decode`]
    #[inline]
    #[must_use]
    pub fn decode(&self, token: &str) -> DecodeResult {
        decoder::decode(token)
    }

    /// Sign `payload` under `header` with `key`.
    ///
    /// `header.alg` selects the algorithm. `key` is the shared secret for HS256 and
    /// a PEM PKCS#8 private key for RS256/ES256. Header and payload are serialized
    /// compactly with their key order preserved.
    pub async fn encode(&self, header: &JsonObject, payload: &JsonObject, key: &str) -> EncodeResult {
        let algorithm = match Algorithm::from_header(header) {
            Ok(algorithm) => algorithm,
            Err(e) => {
                tracing::debug!(kind = e.kind(), "refusing to encode token");
                return EncodeResult::failed(e.to_string());
            }
        };
        if key.is_empty() {
            let e = JwtError::missing_key(algorithm.required_key_message());
            tracing::debug!(%algorithm, kind = e.kind(), "refusing to encode token");
            return EncodeResult::failed(e.to_string());
        }

        tracing::debug!(%algorithm, "encoding token");
        let header = header.clone();
        let payload = payload.clone();
        let key = Zeroizing::new(key.to_string());
        let options = self.options.clone();
        let outcome = self
            .run(move || sign_token(algorithm, &header, &payload, &key, &options))
            .await;

        match outcome {
            Ok(token) => EncodeResult::ok(token),
            Err(e) => {
                tracing::warn!(%algorithm, kind = e.kind(), "token encoding failed");
                EncodeResult::failed(format!("Encoding failed: {e}"))
            }
        }
    }

    /// Check the signature of `token` with `key`.
    ///
    /// `key` is the shared secret for HS256 and a PEM SPKI public key for
    /// RS256/ES256. Claims are not validated.
    pub async fn verify(&self, token: &str, key: &str) -> VerificationResult {
        let token = token.trim();
        if token.is_empty() || key.is_empty() {
            let e = JwtError::missing_key("Token and key are required");
            return VerificationResult::rejected(None, e.to_string());
        }

        let Ok([header_b64, payload_b64, signature_b64]) = decoder::split_segments(token) else {
            return VerificationResult::rejected(None, "Invalid JWT structure");
        };

        let Ok(header) = decoder::decode_json_segment(header_b64) else {
            return VerificationResult::rejected(None, "Invalid header");
        };

        let alg = header
            .get("alg")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        let algorithm = match Algorithm::from_header(&header) {
            Ok(algorithm) => algorithm,
            Err(e) => return VerificationResult::rejected(alg.as_deref(), e.to_string()),
        };

        tracing::debug!(%algorithm, signature_len = signature_b64.len(), "verifying token");
        let signing_input = format!("{header_b64}.{payload_b64}");
        let signature_b64 = signature_b64.to_string();
        let key = Zeroizing::new(key.to_string());
        let options = self.options.clone();
        let outcome = self
            .run(move || {
                verify_input(
                    algorithm,
                    signing_input.as_bytes(),
                    &signature_b64,
                    &key,
                    &options,
                )
            })
            .await;

        match outcome {
            Ok(true) => VerificationResult::verified(algorithm.name()),
            Ok(false) => {
                tracing::debug!(%algorithm, "signature does not match");
                VerificationResult::rejected(Some(algorithm.name()), "Signature does not match")
            }
            Err(e) => {
                tracing::warn!(%algorithm, kind = e.kind(), "token verification failed");
                VerificationResult::rejected(
                    Some(algorithm.name()),
                    format!("Verification failed: {e}"),
                )
            }
        }
    }

    /// Run crypto work inline after a cooperative yield, or on the blocking pool
    ///
    /// Offloading outside a tokio runtime is a [`JwtError::TaskFailed`].
    async fn run<T, F>(&self, work: F) -> JwtResult<T>
    where
        F: FnOnce() -> JwtResult<T> + Send + 'static,
        T: Send + 'static,
    {
        if self.options.offload {
            let handle = tokio::runtime::Handle::try_current()
                .map_err(|e| JwtError::TaskFailed(e.to_string()))?;
            handle
                .spawn_blocking(work)
                .await
                .map_err(|e| JwtError::TaskFailed(e.to_string()))?
        } else {
            tokio::task::yield_now().await;
            work()
        }
    }
}

/// Serialize, sign and assemble `header.payload.signature`
fn sign_token(
    algorithm: Algorithm,
    header: &JsonObject,
    payload: &JsonObject,
    key: &str,
    options: &CodecOptions,
) -> JwtResult<String> {
    let header_json =
        serde_json::to_string(header).map_err(|e| JwtError::serialization(e.to_string()))?;
    let payload_json =
        serde_json::to_string(payload).map_err(|e| JwtError::serialization(e.to_string()))?;

    let header_b64 = base64url::encode_utf8(&header_json);
    let payload_b64 = base64url::encode_utf8(&payload_json);

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + payload_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&payload_b64);

    let signature = sign_input(algorithm, signing_input.as_bytes(), key, options)?;
    let signature_b64 = base64url::encode_bytes(&signature);

    let mut token = String::with_capacity(signing_input.len() + 1 + signature_b64.len());
    token.push_str(&signing_input);
    token.push('.');
    token.push_str(&signature_b64);
    Ok(token)
}
