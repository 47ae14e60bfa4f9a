//! Codec configuration.

/// Native ECDSA signature encoding of the signing/verifying back-end.
///
/// The wire format for ES256 is always the fixed-width 64-byte `R || S`. This
/// setting states what the back-end itself emits from `sign` and accepts in
/// `verify`; the DER converter runs on both sides when it is `Der` and on
/// neither side when it is `Raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcdsaSignatureFormat {
    /// Back-end works with fixed-width `R || S` (IEEE P1363)
    #[default]
    Raw,
    /// Back-end works with ASN.1 DER `SEQUENCE { INTEGER r, INTEGER s }`
    Der,
}

/// Options for [`crate::JwtCodec`].
#[derive(Debug, Clone, Default)]
pub struct CodecOptions {
    /// Native ECDSA back-end format.
    pub ecdsa_format: EcdsaSignatureFormat,
    /// Run key import and signing/verification on tokio's blocking pool.
    /// Requires a tokio runtime.
    pub offload: bool,
}

impl CodecOptions {
    /// Default options: raw ECDSA back-end, work runs on the calling task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the native ECDSA back-end format.
    #[must_use]
    pub fn with_ecdsa_format(mut self, format: EcdsaSignatureFormat) -> Self {
        self.ecdsa_format = format;
        self
    }

    /// Set whether crypto work is moved to the blocking pool.
    #[must_use]
    pub fn offload(mut self, offload: bool) -> Self {
        self.offload = offload;
        self
    }
}
