//! JWT API: key import, per-algorithm handlers and the codec entry points.

pub(crate) mod algorithms;
pub mod builder;
pub mod keys;

pub use builder::{Jwt, JwtCodec};
pub use keys::{
    SigningKeyHandle, VerificationKeyHandle, import_signing_key, import_verification_key,
};
