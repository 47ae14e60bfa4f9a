//! Binary format helpers used by asymmetric key import and ES256.

pub mod der;
pub mod pem;
