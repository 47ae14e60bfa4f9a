//! JWT Algorithms Module
//!
//! One handler pair (sign, verify) per supported algorithm, dispatched from
//! `core`. Adding an algorithm means a new [`crate::Algorithm`] variant, a key
//! material variant in [`crate::api::keys`], and its two handlers here.

mod core;
mod ecdsa;
mod hmac;
mod rsa;

pub(crate) use self::core::{sign_input, verify_input};
