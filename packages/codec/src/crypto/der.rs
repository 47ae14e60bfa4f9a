//! ECDSA P-256 signature conversion between fixed-width `R || S` and ASN.1 DER
//!
//! JWS (RFC 7518 §3.4) puts the 64-byte concatenation on the wire. DER is
//! `SEQUENCE { INTEGER r, INTEGER s }` where each INTEGER is minimal
//! big-endian two's complement, so a value with its top bit set gains a `0x00`
//! prefix. For P-256 every length fits the short form.

use crate::error::{JwtError, JwtResult};

/// Byte width of one P-256 scalar
pub const SCALAR_LEN: usize = 32;
/// Byte width of a raw `R || S` signature
pub const RAW_SIGNATURE_LEN: usize = 2 * SCALAR_LEN;

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// Convert a 64-byte `R || S` signature into DER
///
/// # Errors
/// Returns [`JwtError::SignatureFormat`] if `raw` is not exactly 64 bytes.
pub fn raw_to_der(raw: &[u8]) -> JwtResult<Vec<u8>> {
    if raw.len() != RAW_SIGNATURE_LEN {
        return Err(JwtError::signature_format(format!(
            "expected {RAW_SIGNATURE_LEN}-byte R||S signature, got {} bytes",
            raw.len()
        )));
    }
    let (r, s) = raw.split_at(SCALAR_LEN);
    let r = der_integer_body(r);
    let s = der_integer_body(s);

    // 33 + 33 + 4 at most, well inside the short form
    let content_len = 2 + r.len() + 2 + s.len();
    let mut der = Vec::with_capacity(2 + content_len);
    der.push(TAG_SEQUENCE);
    der.push(short_len(content_len)?);
    for int in [&r, &s] {
        der.push(TAG_INTEGER);
        der.push(short_len(int.len())?);
        der.extend_from_slice(int);
    }
    Ok(der)
}

/// Convert a DER `SEQUENCE { INTEGER r, INTEGER s }` into 64-byte `R || S`
///
/// # Errors
/// Returns [`JwtError::SignatureFormat`] for unexpected tags, inconsistent or
/// long-form lengths, trailing bytes, or an integer wider than 32 bytes.
pub fn der_to_raw(der: &[u8]) -> JwtResult<[u8; RAW_SIGNATURE_LEN]> {
    let mut reader = DerReader { input: der };
    let sequence = reader.read_tlv(TAG_SEQUENCE, "SEQUENCE")?;
    if !reader.input.is_empty() {
        return Err(JwtError::signature_format("trailing bytes after SEQUENCE"));
    }

    let mut fields = DerReader { input: sequence };
    let r = fields.read_tlv(TAG_INTEGER, "INTEGER r")?;
    let s = fields.read_tlv(TAG_INTEGER, "INTEGER s")?;
    if !fields.input.is_empty() {
        return Err(JwtError::signature_format("trailing bytes inside SEQUENCE"));
    }

    let mut raw = [0u8; RAW_SIGNATURE_LEN];
    left_pad_into(&mut raw[..SCALAR_LEN], r, "r")?;
    left_pad_into(&mut raw[SCALAR_LEN..], s, "s")?;
    Ok(raw)
}

/// Minimal INTEGER content octets for an unsigned big-endian value
fn der_integer_body(unsigned: &[u8]) -> Vec<u8> {
    let first_significant = unsigned
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(unsigned.len().saturating_sub(1));
    let trimmed = &unsigned[first_significant..];

    let mut body = Vec::with_capacity(trimmed.len() + 1);
    if trimmed.first().is_some_and(|&b| b & 0x80 != 0) {
        body.push(0);
    }
    body.extend_from_slice(trimmed);
    body
}

fn left_pad_into(out: &mut [u8], int: &[u8], name: &str) -> JwtResult<()> {
    let first_significant = int.iter().position(|&b| b != 0).unwrap_or(int.len());
    let value = &int[first_significant..];
    if value.len() > out.len() {
        return Err(JwtError::signature_format(format!(
            "INTEGER {name} is {} bytes, exceeds {} bytes",
            value.len(),
            out.len()
        )));
    }
    let offset = out.len() - value.len();
    out[offset..].copy_from_slice(value);
    Ok(())
}

fn short_len(len: usize) -> JwtResult<u8> {
    u8::try_from(len)
        .ok()
        .filter(|&l| l < 0x80)
        .ok_or_else(|| JwtError::signature_format(format!("length {len} needs long form")))
}

struct DerReader<'a> {
    input: &'a [u8],
}

impl<'a> DerReader<'a> {
    fn read_tlv(&mut self, tag: u8, what: &str) -> JwtResult<&'a [u8]> {
        let (&found, rest) = self
            .input
            .split_first()
            .ok_or_else(|| JwtError::signature_format(format!("missing {what}")))?;
        if found != tag {
            return Err(JwtError::signature_format(format!(
                "expected {what} tag 0x{tag:02x}, found 0x{found:02x}"
            )));
        }
        let (&len, rest) = rest
            .split_first()
            .ok_or_else(|| JwtError::signature_format(format!("missing {what} length")))?;
        if len & 0x80 != 0 {
            return Err(JwtError::signature_format(format!(
                "{what} uses long-form length"
            )));
        }
        let len = usize::from(len);
        if rest.len() < len {
            return Err(JwtError::signature_format(format!(
                "{what} length {len} exceeds remaining {} bytes",
                rest.len()
            )));
        }
        let (content, rest) = rest.split_at(len);
        if tag == TAG_INTEGER && content.is_empty() {
            return Err(JwtError::signature_format(format!("{what} is empty")));
        }
        self.input = rest;
        Ok(content)
    }
}
