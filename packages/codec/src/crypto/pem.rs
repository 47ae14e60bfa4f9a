//! PEM armor removal
//!
//! Only the envelope is handled here. Whether the DER body is really the key type
//! the label claims is decided by the key importer.

use crate::error::{JwtError, JwtResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};

const DASHES: &str = "-----";

/// A PEM document reduced to its label and DER body
#[derive(Clone, PartialEq, Eq)]
pub struct PemDocument {
    /// Label of the first `BEGIN` marker, `None` for bare base64 input
    pub label: Option<String>,
    /// Decoded body
    pub der: Vec<u8>,
}

impl std::fmt::Debug for PemDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PemDocument")
            .field("label", &self.label)
            .field("der_len", &self.der.len())
            .finish()
    }
}

/// Strip the PEM envelope and whitespace and return the DER bytes
///
/// # Errors
/// Returns [`JwtError::KeyFormat`] for an unterminated or unknown `-----` marker,
/// an `END` label that differs from its `BEGIN` label, or a body that is not
/// standard base64.
pub fn pem_to_der(pem: &str) -> JwtResult<Vec<u8>> {
    parse_pem(pem).map(|doc| doc.der)
}

/// Like [`pem_to_der`] but also reports the `BEGIN` label
///
/// # Errors
/// Same as [`pem_to_der`].
pub fn parse_pem(pem: &str) -> JwtResult<PemDocument> {
    let mut label = None;
    let mut body = String::with_capacity(pem.len());
    let mut rest = pem;

    while let Some(start) = rest.find(DASHES) {
        body.push_str(&rest[..start]);
        let marker_and_rest = &rest[start + DASHES.len()..];
        let end = marker_and_rest
            .find(DASHES)
            .ok_or_else(|| JwtError::key_format("unterminated PEM marker"))?;
        let marker = marker_and_rest[..end].trim();

        if let Some(begin_label) = marker.strip_prefix("BEGIN") {
            if label.is_none() {
                label = Some(begin_label.trim().to_string());
            }
        } else if let Some(end_label) = marker.strip_prefix("END") {
            let end_label = end_label.trim();
            if label.as_deref() != Some(end_label) {
                return Err(JwtError::key_format(format!(
                    "END label \"{end_label}\" does not match BEGIN label \"{}\"",
                    label.as_deref().unwrap_or_default()
                )));
            }
        } else {
            return Err(JwtError::key_format(format!(
                "unexpected PEM marker \"{marker}\""
            )));
        }

        rest = &marker_and_rest[end + DASHES.len()..];
    }
    body.push_str(rest);
    body.retain(|c| !c.is_whitespace());

    if body.is_empty() {
        return Err(JwtError::key_format("PEM body is empty"));
    }

    let der = STANDARD
        .decode(body.as_bytes())
        .map_err(|e| JwtError::key_format(format!("body is not valid base64: {e}")))?;

    Ok(PemDocument { label, der })
}
