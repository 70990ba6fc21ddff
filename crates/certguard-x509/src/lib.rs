//! Certificate input adapter.
//!
//! Turns PEM or DER bytes into the domain's `Certificate`. Parsed views (validity, basic
//! constraints, policy identifiers) come from `x509-parser`; raw slices that lints inspect
//! byte-for-byte (TBS, algorithm identifiers, names, SPKI) are cut with `certguard-der` so
//! they are exactly what the issuer signed.

#![forbid(unsafe_code)]

mod convert;
mod pem;

pub use convert::parse_der;
pub use pem::{is_pem, split_pem};

use anyhow::Context;
use certguard_domain::model::Certificate;

/// Parse every certificate in `input`: a PEM bundle, or a single DER certificate.
pub fn parse_certificates(input: &[u8]) -> anyhow::Result<Vec<Certificate>> {
    if input.is_empty() {
        anyhow::bail!("empty input");
    }
    if !is_pem(input) {
        return Ok(vec![parse_der(input)?]);
    }
    split_pem(input)?
        .iter()
        .enumerate()
        .map(|(i, der)| parse_der(der).with_context(|| format!("PEM block {}", i + 1)))
        .collect()
}
