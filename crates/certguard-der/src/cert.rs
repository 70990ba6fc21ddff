//! Raw field extraction from `Certificate` and `TBSCertificate`.
//!
//! These return borrowed slices of the original encoding so that callers can run
//! byte-exact checks on exactly what the issuer signed.

use crate::algorithm;
use crate::error::DerError;
use crate::oid::Oid;
use crate::reader::{DerReader, Tag, Tlv, parse_single};

/// Top-level split of a certificate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CertificateParts<'a> {
    /// Full `TBSCertificate` TLV.
    pub tbs: &'a [u8],
    /// Outer `signatureAlgorithm` TLV.
    pub signature_algorithm: &'a [u8],
    /// Content octets of the signature BIT STRING.
    pub signature_value: &'a [u8],
}

pub fn split_certificate(der: &[u8]) -> Result<CertificateParts<'_>, DerError> {
    let cert = parse_single(der, Tag::SEQUENCE, "Certificate")?;
    let mut fields = cert.contents("Certificate")?;
    let tbs = fields.read_expected(Tag::SEQUENCE)?.raw;
    let signature_algorithm = fields.read_expected(Tag::SEQUENCE)?.raw;
    let signature_value = fields.read_expected(Tag::BIT_STRING)?.value;
    fields.finish("Certificate")?;
    Ok(CertificateParts {
        tbs,
        signature_algorithm,
        signature_value,
    })
}

/// Every field of a `TBSCertificate`, each as its complete TLV.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TbsFields<'a> {
    /// 0 for v1, 2 for v3.
    pub version: i64,
    pub serial: Tlv<'a>,
    pub signature: &'a [u8],
    pub issuer: &'a [u8],
    pub validity: &'a [u8],
    pub subject: &'a [u8],
    pub spki: &'a [u8],
    /// Content of the `[3]` wrapper: the `Extensions` SEQUENCE.
    pub extensions: Option<&'a [u8]>,
}

pub fn tbs_fields(tbs: &[u8]) -> Result<TbsFields<'_>, DerError> {
    let seq = parse_single(tbs, Tag::SEQUENCE, "TBSCertificate")?;
    let mut r = seq.contents("TBSCertificate")?;

    let version = match r.read_optional(Tag::context(0, true))? {
        Some(wrapper) => {
            let mut inner = wrapper.contents("version")?;
            let v = inner.read_tlv()?.as_i64()?;
            inner.finish("version")?;
            v
        }
        None => 0,
    };
    let serial = r.read_expected(Tag::INTEGER)?;
    let signature = r.read_expected(Tag::SEQUENCE)?.raw;
    let issuer = r.read_expected(Tag::SEQUENCE)?.raw;
    let validity = r.read_expected(Tag::SEQUENCE)?.raw;
    let subject = r.read_expected(Tag::SEQUENCE)?.raw;
    let spki = r.read_expected(Tag::SEQUENCE)?.raw;
    // issuerUniqueID and subjectUniqueID are skipped.
    let _ = r.read_optional(Tag::context(1, false))?;
    let _ = r.read_optional(Tag::context(2, false))?;
    let extensions = match r.read_optional(Tag::context(3, true))? {
        Some(wrapper) => {
            let mut inner = wrapper.contents("extensions")?;
            let exts = inner.read_expected(Tag::SEQUENCE)?.raw;
            inner.finish("extensions")?;
            Some(exts)
        }
        None => None,
    };
    r.finish("TBSCertificate")?;

    Ok(TbsFields {
        version,
        serial,
        signature,
        issuer,
        validity,
        subject,
        spki,
        extensions,
    })
}

/// Raw `AlgorithmIdentifier` of a `SubjectPublicKeyInfo`.
pub fn spki_algorithm(spki: &[u8]) -> Result<&[u8], DerError> {
    let seq = parse_single(spki, Tag::SEQUENCE, "SubjectPublicKeyInfo")?;
    let mut r = seq.contents("SubjectPublicKeyInfo")?;
    let aid = r.read_expected(Tag::SEQUENCE)?.raw;
    r.read_expected(Tag::BIT_STRING)?;
    r.finish("SubjectPublicKeyInfo")?;
    Ok(aid)
}

/// OID governing the public key in a `SubjectPublicKeyInfo`.
pub fn public_key_oid(spki: &[u8]) -> Result<Oid, DerError> {
    algorithm::algorithm_oid(spki_algorithm(spki)?)
}

/// One `Extension` as it appears in the extensions SEQUENCE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawExtension<'a> {
    pub oid: &'a [u8],
    pub critical: bool,
    /// Content of the `extnValue` OCTET STRING.
    pub value: &'a [u8],
}

impl RawExtension<'_> {
    pub fn oid(&self) -> Result<Oid, DerError> {
        Oid::from_der_content(self.oid)
    }
}

pub fn extensions(extensions_seq: &[u8]) -> Result<Vec<RawExtension<'_>>, DerError> {
    let seq = parse_single(extensions_seq, Tag::SEQUENCE, "Extensions")?;
    let mut r = seq.contents("Extensions")?;
    let mut out = Vec::new();
    while !r.is_empty() {
        let ext = r.read_expected(Tag::SEQUENCE)?;
        let mut f = ext.contents("Extension")?;
        let oid = f.read_expected(Tag::OID)?.value;
        let critical = match f.read_optional(Tag::BOOLEAN)? {
            Some(b) => decode_boolean(b.value)?,
            None => false,
        };
        let value = f.read_expected(Tag::OCTET_STRING)?.value;
        f.finish("Extension")?;
        out.push(RawExtension {
            oid,
            critical,
            value,
        });
    }
    Ok(out)
}

fn decode_boolean(content: &[u8]) -> Result<bool, DerError> {
    match content {
        [0x00] => Ok(false),
        [0xff] => Ok(true),
        _ => Err(DerError::InvalidString { kind: "BOOLEAN" }),
    }
}

/// Iterate the top-level elements of a SEQUENCE body.
pub(crate) fn sequence_items<'a>(
    raw: &'a [u8],
    what: &'static str,
) -> Result<DerReader<'a>, DerError> {
    parse_single(raw, Tag::SEQUENCE, what)?.contents(what)
}
