use certguard_der::{DerError, name, oids};
use std::fmt;
use time::{Date, OffsetDateTime, UtcOffset};

/// A parsed certificate as the lints see it.
///
/// Built once by an input adapter and never mutated while lints run. Parsed
/// convenience fields sit next to the raw encodings they came from so that lints can
/// drop to byte-level checks when the parsed view hides a detail.
#[derive(Clone, Debug)]
pub struct Certificate {
    /// Full DER encoding.
    pub raw: Vec<u8>,
    /// `TBSCertificate` TLV.
    pub raw_tbs: Vec<u8>,
    /// 1, 2 or 3.
    pub version: u8,
    /// Serial number magnitude, big-endian.
    pub serial: Vec<u8>,
    /// `signature` field inside the TBS (raw `AlgorithmIdentifier`).
    pub tbs_signature_algorithm: Vec<u8>,
    /// Outer `signatureAlgorithm` (raw `AlgorithmIdentifier`).
    pub signature_algorithm: Vec<u8>,
    pub issuer: DistinguishedName,
    pub subject: DistinguishedName,
    pub not_before: OffsetDateTime,
    pub not_after: OffsetDateTime,
    pub public_key: PublicKeyInfo,
    pub extensions: Vec<Extension>,
    pub basic_constraints: Option<BasicConstraints>,
    /// Policy OIDs from the certificate policies extension, dotted.
    pub policy_oids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    pub oid: String,
    pub critical: bool,
    /// Content of `extnValue`.
    pub value: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasicConstraints {
    pub ca: bool,
    pub path_len: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Rsa,
    Ec,
    Ed25519,
    Dsa,
    Other,
}

impl KeyAlgorithm {
    pub fn from_oid(dotted: &str) -> KeyAlgorithm {
        match dotted {
            oids::RSA_ENCRYPTION => KeyAlgorithm::Rsa,
            oids::EC_PUBLIC_KEY => KeyAlgorithm::Ec,
            oids::ED25519 => KeyAlgorithm::Ed25519,
            oids::DSA => KeyAlgorithm::Dsa,
            _ => KeyAlgorithm::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyInfo {
    /// Full `SubjectPublicKeyInfo` TLV.
    pub raw: Vec<u8>,
    pub algorithm: KeyAlgorithm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameAttribute {
    pub oid: String,
    pub value: String,
}

/// Subject or issuer name: the raw encoding plus a flattened attribute list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistinguishedName {
    pub raw: Vec<u8>,
    pub attributes: Vec<NameAttribute>,
}

impl DistinguishedName {
    /// Decode attributes straight from a DER `Name`.
    ///
    /// Values that are not directory strings are kept as lowercase hex.
    pub fn from_der(raw: &[u8]) -> Result<DistinguishedName, DerError> {
        let attributes = name::attributes(raw)?
            .into_iter()
            .map(|a| NameAttribute {
                oid: a.oid.to_string(),
                value: a
                    .text()
                    .map(|s| s.text)
                    .unwrap_or_else(|_| hex::encode(a.value.value)),
            })
            .collect();
        Ok(DistinguishedName {
            raw: raw.to_vec(),
            attributes,
        })
    }

    pub fn has(&self, oid: &str) -> bool {
        self.attributes.iter().any(|a| a.oid == oid)
    }

    pub fn values<'a>(&'a self, oid: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .iter()
            .filter(move |a| a.oid == oid)
            .map(|a| a.value.as_str())
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", short_name(&attr.oid), attr.value)?;
        }
        Ok(())
    }
}

fn short_name(oid: &str) -> &str {
    match oid {
        oids::AT_COMMON_NAME => "CN",
        oids::AT_COUNTRY => "C",
        oids::AT_LOCALITY => "L",
        oids::AT_STATE_OR_PROVINCE => "ST",
        oids::AT_ORGANIZATION => "O",
        oids::AT_ORGANIZATIONAL_UNIT => "OU",
        oids::AT_SERIAL_NUMBER => "serialNumber",
        oids::AT_ORGANIZATION_IDENTIFIER => "organizationIdentifier",
        other => other,
    }
}

impl Certificate {
    pub fn extension(&self, oid: &str) -> Option<&Extension> {
        self.extensions.iter().find(|e| e.oid == oid)
    }

    pub fn has_extension(&self, oid: &str) -> bool {
        self.extension(oid).is_some()
    }

    pub fn is_ca(&self) -> bool {
        self.basic_constraints.is_some_and(|bc| bc.ca)
    }

    /// Issuer and subject encode to the same bytes.
    pub fn is_self_issued(&self) -> bool {
        self.issuer.raw == self.subject.raw
    }

    pub fn is_root_ca(&self) -> bool {
        self.is_ca() && self.is_self_issued()
    }

    pub fn is_sub_ca(&self) -> bool {
        self.is_ca() && !self.is_self_issued()
    }

    pub fn is_subscriber(&self) -> bool {
        !self.is_ca() && !self.is_self_issued()
    }

    /// Asserts the CA/Browser Forum EV policy.
    pub fn is_ev(&self) -> bool {
        self.policy_oids.iter().any(|p| p == oids::CABF_EV_POLICY)
    }

    /// Calendar date (UTC) that effective-date windows are compared against.
    pub fn not_before_date(&self) -> Date {
        self.not_before.to_offset(UtcOffset::UTC).date()
    }
}
