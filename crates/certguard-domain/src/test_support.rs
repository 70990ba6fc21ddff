use crate::lint::{Lint, LintMeta};
use crate::model::{
    BasicConstraints, Certificate, DistinguishedName, Extension, KeyAlgorithm, PublicKeyInfo,
};
use certguard_der::encode;
use certguard_der::oids;
use certguard_types::{LintResult, Source};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn meta(name: &'static str, source: Source) -> LintMeta {
    LintMeta {
        name,
        description: "test lint",
        citation: "test",
        source,
        effective_date: date!(2000 - 01 - 01),
        ineffective_date: None,
    }
}

pub fn oid(dotted: &str) -> Vec<u8> {
    encode::oid(dotted).expect("valid dotted oid")
}

pub fn hex_bytes(h: &str) -> Vec<u8> {
    hex::decode(h).expect("hex")
}

/// Returns the same result for every certificate.
pub struct FixedLint {
    applies: bool,
    result: LintResult,
}

impl FixedLint {
    pub fn always(result: LintResult) -> Self {
        Self {
            applies: true,
            result,
        }
    }

    pub fn never() -> Self {
        Self {
            applies: false,
            result: LintResult::pass(),
        }
    }
}

impl Lint for FixedLint {
    fn check_applies(&self, _cert: &Certificate) -> bool {
        self.applies
    }

    fn execute(&self, _cert: &Certificate) -> LintResult {
        self.result.clone()
    }
}

/// Counts `execute` calls so tests can prove it was or was not reached.
pub struct CountingLint {
    pub applies: bool,
    pub calls: Arc<AtomicUsize>,
}

impl CountingLint {
    pub fn new(applies: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                applies,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Lint for CountingLint {
    fn check_applies(&self, _cert: &Certificate) -> bool {
        self.applies
    }

    fn execute(&self, _cert: &Certificate) -> LintResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LintResult::pass()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanicStage {
    CheckApplies,
    Execute,
}

/// Indexes past the end of the subject, the classic "predicate guaranteed it" bug.
pub struct PanickingLint(pub PanicStage);

impl Lint for PanickingLint {
    fn check_applies(&self, cert: &Certificate) -> bool {
        if self.0 == PanicStage::CheckApplies {
            return cert.subject.attributes[usize::MAX].value.is_empty();
        }
        true
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let attr = &cert.subject.attributes[cert.subject.attributes.len()];
        LintResult::error(attr.value.clone())
    }
}

/// In-memory certificate with just enough real DER in the raw fields for the lints.
#[derive(Clone, Debug)]
pub struct CertBuilder {
    ca: Option<bool>,
    self_issued: bool,
    subject: Vec<Vec<u8>>,
    not_before: OffsetDateTime,
    key: KeyAlgorithm,
    spki_algorithm: Vec<u8>,
    tbs_signature: Vec<u8>,
    extensions: Vec<Extension>,
    policy_oids: Vec<String>,
}

impl CertBuilder {
    fn base(ca: Option<bool>, self_issued: bool) -> Self {
        Self {
            ca,
            self_issued,
            subject: vec![attribute(oids::AT_COMMON_NAME, &encode::utf8_string("example.com"))],
            not_before: datetime!(2024-06-01 00:00 UTC),
            key: KeyAlgorithm::Rsa,
            spki_algorithm: encode::algorithm_identifier(oids::RSA_ENCRYPTION, Some(&encode::null()))
                .expect("rsa aid"),
            tbs_signature: encode::algorithm_identifier(
                oids::SHA256_WITH_RSA_ENCRYPTION,
                Some(&encode::null()),
            )
            .expect("sig aid"),
            extensions: Vec::new(),
            policy_oids: Vec::new(),
        }
    }

    pub fn subscriber() -> Self {
        Self::base(Some(false), false)
    }

    pub fn root_ca() -> Self {
        Self::base(Some(true), true)
    }

    pub fn sub_ca() -> Self {
        Self::base(Some(true), false)
    }

    pub fn self_issued(mut self, yes: bool) -> Self {
        self.self_issued = yes;
        self
    }

    pub fn subject_attr(mut self, oid: &str, value: &str) -> Self {
        let value = if oid == oids::AT_COUNTRY {
            encode::printable_string(value)
        } else {
            encode::utf8_string(value)
        };
        self.subject.push(attribute(oid, &value));
        self
    }

    /// Attribute whose value is already a full TLV.
    pub fn subject_attr_raw(mut self, oid: &str, value: &[u8]) -> Self {
        self.subject.push(attribute(oid, value));
        self
    }

    pub fn not_before(mut self, date: Date) -> Self {
        self.not_before = date.midnight().assume_utc();
        self
    }

    pub fn ec_key(mut self, spki_algorithm: Vec<u8>) -> Self {
        self.key = KeyAlgorithm::Ec;
        self.spki_algorithm = spki_algorithm;
        self
    }

    pub fn rsa_key(mut self, spki_algorithm: Vec<u8>) -> Self {
        self.key = KeyAlgorithm::Rsa;
        self.spki_algorithm = spki_algorithm;
        self
    }

    pub fn tbs_signature(mut self, raw: Vec<u8>) -> Self {
        self.tbs_signature = raw;
        self
    }

    pub fn extension(mut self, oid: &str, critical: bool, value: Vec<u8>) -> Self {
        self.extensions.retain(|e| e.oid != oid);
        self.extensions.push(Extension {
            oid: oid.to_string(),
            critical,
            value,
        });
        self
    }

    pub fn key_usage(self, critical: bool) -> Self {
        self.extension(oids::EXT_KEY_USAGE, critical, encode::bit_string(&[0x06]))
    }

    pub fn eku(self) -> Self {
        let value = encode::sequence(&[oid("1.3.6.1.5.5.7.3.1")]);
        self.extension(oids::EXT_EXTENDED_KEY_USAGE, false, value)
    }

    /// QCStatements built from complete `QCStatement` TLVs.
    pub fn qc_statements(self, statements: &[Vec<u8>]) -> Self {
        self.extension(oids::EXT_QC_STATEMENTS, false, encode::sequence(statements))
    }

    /// Raw QCStatements `extnValue`, for malformed inputs.
    pub fn qc_extension_raw(self, value: Vec<u8>) -> Self {
        self.extension(oids::EXT_QC_STATEMENTS, false, value)
    }

    pub fn certificate_policies(self, value: Vec<u8>) -> Self {
        self.extension(oids::EXT_CERTIFICATE_POLICIES, false, value)
    }

    pub fn ev(mut self) -> Self {
        self.policy_oids.push(oids::CABF_EV_POLICY.to_string());
        self
    }

    pub fn build(self) -> Certificate {
        let subject_raw = encode::sequence(&self.subject);
        let issuer_raw = if self.self_issued {
            subject_raw.clone()
        } else {
            encode::sequence(&[attribute(
                oids::AT_COMMON_NAME,
                &encode::utf8_string("Test Issuing CA"),
            )])
        };
        let spki_raw = encode::sequence(&[self.spki_algorithm.clone(), encode::bit_string(&[0x00])]);
        let basic_constraints = self.ca.map(|ca| BasicConstraints { ca, path_len: None });
        let raw_tbs = encode::sequence(&[
            encode::explicit(0, &encode::integer(2)),
            encode::integer(1),
            self.tbs_signature.clone(),
            issuer_raw.clone(),
            subject_raw.clone(),
            spki_raw.clone(),
        ]);
        let raw = encode::sequence(&[
            raw_tbs.clone(),
            self.tbs_signature.clone(),
            encode::bit_string(&[0x00]),
        ]);
        Certificate {
            raw,
            raw_tbs,
            version: 3,
            serial: vec![0x01],
            signature_algorithm: self.tbs_signature.clone(),
            tbs_signature_algorithm: self.tbs_signature,
            issuer: DistinguishedName::from_der(&issuer_raw).expect("issuer name"),
            subject: DistinguishedName::from_der(&subject_raw).expect("subject name"),
            not_before: self.not_before,
            not_after: self.not_before + time::Duration::days(90),
            public_key: PublicKeyInfo {
                raw: spki_raw,
                algorithm: self.key,
            },
            extensions: self.extensions,
            basic_constraints,
            policy_oids: self.policy_oids,
        }
    }
}

fn attribute(oid_str: &str, value: &[u8]) -> Vec<u8> {
    encode::set(&[encode::sequence(&[oid(oid_str), value.to_vec()])])
}

/// `QCStatement` with an optional `statementInfo`.
pub fn qc_statement(id: &str, info: Option<Vec<u8>>) -> Vec<u8> {
    let mut parts = vec![oid(id)];
    parts.extend(info);
    encode::sequence(&parts)
}

/// PSD2 `statementInfo` from (role oid, role name) pairs and the NCA fields as full TLVs.
pub fn psd2_info(roles: &[(&str, Vec<u8>)], nca_name: Vec<u8>, nca_id: Vec<u8>) -> Vec<u8> {
    let roles: Vec<Vec<u8>> = roles
        .iter()
        .map(|(role, name)| encode::sequence(&[oid(role), name.clone()]))
        .collect();
    encode::sequence(&[encode::sequence(&roles), nca_name, nca_id])
}

/// certificatePolicies with one policy carrying one userNotice explicitText.
pub fn policies_with_explicit_text(text: Option<Vec<u8>>) -> Vec<u8> {
    let notice = match text {
        Some(t) => encode::sequence(&[t]),
        None => encode::sequence(&[]),
    };
    let qualifier = encode::sequence(&[oid(oids::QT_UNOTICE), notice]);
    encode::sequence(&[encode::sequence(&[
        oid("2.23.140.1.2.2"),
        encode::sequence(&[qualifier]),
    ])])
}
