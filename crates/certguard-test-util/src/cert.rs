use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use certguard_der::{encode, oids};

/// Writes complete X.509 v3 certificates that a general parser accepts.
///
/// The signature is a placeholder; nothing in certguard verifies it. Every other field is
/// real DER so that both the parsed view and the raw slices line up.
#[derive(Clone, Debug)]
pub struct CertificateBuilder {
    serial: Vec<u8>,
    ca: Option<bool>,
    self_issued: bool,
    subject: Vec<Vec<u8>>,
    not_before: String,
    not_after: String,
    spki_algorithm: Vec<u8>,
    public_key: Vec<u8>,
    tbs_signature: Vec<u8>,
    signature_algorithm: Option<Vec<u8>>,
    extensions: Vec<(String, bool, Vec<u8>)>,
    policies: Vec<String>,
}

impl CertificateBuilder {
    fn base(ca: Option<bool>, self_issued: bool) -> Self {
        Self {
            serial: vec![0x01, 0x23, 0x45],
            ca,
            self_issued,
            subject: vec![attribute(
                oids::AT_COMMON_NAME,
                &encode::utf8_string("example.com"),
            )],
            not_before: "240601000000Z".to_string(),
            not_after: "250601000000Z".to_string(),
            spki_algorithm: aid(oids::RSA_ENCRYPTION, Some(&encode::null())),
            public_key: vec![0x30, 0x03, 0x02, 0x01, 0x03],
            tbs_signature: aid(oids::SHA256_WITH_RSA_ENCRYPTION, Some(&encode::null())),
            signature_algorithm: None,
            extensions: Vec::new(),
            policies: Vec::new(),
        }
    }

    /// End-entity certificate issued by "Test Issuing CA".
    pub fn subscriber() -> Self {
        Self::base(Some(false), false)
    }

    pub fn root_ca() -> Self {
        Self::base(Some(true), true)
    }

    pub fn sub_ca() -> Self {
        Self::base(Some(true), false)
    }

    /// Drop the basicConstraints extension entirely.
    pub fn without_basic_constraints(mut self) -> Self {
        self.ca = None;
        self
    }

    pub fn self_issued(mut self, yes: bool) -> Self {
        self.self_issued = yes;
        self
    }

    pub fn serial(mut self, magnitude: &[u8]) -> Self {
        self.serial = magnitude.to_vec();
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

    /// Attribute whose value is already a complete TLV.
    pub fn subject_attr_raw(mut self, oid: &str, value: &[u8]) -> Self {
        self.subject.push(attribute(oid, value));
        self
    }

    /// `notBefore` as a UTCTime string, e.g. `"240601000000Z"`.
    pub fn not_before(mut self, utc_time: &str) -> Self {
        self.not_before = utc_time.to_string();
        self
    }

    pub fn not_after(mut self, utc_time: &str) -> Self {
        self.not_after = utc_time.to_string();
        self
    }

    /// P-256 key with the canonical `AlgorithmIdentifier` and ecdsa-with-SHA256 signatures.
    pub fn ec_p256(self) -> Self {
        let curve = encode::oid(oids::SECP256R1).expect("curve oid");
        let mut point = vec![0x04];
        point.extend([0x11; 64]);
        self.ec_key(aid(oids::EC_PUBLIC_KEY, Some(&curve)), point)
            .signature(aid(oids::ECDSA_WITH_SHA256, None))
    }

    pub fn ec_key(mut self, spki_algorithm: Vec<u8>, point: Vec<u8>) -> Self {
        self.spki_algorithm = spki_algorithm;
        self.public_key = point;
        self
    }

    /// RSA key whose `AlgorithmIdentifier` is supplied raw.
    pub fn rsa_key(mut self, spki_algorithm: Vec<u8>) -> Self {
        self.spki_algorithm = spki_algorithm;
        self
    }

    /// Same `AlgorithmIdentifier` in the TBS and the outer signature.
    pub fn signature(mut self, raw: Vec<u8>) -> Self {
        self.tbs_signature = raw;
        self.signature_algorithm = None;
        self
    }

    /// Outer `signatureAlgorithm` only, leaving the TBS copy as is.
    pub fn outer_signature(mut self, raw: Vec<u8>) -> Self {
        self.signature_algorithm = Some(raw);
        self
    }

    /// Add an extension, replacing any earlier one with the same OID.
    pub fn extension(mut self, oid: &str, critical: bool, value: Vec<u8>) -> Self {
        self.extensions.retain(|(o, _, _)| o != oid);
        self.extensions.push((oid.to_string(), critical, value));
        self
    }

    /// keyUsage with a single byte of flags (`0x06` is keyCertSign|cRLSign).
    pub fn key_usage(self, critical: bool, bits: u8) -> Self {
        self.extension(oids::EXT_KEY_USAGE, critical, encode::bit_string(&[bits]))
    }

    pub fn extended_key_usage(self, purposes: &[&str]) -> Self {
        let purposes: Vec<Vec<u8>> = purposes
            .iter()
            .map(|p| encode::oid(p).expect("eku oid"))
            .collect();
        self.extension(
            oids::EXT_EXTENDED_KEY_USAGE,
            false,
            encode::sequence(&purposes),
        )
    }

    /// Assert a policy OID. Ignored if a raw certificatePolicies extension is set.
    pub fn policy(mut self, oid: &str) -> Self {
        self.policies.push(oid.to_string());
        self
    }

    pub fn ev(self) -> Self {
        self.policy(oids::CABF_EV_POLICY)
    }

    /// QCStatements from complete `QCStatement` TLVs (see [`qc_statement`](Self::qc_statement)).
    pub fn qc_statements(self, statements: &[Vec<u8>]) -> Self {
        self.extension(
            oids::EXT_QC_STATEMENTS,
            false,
            encode::sequence(statements),
        )
    }

    /// `QCStatement` with an optional `statementInfo`.
    pub fn qc_statement(id: &str, info: Option<Vec<u8>>) -> Vec<u8> {
        let mut parts = vec![encode::oid(id).expect("statement oid")];
        parts.extend(info);
        encode::sequence(&parts)
    }

    pub fn build(&self) -> Vec<u8> {
        let subject = encode::sequence(&self.subject);
        let issuer = if self.self_issued {
            subject.clone()
        } else {
            encode::sequence(&[attribute(
                oids::AT_COMMON_NAME,
                &encode::utf8_string("Test Issuing CA"),
            )])
        };
        let spki = encode::sequence(&[
            self.spki_algorithm.clone(),
            encode::bit_string(&self.public_key),
        ]);
        let validity = encode::sequence(&[
            encode::utc_time(&self.not_before),
            encode::utc_time(&self.not_after),
        ]);

        let mut tbs_parts = vec![
            encode::explicit(0, &encode::integer(2)),
            encode::unsigned_integer(&self.serial),
            self.tbs_signature.clone(),
            issuer,
            validity,
            subject,
            spki,
        ];
        let extensions = self.extensions_der();
        if !extensions.is_empty() {
            tbs_parts.push(encode::explicit(3, &encode::sequence(&extensions)));
        }
        let tbs = encode::sequence(&tbs_parts);

        let outer = self
            .signature_algorithm
            .clone()
            .unwrap_or_else(|| self.tbs_signature.clone());
        encode::sequence(&[tbs, outer, encode::bit_string(&[0x5a; 16])])
    }

    pub fn build_pem(&self) -> String {
        pem_encode(&self.build())
    }

    fn extensions_der(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        if let Some(ca) = self.ca {
            let value = if ca {
                encode::sequence(&[encode::boolean(true)])
            } else {
                encode::sequence(&[])
            };
            out.push(extension(oids::EXT_BASIC_CONSTRAINTS, ca, &value));
        }
        let has_raw_policies = self
            .extensions
            .iter()
            .any(|(oid, _, _)| oid == oids::EXT_CERTIFICATE_POLICIES);
        if !self.policies.is_empty() && !has_raw_policies {
            let infos: Vec<Vec<u8>> = self
                .policies
                .iter()
                .map(|p| encode::sequence(&[encode::oid(p).expect("policy oid")]))
                .collect();
            out.push(extension(
                oids::EXT_CERTIFICATE_POLICIES,
                false,
                &encode::sequence(&infos),
            ));
        }
        out.extend(
            self.extensions
                .iter()
                .map(|(oid, critical, value)| extension(oid, *critical, value)),
        );
        out
    }
}

/// Armor DER as a single `CERTIFICATE` PEM block.
pub fn pem_encode(der: &[u8]) -> String {
    let body = STANDARD.encode(der);
    let mut out = String::from("-----BEGIN CERTIFICATE-----\n");
    for line in body.as_bytes().chunks(64) {
        out.push_str(&String::from_utf8_lossy(line));
        out.push('\n');
    }
    out.push_str("-----END CERTIFICATE-----\n");
    out
}

fn aid(oid: &str, params: Option<&[u8]>) -> Vec<u8> {
    encode::algorithm_identifier(oid, params).expect("algorithm identifier")
}

fn attribute(oid: &str, value: &[u8]) -> Vec<u8> {
    let oid = encode::oid(oid).expect("attribute oid");
    encode::set(&[encode::sequence(&[oid, value.to_vec()])])
}

fn extension(oid: &str, critical: bool, value: &[u8]) -> Vec<u8> {
    let mut parts = vec![encode::oid(oid).expect("extension oid")];
    if critical {
        parts.push(encode::boolean(true));
    }
    parts.push(encode::octet_string(value));
    encode::sequence(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use certguard_der::cert;

    #[test]
    fn output_splits_into_certificate_parts() {
        let der = CertificateBuilder::subscriber().ev().build();
        let parts = cert::split_certificate(&der).expect("split");
        let fields = cert::tbs_fields(parts.tbs).expect("tbs");
        assert_eq!(fields.version, 2);
        assert_eq!(fields.signature, parts.signature_algorithm);
        assert!(fields.extensions.is_some());
    }

    #[test]
    fn pem_wraps_at_64_columns() {
        let pem = CertificateBuilder::root_ca().build_pem();
        assert!(pem.starts_with("-----BEGIN CERTIFICATE-----\n"));
        assert!(pem.ends_with("-----END CERTIFICATE-----\n"));
        assert!(pem.lines().all(|l| l.len() <= 64));
    }
}
