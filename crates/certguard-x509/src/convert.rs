use anyhow::Context;
use certguard_der::cert;
use certguard_domain::model::{
    BasicConstraints, Certificate, DistinguishedName, Extension, KeyAlgorithm, PublicKeyInfo,
};
use ::time::OffsetDateTime;
use x509_parser::prelude::*;

/// Parse one DER certificate. Bytes after the certificate are an error.
pub fn parse_der(der: &[u8]) -> anyhow::Result<Certificate> {
    let (rest, x509) =
        X509Certificate::from_der(der).map_err(|e| anyhow::anyhow!("invalid certificate: {e}"))?;
    if !rest.is_empty() {
        anyhow::bail!("{} bytes of trailing data after certificate", rest.len());
    }
    let parts = cert::split_certificate(der).context("splitting certificate")?;
    let fields = cert::tbs_fields(parts.tbs).context("splitting TBSCertificate")?;
    let tbs = &x509.tbs_certificate;

    let version = match tbs.version.0 {
        v @ 0..=2 => v as u8 + 1,
        other => anyhow::bail!("unsupported X.509 version {}", other + 1),
    };

    let not_before = timestamp(tbs.validity.not_before.timestamp()).context("notBefore")?;
    let not_after = timestamp(tbs.validity.not_after.timestamp()).context("notAfter")?;

    let basic_constraints = tbs
        .basic_constraints()
        .map_err(|e| anyhow::anyhow!("invalid basicConstraints: {e}"))?
        .map(|bc| BasicConstraints {
            ca: bc.value.ca,
            path_len: bc.value.path_len_constraint,
        });

    let extensions = tbs
        .extensions()
        .iter()
        .map(|ext| Extension {
            oid: ext.oid.to_id_string(),
            critical: ext.critical,
            value: ext.value.to_vec(),
        })
        .collect();

    let policy_oids = tbs
        .extensions()
        .iter()
        .filter_map(|ext| match ext.parsed_extension() {
            ParsedExtension::CertificatePolicies(policies) => Some(policies),
            _ => None,
        })
        .flat_map(|policies| policies.iter().map(|p| p.policy_id.to_id_string()))
        .collect();

    let key_oid = tbs.subject_pki.algorithm.algorithm.to_id_string();

    Ok(Certificate {
        raw_tbs: parts.tbs.to_vec(),
        version,
        serial: tbs.raw_serial().to_vec(),
        tbs_signature_algorithm: fields.signature.to_vec(),
        signature_algorithm: parts.signature_algorithm.to_vec(),
        issuer: DistinguishedName::from_der(fields.issuer).context("decoding issuer")?,
        subject: DistinguishedName::from_der(fields.subject).context("decoding subject")?,
        not_before,
        not_after,
        public_key: PublicKeyInfo {
            raw: fields.spki.to_vec(),
            algorithm: KeyAlgorithm::from_oid(&key_oid),
        },
        extensions,
        basic_constraints,
        policy_oids,
        raw: der.to_vec(),
    })
}

fn timestamp(ts: i64) -> anyhow::Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(ts).context("timestamp out of range")
}
