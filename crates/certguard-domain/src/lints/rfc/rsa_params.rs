use crate::lint::{Lint, LintMeta};
use crate::model::{Certificate, KeyAlgorithm};
use certguard_der::{algorithm, cert, oids};
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const SPKI_META: LintMeta = LintMeta {
    name: ids::LINT_SPKI_RSA_ENCRYPTION_PARAMETER_NOT_NULL,
    description: "RSA: Encoded public key algorithm identifier MUST have NULL parameters",
    citation: "RFC 4055, Section 1.2",
    source: Source::Rfc5280,
    effective_date: date!(2002 - 04 - 01),
    ineffective_date: None,
};

pub(super) struct SpkiRsaEncryptionNull;

impl Lint for SpkiRsaEncryptionNull {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.public_key.algorithm == KeyAlgorithm::Rsa
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let raw = match cert::spki_algorithm(&cert.public_key.raw) {
            Ok(raw) => raw,
            Err(e) => {
                return LintResult::error(format!(
                    "error reading public key algorithm identifier: {e}"
                ));
            }
        };
        match algorithm::check_algorithm_id_param_null(raw, oids::RSA_ENCRYPTION) {
            Ok(()) => LintResult::pass(),
            Err(e) => LintResult::error(e.to_string()),
        }
    }
}

pub(super) const TBS_SIGNATURE_META: LintMeta = LintMeta {
    name: ids::LINT_TBS_SIGNATURE_RSA_ENCRYPTION_PARAMETER_NOT_NULL,
    description: "RSA: Encoded signature algorithm identifier MUST have NULL parameters",
    citation: "RFC 4055, Section 5; RFC 8017, Appendix A.2.4",
    source: Source::Rfc5280,
    effective_date: date!(2002 - 04 - 01),
    ineffective_date: None,
};

pub(super) struct TbsSignatureRsaNull;

fn pkcs1_signature_oid(cert: &Certificate) -> Option<&'static str> {
    let oid = algorithm::algorithm_oid(&cert.tbs_signature_algorithm).ok()?;
    oids::RSA_PKCS1_SIGNATURE_ALGORITHMS
        .iter()
        .copied()
        .find(|a| oid.matches(a))
}

impl Lint for TbsSignatureRsaNull {
    fn check_applies(&self, cert: &Certificate) -> bool {
        pkcs1_signature_oid(cert).is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(expected) = pkcs1_signature_oid(cert) else {
            return LintResult::na();
        };
        match algorithm::check_algorithm_id_param_null(&cert.tbs_signature_algorithm, expected) {
            Ok(()) => LintResult::pass(),
            Err(e) => LintResult::error(e.to_string()),
        }
    }
}
