use crate::lint::{Lint, LintMeta};
use crate::model::{Certificate, KeyAlgorithm};
use certguard_der::algorithm::{self, EC_PUBLIC_KEY_ENCODINGS};
use certguard_der::cert;
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_MP_ECDSA_PUB_KEY_ENCODING_CORRECT,
    description: "The encoded algorithm identifiers for ECDSA public keys MUST match specific bytes",
    citation: "Mozilla Root Store Policy / Section 5.1.2",
    source: Source::MozillaRootStorePolicy,
    effective_date: date!(2020 - 01 - 01),
    ineffective_date: None,
};

pub(super) struct EcdsaPubKeyEncoding;

impl Lint for EcdsaPubKeyEncoding {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.public_key.algorithm == KeyAlgorithm::Ec
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
        match algorithm::match_canonical(raw, &EC_PUBLIC_KEY_ENCODINGS) {
            Ok(_) => LintResult::pass(),
            Err(m) => LintResult::error(format!(
                "Wrong encoding of ECC public key. Got the unsupported {}",
                m.hex
            )),
        }
    }
}
