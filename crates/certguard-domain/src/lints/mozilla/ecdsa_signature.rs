use crate::lint::{Lint, LintMeta};
use crate::model::{Certificate, KeyAlgorithm};
use certguard_der::algorithm::{
    self, CanonicalEncoding, EC_PUBLIC_KEY_ENCODINGS, ECDSA_SIGNATURE_ENCODINGS,
};
use certguard_der::{cert, oids};
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_MP_ECDSA_SIGNATURE_ENCODING_CORRECT,
    description: "The encoded algorithm identifiers for ECDSA signatures MUST match specific bytes",
    citation: "Mozilla Root Store Policy / Section 5.1.2",
    source: Source::MozillaRootStorePolicy,
    effective_date: date!(2020 - 01 - 01),
    ineffective_date: None,
};

const ECDSA_SCHEMES: [&str; 3] = [
    oids::ECDSA_WITH_SHA256,
    oids::ECDSA_WITH_SHA384,
    oids::ECDSA_WITH_SHA512,
];

pub(super) struct EcdsaSignatureEncoding;

impl Lint for EcdsaSignatureEncoding {
    fn check_applies(&self, cert: &Certificate) -> bool {
        algorithm::algorithm_oid(&cert.tbs_signature_algorithm)
            .is_ok_and(|oid| ECDSA_SCHEMES.iter().any(|s| oid.matches(s)))
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let raw = cert.tbs_signature_algorithm.as_slice();
        // A self-issued certificate is signed by its own key, so the curve pins the hash.
        if cert.is_self_issued()
            && let Some((curve, expected)) = signing_curve(cert)
        {
            if raw == expected.der {
                return LintResult::pass();
            }
            return LintResult::error(format!(
                "Encoding of signature algorithm does not match signing key on {curve}. Got the unsupported {}",
                hex::encode(raw)
            ));
        }
        match algorithm::match_canonical(raw, &ECDSA_SIGNATURE_ENCODINGS) {
            Ok(_) => LintResult::pass(),
            Err(m) => LintResult::error(format!(
                "Wrong encoding of ECDSA signature algorithm. Got the unsupported {}",
                m.hex
            )),
        }
    }
}

/// Curve name of the certificate's own EC key and the signature encoding it requires.
fn signing_curve(cert: &Certificate) -> Option<(&'static str, CanonicalEncoding)> {
    if cert.public_key.algorithm != KeyAlgorithm::Ec {
        return None;
    }
    let spki_alg = cert::spki_algorithm(&cert.public_key.raw).ok()?;
    let curve = algorithm::ec_named_curve(spki_alg).ok()??;
    let hash = match curve.to_string().as_str() {
        oids::SECP256R1 => oids::ECDSA_WITH_SHA256,
        oids::SECP384R1 => oids::ECDSA_WITH_SHA384,
        _ => return None,
    };
    let name = EC_PUBLIC_KEY_ENCODINGS
        .iter()
        .find(|e| curve.matches(e.oid))
        .map(|e| e.name)?;
    let expected = ECDSA_SIGNATURE_ENCODINGS
        .iter()
        .copied()
        .find(|e| e.oid == hash)?;
    Some((name, expected))
}
