use crate::lint::{Lint, LintMeta};
use crate::model::Certificate;
use certguard_der::policies;
use certguard_der::string::StringKind;
use certguard_der::oids;
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_EXT_CERT_POLICY_EXPLICIT_TEXT_NOT_UTF8,
    description: "Compliant certificates should use the utf8string encoding for explicitText",
    citation: "RFC 6818: 3",
    source: Source::Rfc5280,
    effective_date: date!(2013 - 01 - 01),
    ineffective_date: None,
};

pub(super) struct ExplicitTextNotUtf8;

impl Lint for ExplicitTextNotUtf8 {
    fn check_applies(&self, cert: &Certificate) -> bool {
        let Some(ext) = cert.extension(oids::EXT_CERTIFICATE_POLICIES) else {
            return false;
        };
        match policies::parse_certificate_policies(&ext.value) {
            Ok(parsed) => !policies::explicit_texts(&parsed).is_empty(),
            Err(_) => true,
        }
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(ext) = cert.extension(oids::EXT_CERTIFICATE_POLICIES) else {
            return LintResult::na();
        };
        let parsed = match policies::parse_certificate_policies(&ext.value) {
            Ok(parsed) => parsed,
            Err(e) => {
                return LintResult::error(format!(
                    "certificatePolicies extension cannot be decoded: {e}"
                ));
            }
        };
        match policies::explicit_texts(&parsed)
            .into_iter()
            .find(|t| t.kind != StringKind::Utf8)
        {
            Some(text) => LintResult::warn(format!(
                "explicitText is encoded as {}, should be UTF8String",
                text.kind
            )),
            None => LintResult::pass(),
        }
    }
}
