use crate::lint::{Lint, LintMeta};
use crate::model::Certificate;
use certguard_der::oids;
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_SUB_CERT_LOCALITY_NAME_MUST_APPEAR,
    description: "Subscriber Certificate: subject:localityName MUST appear if subject:organizationName, subject:givenName, or subject:surname fields are present but the subject:stateOrProvinceName field is absent.",
    citation: "BRs: 7.1.4.2.2",
    source: Source::CabfBaselineRequirements,
    effective_date: date!(2016 - 09 - 07),
    ineffective_date: None,
};

pub(super) struct SubCertLocalityName;

impl Lint for SubCertLocalityName {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subscriber()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let subject = &cert.subject;
        let identifies_subject = [oids::AT_ORGANIZATION, oids::AT_GIVEN_NAME, oids::AT_SURNAME]
            .iter()
            .any(|oid| subject.has(oid));
        if identifies_subject
            && !subject.has(oids::AT_STATE_OR_PROVINCE)
            && !subject.has(oids::AT_LOCALITY)
        {
            return LintResult::error(
                "subject:localityName is required when subject:stateOrProvinceName is absent",
            );
        }
        LintResult::pass()
    }
}
