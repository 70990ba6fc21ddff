use crate::lint::{Lint, LintMeta};
use crate::model::Certificate;
use certguard_der::oids;
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_SUBJECT_CONTAINS_ORGANIZATIONAL_UNIT_NAME,
    description: "OrganizationalUnitName is prohibited if...the certificate was issued on or after September 1, 2022",
    citation: "BRs: 7.1.4.2.2-i",
    source: Source::CabfBaselineRequirements,
    effective_date: date!(2022 - 09 - 01),
    ineffective_date: None,
};

pub(super) struct SubjectOrganizationalUnit;

impl Lint for SubjectOrganizationalUnit {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subscriber()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        match cert.subject.values(oids::AT_ORGANIZATIONAL_UNIT).next() {
            Some(ou) => LintResult::error(format!(
                "subject:organizationalUnitName is prohibited, found {ou:?}"
            )),
            None => LintResult::pass(),
        }
    }
}
