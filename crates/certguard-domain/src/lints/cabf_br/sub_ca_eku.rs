use crate::lint::{Lint, LintMeta};
use crate::model::Certificate;
use certguard_der::oids;
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_SUB_CA_EKU_MISSING,
    description: "Subordinate CA certificate MAY have extKeyUsage extension present",
    citation: "BRs: 7.1.2.2",
    source: Source::CabfBaselineRequirements,
    effective_date: date!(2012 - 07 - 01),
    ineffective_date: None,
};

pub(super) struct SubCaEkuMissing;

impl Lint for SubCaEkuMissing {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_sub_ca()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if cert.has_extension(oids::EXT_EXTENDED_KEY_USAGE) {
            LintResult::pass()
        } else {
            LintResult::notice("subordinate CA certificate has no extKeyUsage extension")
        }
    }
}
