use crate::lint::{Lint, LintMeta};
use crate::model::Certificate;
use certguard_der::oids;
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_ROOT_CA_KEY_USAGE_MUST_BE_CRITICAL,
    description: "Root CA certificates MUST have Key Usage Extension marked critical",
    citation: "BRs: 7.1.2.1",
    source: Source::CabfBaselineRequirements,
    effective_date: date!(1999 - 01 - 01),
    ineffective_date: None,
};

pub(super) struct RootCaKeyUsageCritical;

impl Lint for RootCaKeyUsageCritical {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_root_ca() && cert.has_extension(oids::EXT_KEY_USAGE)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        match cert.extension(oids::EXT_KEY_USAGE) {
            Some(ext) if ext.critical => LintResult::pass(),
            Some(_) => LintResult::error("keyUsage extension is not marked critical"),
            None => LintResult::error("keyUsage extension is missing"),
        }
    }
}
