use crate::lint::{Lint, LintMeta};
use crate::lints::util;
use crate::model::Certificate;
use certguard_der::org_id::{self, OrgIdProfile};
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_EV_ORGID,
    description: "subject:organizationIdentifier, if present, must use the registration reference syntax SSSCC[+SP]-reference",
    citation: "EVGs: 9.2.8",
    source: Source::CabfEvGuidelines,
    effective_date: date!(2020 - 01 - 31),
    ineffective_date: None,
};

pub(super) struct EvOrgId;

impl Lint for EvOrgId {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && util::subject_org_id(cert).is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        match util::subject_org_id(cert) {
            None => LintResult::na(),
            Some(Err(e)) => LintResult::error(e),
            Some(Ok(value)) => match org_id::parse_org_id(&value, OrgIdProfile::Cabf) {
                Ok(_) => LintResult::pass(),
                Err(e) => LintResult::error(e.to_string()),
            },
        }
    }
}
