use crate::lint::{Lint, LintMeta};
use crate::lints::util;
use crate::model::Certificate;
use certguard_der::org_id::{self, OrgIdProfile};
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_EV_ORGID_ETSI,
    description: "subject:organizationIdentifier in a non-PSD2 EV certificate must follow the ETSI EN 319 412-1 semantics identifier syntax",
    citation: "ETSI EN 319 412-1 V1.4.2 5.1.4",
    source: Source::EtsiEsi,
    effective_date: date!(2019 - 08 - 01),
    ineffective_date: None,
};

pub(super) struct EvOrgIdEtsi;

impl Lint for EvOrgIdEtsi {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ev() && !util::has_psd2_statement(cert) && util::subject_org_id(cert).is_some()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        match util::subject_org_id(cert) {
            None => LintResult::na(),
            Some(Err(e)) => LintResult::error(e),
            Some(Ok(value)) => match org_id::parse_org_id(&value, OrgIdProfile::Etsi) {
                Ok(_) => LintResult::pass(),
                Err(e) => LintResult::error(e.to_string()),
            },
        }
    }
}
