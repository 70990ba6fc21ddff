use crate::lint::{Lint, LintMeta};
use crate::lints::util;
use crate::model::Certificate;
use certguard_der::{oids, qc};
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_QCSTATEM_QCSSCD_VALID,
    description: "Checks that a QC Statement of the type id-etsi-qcs-QcSSCD has the correct form",
    citation: "ETSI EN 319 412-5 V2.2.1 4.2.2",
    source: Source::EtsiEsi,
    effective_date: date!(2017 - 11 - 01),
    ineffective_date: None,
};

pub(super) struct QcSscdValid;

impl Lint for QcSscdValid {
    fn check_applies(&self, cert: &Certificate) -> bool {
        util::qc_statement_applies(cert, oids::QCS_QC_SSCD)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        util::check_qc_statements(cert, oids::QCS_QC_SSCD, |statement, errors| {
            if let Err(e) = qc::check_marker(statement, "QcSSCD") {
                errors.push(e);
            }
        })
    }
}
