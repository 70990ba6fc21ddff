use crate::lint::{Lint, LintMeta};
use crate::lints::util;
use crate::model::Certificate;
use certguard_der::{oids, qc};
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_QCSTATEM_QCLIMITVALUE_VALID,
    description: "Checks that a QC Statement of the type id-etsi-qcs-QcLimitValue has the correct form",
    citation: "ETSI EN 319 412-5 V2.2.1 4.3.2",
    source: Source::EtsiEsi,
    effective_date: date!(2017 - 11 - 01),
    ineffective_date: None,
};

pub(super) struct QcLimitValueValid;

impl Lint for QcLimitValueValid {
    fn check_applies(&self, cert: &Certificate) -> bool {
        util::qc_statement_applies(cert, oids::QCS_QC_LIMIT_VALUE)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        util::check_qc_statements(cert, oids::QCS_QC_LIMIT_VALUE, |statement, errors| {
            if let Err(found) = qc::decode_limit_value(statement) {
                errors.extend(found);
            }
        })
    }
}
