use crate::lint::{Lint, LintMeta};
use crate::lints::util;
use crate::model::Certificate;
use certguard_der::{oids, qc};
use certguard_types::{LintResult, Source, ids};
use time::macros::date;

pub(super) const META: LintMeta = LintMeta {
    name: ids::LINT_QCSTATEM_PSD2_NCAID_FORMAT,
    description: "Checks that the PSD2 QC statement is well formed and its NCA identifier follows the CC-XXXX format",
    citation: "ETSI TS 119 495 V1.3.1 5.1",
    source: Source::EtsiEsi,
    effective_date: date!(2018 - 03 - 01),
    ineffective_date: None,
};

pub(super) struct Psd2NcaIdFormat;

impl Lint for Psd2NcaIdFormat {
    fn check_applies(&self, cert: &Certificate) -> bool {
        util::qc_statement_applies(cert, oids::PSD2_STATEMENT)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        util::check_qc_statements(cert, oids::PSD2_STATEMENT, |statement, errors| {
            match qc::decode_psd2(statement) {
                Ok(psd2) => {
                    if let Err(e) = qc::check_nca_id(&psd2.nca_id) {
                        errors.push(e);
                    }
                }
                Err(found) => errors.extend(found),
            }
        })
    }
}
