use crate::lint::{Lint, LintMeta};
use crate::lints::util;
use crate::model::Certificate;
use certguard_der::{oids, qc};
use certguard_types::{LintResult, Source, Status, ids};
use time::macros::date;

const KNOWN_TYPES: [&str; 3] = [oids::QCT_ESIGN, oids::QCT_ESEAL, oids::QCT_WEB];

pub(super) const VALID_META: LintMeta = LintMeta {
    name: ids::LINT_QCSTATEM_QCTYPE_VALID,
    description: "Checks that a QC Statement of the type id-etsi-qcs-QcType has the correct form",
    citation: "ETSI EN 319 412-5 V2.2.1 4.2.3",
    source: Source::EtsiEsi,
    effective_date: date!(2017 - 11 - 01),
    ineffective_date: None,
};

pub(super) struct QcTypeValid;

impl Lint for QcTypeValid {
    fn check_applies(&self, cert: &Certificate) -> bool {
        util::qc_statement_applies(cert, oids::QCS_QC_TYPE)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let mut seen = 0;
        let result = util::check_qc_statements(cert, oids::QCS_QC_TYPE, |statement, errors| {
            seen += 1;
            match qc::decode_qc_type(statement) {
                Err(e) => errors.push(e),
                Ok(types) if types.is_empty() => {
                    errors.push("no QcType present, sequence of OIDs is empty".to_string());
                }
                Ok(types) => errors.extend(
                    types
                        .iter()
                        .filter(|t| !KNOWN_TYPES.iter().any(|k| t.matches(k)))
                        .map(|t| format!("encountered invalid ETSI QcType OID: {t}")),
                ),
            }
        });
        if seen > 1 {
            return LintResult::error(format!("invalid number of QcType objects: {seen}"));
        }
        result
    }
}

pub(super) const WEB_META: LintMeta = LintMeta {
    name: ids::LINT_QCSTATEM_QCTYPE_WEB,
    description: "Checks that a QC Statement of the type id-etsi-qcs-QcType indicates a web certificate",
    citation: "ETSI EN 319 412-5 V2.2.1 4.2.3",
    source: Source::EtsiEsi,
    effective_date: date!(2017 - 11 - 01),
    ineffective_date: None,
};

pub(super) struct QcTypeWeb;

impl Lint for QcTypeWeb {
    fn check_applies(&self, cert: &Certificate) -> bool {
        util::qc_statement_applies(cert, oids::QCS_QC_TYPE)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let mut seen = 0;
        let mut is_web = false;
        let result = util::check_qc_statements(cert, oids::QCS_QC_TYPE, |statement, errors| {
            seen += 1;
            match qc::decode_qc_type(statement) {
                Err(e) => errors.push(e),
                Ok(types) if types.is_empty() => {
                    errors.push("no QcType present, sequence of OIDs is empty".to_string());
                }
                Ok(types) => is_web = types.iter().any(|t| t.matches(oids::QCT_WEB)),
            }
        });
        if seen > 1 {
            return LintResult::error(format!("invalid number of QcType objects: {seen}"));
        }
        if result.status != Status::Pass {
            return result;
        }
        if is_web {
            LintResult::pass()
        } else {
            LintResult::warn("etsi Type does not indicate certificate as a 'web' certificate")
        }
    }
}
