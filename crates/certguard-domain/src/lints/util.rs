use crate::model::Certificate;
use certguard_der::{name, oids};
#[cfg(feature = "lints-etsi")]
use certguard_der::DerError;
#[cfg(feature = "lints-etsi")]
use certguard_der::qc::{self, QcStatement};
#[cfg(feature = "lints-etsi")]
use certguard_types::LintResult;

/// Decoded QCStatements, or `None` when the extension is absent.
#[cfg(feature = "lints-etsi")]
pub fn qc_statements(cert: &Certificate) -> Option<Result<Vec<QcStatement<'_>>, DerError>> {
    cert.extension(oids::EXT_QC_STATEMENTS)
        .map(|ext| qc::parse_qc_statements(&ext.value))
}

/// A QC lint applies when its statement is present, or when the extension is
/// present but cannot be decoded (so the failure gets reported).
#[cfg(feature = "lints-etsi")]
pub fn qc_statement_applies(cert: &Certificate, id: &str) -> bool {
    match qc_statements(cert) {
        None => false,
        Some(Err(_)) => true,
        Some(Ok(statements)) => qc::find_statements(&statements, id).next().is_some(),
    }
}

/// Run `check` over every statement with `id`; a malformed extension is an `Error`.
#[cfg(feature = "lints-etsi")]
pub fn check_qc_statements<F>(cert: &Certificate, id: &str, mut check: F) -> LintResult
where
    F: FnMut(&QcStatement<'_>, &mut Vec<String>),
{
    let statements = match qc_statements(cert) {
        None => return LintResult::na(),
        Some(Err(e)) => return LintResult::error(format!("QCStatements extension cannot be decoded: {e}")),
        Some(Ok(s)) => s,
    };
    let mut errors = Vec::new();
    for statement in qc::find_statements(&statements, id) {
        check(statement, &mut errors);
    }
    if errors.is_empty() {
        LintResult::pass()
    } else {
        LintResult::error(errors.join("; "))
    }
}

#[cfg(feature = "lints-etsi")]
pub fn has_psd2_statement(cert: &Certificate) -> bool {
    matches!(
        qc_statements(cert),
        Some(Ok(s)) if qc::find_statements(&s, oids::PSD2_STATEMENT).next().is_some()
    )
}

/// `subject:organizationIdentifier` read from the raw subject name.
///
/// `None` when absent. A value that is not a directory string, or a subject that
/// does not decode, is reported as `Some(Err(..))`.
pub fn subject_org_id(cert: &Certificate) -> Option<Result<String, String>> {
    match name::find_attribute(&cert.subject.raw, oids::AT_ORGANIZATION_IDENTIFIER) {
        Ok(None) => None,
        Ok(Some(attr)) => Some(
            attr.text()
                .map(|s| s.text)
                .map_err(|e| format!("subject:organizationIdentifier cannot be decoded: {e}")),
        ),
        Err(e) => Some(Err(format!("subject name cannot be decoded: {e}"))),
    }
}
