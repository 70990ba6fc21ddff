use crate::result_set::ResultSet;
use crate::source::Source;
use crate::status::{Status, StatusCounts};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for certguard reports.
pub const SCHEMA_REPORT_V1: &str = "certguard.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// One row of a result set as consumed by reporting: `{name, status, details?}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultEntry {
    pub name: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ResultEntry {
    /// Flatten a result set into name-ordered entries.
    pub fn collect(results: &ResultSet) -> Vec<ResultEntry> {
        results
            .iter()
            .map(|(name, r)| ResultEntry {
                name: name.to_string(),
                status: r.status,
                details: r.details.clone(),
            })
            .collect()
    }
}

/// Identity of the evaluated certificate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CertificateMeta {
    /// Where the certificate came from (file path or caller-supplied label).
    pub input: String,
    /// Lowercase hex SHA-256 over the certificate DER.
    pub fingerprint_sha256: String,
    pub subject: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub not_before: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CertificateReport {
    pub certificate: CertificateMeta,
    pub verdict: Verdict,
    pub counts: StatusCounts,
    pub results: Vec<ResultEntry>,
}

/// A certificate that was never evaluated (deadline or cancellation).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkippedCertificate {
    pub input: String,
    pub reason: String,
}

/// Certguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct CertguardData {
    pub profile: String,
    pub lints_selected: u32,
    /// Policy families that had at least one selected lint.
    pub sources: Vec<Source>,
    pub certificates_total: u32,
    pub certificates_evaluated: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedCertificate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LintReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Worst verdict across all evaluated certificates.
    pub verdict: Verdict,
    pub certificates: Vec<CertificateReport>,
    pub data: CertguardData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::LintResult;

    #[test]
    fn entries_follow_result_set_order() {
        let set: ResultSet = [
            ("w_z".to_string(), LintResult::warn("late")),
            ("e_a".to_string(), LintResult::pass()),
        ]
        .into_iter()
        .collect();

        let entries = ResultEntry::collect(&set);
        assert_eq!(entries[0].name, "e_a");
        assert_eq!(entries[1].details.as_deref(), Some("late"));

        let json = serde_json::to_value(&entries[0]).expect("serialize");
        assert_eq!(json, serde_json::json!({ "name": "e_a", "status": "Pass" }));
    }
}
