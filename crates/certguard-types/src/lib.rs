//! Stable DTOs and IDs used across the certguard workspace.
//!
//! This crate is intentionally boring:
//! - the ordered lint status vocabulary and per-lint results
//! - policy source tokens
//! - the per-certificate result set
//! - stable lint names
//! - data types for the emitted report

#![forbid(unsafe_code)]

pub mod ids;
pub mod receipt;
pub mod result_set;
pub mod source;
pub mod status;

pub use receipt::{
    CertificateMeta, CertificateReport, CertguardData, LintReport, ResultEntry, SCHEMA_REPORT_V1,
    SkippedCertificate, ToolMeta, Verdict,
};
pub use result_set::ResultSet;
pub use source::{ParseSourceError, Source};
pub use status::{LintResult, ParseStatusError, Status, StatusCounts};
