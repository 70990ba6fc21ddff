//! Use case orchestration for certguard.
//!
//! This crate provides the application layer: use cases that coordinate settings, the
//! certificate adapter and the domain engine. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod lint;
mod list;
mod report;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use lint::{InputFile, LintInput, LintOutput, run_lint, verdict_exit_code};
pub use list::{ListEntry, format_list, run_list};
pub use report::{parse_report_json, serialize_report, write_report};
