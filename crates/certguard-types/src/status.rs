use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of one lint against one certificate.
///
/// Variants are declared in ascending precedence, so the derived `Ord` is the
/// roll-up order: `Reserved < NA < Pass < Notice < Warn < Error < Fatal`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub enum Status {
    /// Placeholder that never leaves the engine.
    #[default]
    Reserved,
    /// The lint does not apply, or the certificate predates/postdates the rule.
    #[serde(rename = "NA")]
    NotApplicable,
    Pass,
    Notice,
    Warn,
    Error,
    /// The lint itself failed; assigned by the engine only.
    Fatal,
}

impl Status {
    pub const ALL: [Status; 7] = [
        Status::Reserved,
        Status::NotApplicable,
        Status::Pass,
        Status::Notice,
        Status::Warn,
        Status::Error,
        Status::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Reserved => "Reserved",
            Status::NotApplicable => "NA",
            Status::Pass => "Pass",
            Status::Notice => "Notice",
            Status::Warn => "Warn",
            Status::Error => "Error",
            Status::Fatal => "Fatal",
        }
    }

    /// Keep the higher-precedence of two statuses.
    pub fn merge(self, other: Status) -> Status {
        self.max(other)
    }

    /// `Notice`, `Warn`, `Error` and `Fatal` are findings; everything else is not.
    pub fn is_finding(self) -> bool {
        self >= Status::Notice
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status token: {0} (expected NA|Pass|Notice|Warn|Error|Fatal)")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A status plus optional free-text details, produced per (certificate, lint) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LintResult {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LintResult {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            details: None,
        }
    }

    pub fn with_details(status: Status, details: impl Into<String>) -> Self {
        Self {
            status,
            details: Some(details.into()),
        }
    }

    pub fn na() -> Self {
        Self::new(Status::NotApplicable)
    }

    pub fn pass() -> Self {
        Self::new(Status::Pass)
    }

    pub fn notice(details: impl Into<String>) -> Self {
        Self::with_details(Status::Notice, details)
    }

    pub fn warn(details: impl Into<String>) -> Self {
        Self::with_details(Status::Warn, details)
    }

    pub fn error(details: impl Into<String>) -> Self {
        Self::with_details(Status::Error, details)
    }

    pub fn fatal(details: impl Into<String>) -> Self {
        Self::with_details(Status::Fatal, details)
    }
}

/// Per-status tallies for one result set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub na: u32,
    pub pass: u32,
    pub notice: u32,
    pub warn: u32,
    pub error: u32,
    pub fatal: u32,
}

impl StatusCounts {
    pub fn record(&mut self, status: Status) {
        match status {
            // Never a final result; nothing to count.
            Status::Reserved => {}
            Status::NotApplicable => self.na += 1,
            Status::Pass => self.pass += 1,
            Status::Notice => self.notice += 1,
            Status::Warn => self.warn += 1,
            Status::Error => self.error += 1,
            Status::Fatal => self.fatal += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.na + self.pass + self.notice + self.warn + self.error + self.fatal
    }
}
