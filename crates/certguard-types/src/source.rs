use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy family a lint is authored against.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Source {
    #[serde(rename = "CABF_BR")]
    CabfBaselineRequirements,
    #[serde(rename = "CABF_EV")]
    CabfEvGuidelines,
    #[serde(rename = "ETSI_ESI")]
    EtsiEsi,
    #[serde(rename = "Mozilla")]
    MozillaRootStorePolicy,
    #[serde(rename = "Apple")]
    AppleRootStorePolicy,
    #[serde(rename = "RFC5280")]
    Rfc5280,
    #[serde(rename = "RFC5480")]
    Rfc5480,
    Community,
}

impl Source {
    pub const ALL: [Source; 8] = [
        Source::CabfBaselineRequirements,
        Source::CabfEvGuidelines,
        Source::EtsiEsi,
        Source::MozillaRootStorePolicy,
        Source::AppleRootStorePolicy,
        Source::Rfc5280,
        Source::Rfc5480,
        Source::Community,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Source::CabfBaselineRequirements => "CABF_BR",
            Source::CabfEvGuidelines => "CABF_EV",
            Source::EtsiEsi => "ETSI_ESI",
            Source::MozillaRootStorePolicy => "Mozilla",
            Source::AppleRootStorePolicy => "Apple",
            Source::Rfc5280 => "RFC5280",
            Source::Rfc5480 => "RFC5480",
            Source::Community => "Community",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Source::CabfBaselineRequirements => "CA/Browser Forum Baseline Requirements",
            Source::CabfEvGuidelines => "CA/Browser Forum EV Guidelines",
            Source::EtsiEsi => "ETSI Electronic Signatures and Infrastructures",
            Source::MozillaRootStorePolicy => "Mozilla Root Store Policy",
            Source::AppleRootStorePolicy => "Apple Root Store Policy",
            Source::Rfc5280 => "RFC 5280",
            Source::Rfc5480 => "RFC 5480",
            Source::Community => "Community",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lint source: {0} (expected one of CABF_BR, CABF_EV, ETSI_ESI, Mozilla, Apple, RFC5280, RFC5480, Community)")]
pub struct ParseSourceError(pub String);

impl FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|src| src.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSourceError(s.to_string()))
    }
}
