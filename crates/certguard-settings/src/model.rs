use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_V1: &str = "certguard.config.v1";

/// `certguard.toml` schema v1.
///
/// All keys are optional. At most one of `include`, `exclude` and `sources` may be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CertguardConfigV1 {
    /// Optional schema string for tooling (`certguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default), `warn`, `webpki` or `etsi`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Lowest status that fails a certificate: `notice`, `warn` or `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// `parallel` (default) or `sequential`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<String>,

    /// Only run lints matching these names or glob patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Run every lint except those matching these names or glob patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Only run lints from these source families (`CABF_BR`, `ETSI_ESI`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}
