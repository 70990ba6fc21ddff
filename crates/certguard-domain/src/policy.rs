use crate::filter::LintSelection;
use std::fmt;

/// Lowest status that turns a certificate's verdict into `fail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FailOn {
    Notice,
    Warn,
    #[default]
    Error,
}

impl FailOn {
    pub fn as_str(self) -> &'static str {
        match self {
            FailOn::Notice => "notice",
            FailOn::Warn => "warn",
            FailOn::Error => "error",
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How candidate lints for one certificate are scheduled. Results are identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dispatch {
    #[default]
    Parallel,
    Sequential,
}

impl Dispatch {
    pub fn as_str(self) -> &'static str {
        match self {
            Dispatch::Parallel => "parallel",
            Dispatch::Sequential => "sequential",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub dispatch: Dispatch,
    pub selection: LintSelection,
}
