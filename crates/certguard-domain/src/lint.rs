use crate::model::Certificate;
use certguard_types::{LintResult, Source};
use std::fmt;
use time::Date;

/// One compliance rule.
///
/// `check_applies` is always consulted first; `execute` only runs when it returned
/// `true` and the certificate falls inside the lint's effective-date window. Both must
/// be pure. A rule that finds nothing wrong returns `Pass`, never an empty result.
pub trait Lint: Send + Sync {
    fn check_applies(&self, cert: &Certificate) -> bool;

    fn execute(&self, cert: &Certificate) -> LintResult;
}

/// Static metadata for a lint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LintMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub source: Source,
    /// First day the rule is authoritative (inclusive).
    pub effective_date: Date,
    /// First day the rule no longer applies (exclusive).
    pub ineffective_date: Option<Date>,
}

impl LintMeta {
    /// `[effective_date, ineffective_date)` contains `date`.
    pub fn is_effective_on(&self, date: Date) -> bool {
        date >= self.effective_date && self.ineffective_date.is_none_or(|end| date < end)
    }
}

/// A lint's metadata bound to its implementation.
pub struct LintDescriptor {
    meta: LintMeta,
    lint: Box<dyn Lint>,
}

impl LintDescriptor {
    pub fn new(meta: LintMeta, lint: impl Lint + 'static) -> Self {
        Self {
            meta,
            lint: Box::new(lint),
        }
    }

    pub fn meta(&self) -> &LintMeta {
        &self.meta
    }

    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    pub fn source(&self) -> Source {
        self.meta.source
    }

    pub fn lint(&self) -> &dyn Lint {
        self.lint.as_ref()
    }
}

impl fmt::Debug for LintDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LintDescriptor")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn meta(ineffective: Option<Date>) -> LintMeta {
        LintMeta {
            name: "e_window",
            description: "",
            citation: "",
            source: Source::Community,
            effective_date: date!(2020 - 01 - 01),
            ineffective_date: ineffective,
        }
    }

    #[test]
    fn window_is_half_open() {
        let open = meta(None);
        assert!(!open.is_effective_on(date!(2019 - 12 - 31)));
        assert!(open.is_effective_on(date!(2020 - 01 - 01)));
        assert!(open.is_effective_on(date!(2099 - 01 - 01)));

        let closed = meta(Some(date!(2021 - 01 - 01)));
        assert!(closed.is_effective_on(date!(2020 - 12 - 31)));
        assert!(!closed.is_effective_on(date!(2021 - 01 - 01)));
    }
}
