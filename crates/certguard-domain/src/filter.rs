use crate::lint::LintDescriptor;
use crate::registry::Registry;
use certguard_types::Source;
use globset::{Glob, GlobMatcher};

/// Which registered lints a run evaluates. Exactly one mode is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LintSelection {
    #[default]
    All,
    /// Only lints matching one of these names or glob patterns.
    Include(Vec<String>),
    /// Every lint except those matching one of these names or glob patterns.
    Exclude(Vec<String>),
    /// Only lints authored against one of these policy families.
    Sources(Vec<Source>),
}

impl LintSelection {
    pub fn mode(&self) -> &'static str {
        match self {
            LintSelection::All => "all",
            LintSelection::Include(_) => "include",
            LintSelection::Exclude(_) => "exclude",
            LintSelection::Sources(_) => "sources",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown lint name: {0}")]
    UnknownLint(String),

    #[error("lint pattern {pattern:?} is not a valid glob: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("no registered lint belongs to source {0}")]
    EmptySource(Source),
}

enum Pattern {
    Exact(String),
    Glob(GlobMatcher),
}

impl Pattern {
    fn parse(raw: &str) -> Result<Pattern, FilterError> {
        if !raw.contains(['*', '?', '[', '{']) {
            return Ok(Pattern::Exact(raw.to_string()));
        }
        let glob = Glob::new(raw).map_err(|e| FilterError::InvalidPattern {
            pattern: raw.to_string(),
            message: e.kind().to_string(),
        })?;
        Ok(Pattern::Glob(glob.compile_matcher()))
    }

    fn is_match(&self, name: &str) -> bool {
        match self {
            Pattern::Exact(exact) => exact == name,
            Pattern::Glob(m) => m.is_match(name),
        }
    }
}

/// Validate every pattern against the registry: each must parse and match at least one lint.
fn compile(registry: &Registry, raw: &[String]) -> Result<Vec<Pattern>, FilterError> {
    raw.iter()
        .map(|p| {
            let pattern = Pattern::parse(p)?;
            if registry.names().any(|n| pattern.is_match(n)) {
                Ok(pattern)
            } else {
                Err(FilterError::UnknownLint(p.clone()))
            }
        })
        .collect()
}

/// Candidate lints for a run, in name order.
pub fn resolve<'r>(
    registry: &'r Registry,
    selection: &LintSelection,
) -> Result<Vec<&'r LintDescriptor>, FilterError> {
    let selected = match selection {
        LintSelection::All => registry.iter().collect(),
        LintSelection::Include(raw) => {
            let patterns = compile(registry, raw)?;
            registry
                .iter()
                .filter(|d| patterns.iter().any(|p| p.is_match(d.name())))
                .collect()
        }
        LintSelection::Exclude(raw) => {
            let patterns = compile(registry, raw)?;
            registry
                .iter()
                .filter(|d| !patterns.iter().any(|p| p.is_match(d.name())))
                .collect()
        }
        LintSelection::Sources(sources) => {
            if let Some(missing) = sources
                .iter()
                .find(|s| registry.by_source(**s).next().is_none())
            {
                return Err(FilterError::EmptySource(*missing));
            }
            registry
                .iter()
                .filter(|d| sources.contains(&d.source()))
                .collect()
        }
    };
    Ok(selected)
}
