//! The `list` use case: show the compiled-in lint catalog.

use anyhow::Context;
use certguard_domain::{LintMeta, builtin_registry};
use certguard_types::Source;

/// Catalog row for one registered lint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub meta: LintMeta,
}

/// Every registered lint, name-ordered, optionally limited to one source family.
pub fn run_list(source: Option<Source>) -> anyhow::Result<Vec<ListEntry>> {
    let registry = builtin_registry().context("build lint registry")?;
    Ok(registry
        .iter()
        .filter(|d| source.is_none_or(|s| d.source() == s))
        .map(|d| ListEntry { meta: *d.meta() })
        .collect())
}

/// One line per lint: name, source, effective date, description.
pub fn format_list(entries: &[ListEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.meta.name.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for e in entries {
        out.push_str(&format!(
            "{:<width$}  {:<9}  {}  {}\n",
            e.meta.name,
            e.meta.source.as_str(),
            e.meta.effective_date,
            e.meta.description,
        ));
    }
    out
}
