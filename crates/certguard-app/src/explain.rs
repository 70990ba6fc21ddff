//! The `explain` use case: look up one lint's documentation.

use anyhow::Context;
use certguard_domain::{LintMeta, builtin_registry};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(LintMeta),
    /// Unknown name; includes every registered name.
    NotFound {
        identifier: String,
        available: Vec<&'static str>,
    },
}

pub fn run_explain(identifier: &str) -> anyhow::Result<ExplainOutput> {
    let registry = builtin_registry().context("build lint registry")?;
    Ok(match registry.lookup(identifier) {
        Some(d) => ExplainOutput::Found(*d.meta()),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: registry.names().collect(),
        },
    })
}

/// Format a lint's metadata for terminal display.
pub fn format_explanation(meta: &LintMeta) -> String {
    let mut out = String::new();
    out.push_str(meta.name);
    out.push('\n');
    out.push_str(&"=".repeat(meta.name.len()));
    out.push_str("\n\n");
    out.push_str(meta.description);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Source:    {} ({})\n",
        meta.source.as_str(),
        meta.source.title()
    ));
    out.push_str(&format!("Citation:  {}\n", meta.citation));
    out.push_str(&format!("Effective: {}", meta.effective_date));
    if let Some(end) = meta.ineffective_date {
        out.push_str(&format!(" until {end}"));
    }
    out.push('\n');
    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, available: &[&'static str]) -> String {
    let mut out = format!("Unknown lint: {identifier}\n\nAvailable lints:\n");
    for name in available {
        out.push_str(&format!("  - {name}\n"));
    }
    out
}
