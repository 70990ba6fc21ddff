//! Developer tasks (schema generation, lint catalog, sample reports).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use certguard_app::{InputFile, LintInput, ListEntry, run_lint, run_list};
use certguard_settings::Overrides;
use certguard_test_util::{CertificateBuilder, normalize_nondeterministic};
use certguard_types::Source;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn catalog_path() -> PathBuf {
    project_root().join("docs").join("lints.md")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(certguard_types::LintReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(certguard_settings::CertguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "certguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "certguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            _ => stale.push(spec.filename),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    eprintln!("Schemas missing or out of date:");
    for name in &stale {
        eprintln!("  - {}", name);
    }
    eprintln!("\nRun `cargo run -p xtask -- emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Markdown catalog grouped by source family, lints name-ordered within each group.
fn render_catalog(entries: &[ListEntry]) -> String {
    let mut out = String::from("# certguard lint catalog\n\n");
    out.push_str("Generated by `cargo run -p xtask -- emit-catalog`. Do not edit.\n");

    for source in Source::ALL {
        let rows: Vec<_> = entries.iter().filter(|e| e.meta.source == source).collect();
        if rows.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## {} (`{}`)\n\n", source.title(), source.as_str()));
        out.push_str("| Lint | Effective | Description | Citation |\n");
        out.push_str("|---|---|---|---|\n");
        for e in rows {
            let m = &e.meta;
            let window = match m.ineffective_date {
                Some(end) => format!("{} to {}", m.effective_date, end),
                None => m.effective_date.to_string(),
            };
            out.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                m.name,
                window,
                m.description.replace('|', "\\|"),
                m.citation.replace('|', "\\|"),
            ));
        }
    }
    out
}

fn emit_catalog() -> anyhow::Result<()> {
    let path = catalog_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create docs directory")?;
    }
    fs::write(&path, render_catalog(&run_list(None)?))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn validate_catalog() -> anyhow::Result<()> {
    let expected = render_catalog(&run_list(None)?);
    match fs::read_to_string(catalog_path()) {
        Ok(actual) if actual == expected => {
            println!("Lint catalog is up to date.");
            Ok(())
        }
        _ => bail!("docs/lints.md is missing or stale; run `cargo run -p xtask -- emit-catalog`"),
    }
}

/// Lint a synthetic subscriber certificate and print the normalized report.
fn sample_report() -> anyhow::Result<()> {
    let inputs = [InputFile {
        label: "sample.pem".to_string(),
        bytes: CertificateBuilder::subscriber().build_pem().into_bytes(),
    }];
    let output = run_lint(LintInput {
        inputs: &inputs,
        config_text: "",
        overrides: Overrides::default(),
        deadline: None,
        cancel: None,
    })?;
    let value = serde_json::to_value(&output.report).context("serialize report")?;
    let json = serde_json::to_string_pretty(&normalize_nondeterministic(value))
        .context("format report")?;
    println!("{json}");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  emit-catalog      Write the lint catalog to docs/lints.md");
    eprintln!("  validate-catalog  Check docs/lints.md against the registry (for CI)");
    eprintln!("  sample-report     Print a normalized report for a synthetic certificate");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "emit-catalog" => emit_catalog(),
        "validate-catalog" => validate_catalog(),
        "sample-report" => sample_report(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo run -p xtask -- help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_lint_once() {
        let entries = run_list(None).expect("list");
        let md = render_catalog(&entries);
        for e in &entries {
            assert_eq!(md.matches(&format!("`{}`", e.meta.name)).count(), 1, "{}", e.meta.name);
        }
        assert!(md.contains("## ETSI Electronic Signatures and Infrastructures (`ETSI_ESI`)"));
        assert!(!md.contains("(`Apple`)"));
    }

    #[test]
    fn schemas_serialize() {
        for spec in schema_specs() {
            let json = serialize_schema(&(spec.generate)()).expect("serialize");
            assert!(json.ends_with('\n'));
        }
    }
}
