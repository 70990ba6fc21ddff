//! CLI entry point for certguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and
//! exit codes. All business logic lives in the `certguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use certguard_app::{
    ExplainOutput, InputFile, LintInput, format_explanation, format_list, format_not_found,
    run_explain, run_lint, run_list, serialize_report, verdict_exit_code, write_report,
};
use certguard_settings::Overrides;
use certguard_types::{LintReport, Source};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_CONFIG: &str = "certguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "certguard",
    version,
    about = "Certificate policy linter for X.509 certificates"
)]
struct Cli {
    /// Log filter (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate certificates (PEM bundles or DER files) and emit a JSON report.
    Lint {
        #[arg(required = true)]
        files: Vec<Utf8PathBuf>,

        /// Path to the config TOML (default: ./certguard.toml if present).
        #[arg(long)]
        config: Option<Utf8PathBuf>,

        /// Override profile (strict|warn|webpki|etsi).
        #[arg(long)]
        profile: Option<String>,

        /// Only run lints matching this name or glob (repeatable).
        #[arg(long)]
        include: Vec<String>,

        /// Skip lints matching this name or glob (repeatable).
        #[arg(long)]
        exclude: Vec<String>,

        /// Only run lints from this source family, e.g. ETSI_ESI (repeatable).
        #[arg(long = "source")]
        sources: Vec<String>,

        /// Lowest status that fails a certificate (notice|warn|error).
        #[arg(long)]
        fail_on: Option<String>,

        /// Evaluate lints one at a time instead of on the thread pool.
        #[arg(long)]
        sequential: bool,

        /// Stop starting new certificates after this many milliseconds.
        #[arg(long)]
        deadline_ms: Option<u64>,

        /// Write the JSON report here instead of stdout.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// List the compiled-in lints.
    List {
        /// Only lints from this source family.
        #[arg(long)]
        source: Option<String>,
    },

    /// Show a lint's description, citation and effective dates.
    Explain {
        /// Lint name, e.g. e_qcstatem_qctype_valid.
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.cmd {
        Commands::Lint {
            files,
            config,
            profile,
            include,
            exclude,
            sources,
            fail_on,
            sequential,
            deadline_ms,
            report_out,
        } => {
            let overrides = Overrides {
                profile,
                fail_on,
                dispatch: sequential.then(|| "sequential".to_string()),
                include,
                exclude,
                sources,
            };
            let result = cmd_lint(
                &files,
                config.as_deref(),
                overrides,
                deadline_ms.map(Duration::from_millis),
                report_out.as_deref(),
            );
            match result {
                Ok(0) => Ok(()),
                Ok(code) => std::process::exit(code),
                Err(err) => {
                    eprintln!("certguard error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        Commands::List { source } => cmd_list(source.as_deref()),
        Commands::Explain { name } => cmd_explain(&name),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn cmd_lint(
    files: &[Utf8PathBuf],
    config: Option<&Utf8Path>,
    overrides: Overrides,
    deadline: Option<Duration>,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let config_text = read_config(config)?;
    tracing::debug!(files = files.len(), config = ?config, "starting lint");

    let inputs = files
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
            Ok(InputFile {
                label: path.to_string(),
                bytes,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let output = run_lint(LintInput {
        inputs: &inputs,
        config_text: &config_text,
        overrides,
        deadline,
        cancel: None,
    })?;

    match report_out {
        Some(path) => {
            write_report(path, &output.report).context("write report json")?;
            print!("{}", summary(&output.report));
        }
        None => {
            let json = serialize_report(&output.report)?;
            println!("{}", String::from_utf8_lossy(&json));
        }
    }

    Ok(verdict_exit_code(output.report.verdict))
}

/// An explicit `--config` must exist; the default file is optional.
fn read_config(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read config {p}")),
        None => Ok(std::fs::read_to_string(DEFAULT_CONFIG).unwrap_or_default()),
    }
}

/// Human-readable result listing: findings only, one block per certificate.
fn summary(report: &LintReport) -> String {
    let mut out = String::new();
    for cert in &report.certificates {
        out.push_str(&format!(
            "{} [{}]: {:?}\n",
            cert.certificate.input, cert.certificate.subject, cert.verdict
        ));
        for r in cert.results.iter().filter(|r| r.status.is_finding()) {
            out.push_str(&format!("  {:<6} {}", r.status.as_str(), r.name));
            if let Some(d) = &r.details {
                out.push_str(&format!(": {d}"));
            }
            out.push('\n');
        }
    }
    for skipped in &report.data.skipped {
        out.push_str(&format!("{}: skipped ({})\n", skipped.input, skipped.reason));
    }
    out.push_str(&format!(
        "verdict: {:?} ({} of {} certificates evaluated, {} lints)\n",
        report.verdict,
        report.data.certificates_evaluated,
        report.data.certificates_total,
        report.data.lints_selected
    ));
    out
}

fn cmd_list(source: Option<&str>) -> anyhow::Result<()> {
    let source = source
        .map(|s| s.parse::<Source>().context("invalid --source"))
        .transpose()?;
    print!("{}", format_list(&run_list(source)?));
    Ok(())
}

fn cmd_explain(name: &str) -> anyhow::Result<()> {
    match run_explain(name)? {
        ExplainOutput::Found(meta) => {
            print!("{}", format_explanation(&meta));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", format_not_found(&identifier, &available));
            std::process::exit(1);
        }
    }
}
