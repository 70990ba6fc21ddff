//! The `lint` use case: evaluate certificates and produce a report.

use anyhow::Context;
use certguard_domain::model::Certificate;
use certguard_domain::report::{DomainReport, worst_verdict};
use certguard_domain::{BatchControl, BatchEntry, Engine, builtin_registry};
use certguard_settings::{Overrides, ResolvedConfig};
use certguard_types::{
    CertguardData, CertificateMeta, CertificateReport, LintReport, ResultEntry,
    SCHEMA_REPORT_V1, SkippedCertificate, ToolMeta, Verdict,
};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};
use time::OffsetDateTime;

/// One input as read by the caller: a label for the report and its bytes.
#[derive(Clone, Debug)]
pub struct InputFile {
    pub label: String,
    pub bytes: Vec<u8>,
}

/// Input for the lint use case.
#[derive(Clone, Debug)]
pub struct LintInput<'a> {
    pub inputs: &'a [InputFile],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
    /// Certificates not started within this budget are reported as skipped.
    pub deadline: Option<Duration>,
    pub cancel: Option<Arc<AtomicBool>>,
}

#[derive(Clone, Debug)]
pub struct LintOutput {
    pub report: LintReport,
    pub resolved_config: ResolvedConfig,
}

/// Resolve config, parse every input, evaluate, and assemble the report.
///
/// Configuration problems and unreadable inputs are errors; nothing is evaluated in
/// that case.
pub fn run_lint(input: LintInput<'_>) -> anyhow::Result<LintOutput> {
    let started_at = OffsetDateTime::now_utc();
    let clock = Instant::now();

    let cfg = if input.config_text.trim().is_empty() {
        certguard_settings::CertguardConfigV1::default()
    } else {
        certguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = certguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = &resolved.effective;

    let registry = builtin_registry().context("build lint registry")?;
    let engine = Engine::new(&registry, &effective.selection, effective.dispatch)
        .context("resolve lint selection")?;

    let mut labels = Vec::new();
    let mut certs: Vec<Certificate> = Vec::new();
    for file in input.inputs {
        let parsed = certguard_x509::parse_certificates(&file.bytes)
            .with_context(|| format!("read certificates from {}", file.label))?;
        let many = parsed.len() > 1;
        for (i, cert) in parsed.into_iter().enumerate() {
            labels.push(if many {
                format!("{}#{}", file.label, i + 1)
            } else {
                file.label.clone()
            });
            certs.push(cert);
        }
    }

    let mut control = BatchControl::default();
    if let Some(budget) = input.deadline {
        control = control.with_deadline(clock + budget);
    }
    if let Some(flag) = &input.cancel {
        control = control.with_cancel(Arc::clone(flag));
    }
    let outcome = engine.evaluate_batch(&certs, &control);

    let mut certificates = Vec::new();
    let mut skipped = Vec::new();
    for ((label, cert), entry) in labels.into_iter().zip(&certs).zip(outcome.entries) {
        match entry {
            BatchEntry::Evaluated(results) => {
                let domain = DomainReport::from_results(results, effective.fail_on);
                certificates.push(CertificateReport {
                    certificate: certificate_meta(label, cert),
                    verdict: domain.verdict,
                    counts: domain.counts,
                    results: ResultEntry::collect(&domain.results),
                });
            }
            BatchEntry::Skipped(reason) => skipped.push(SkippedCertificate {
                input: label,
                reason: reason.to_string(),
            }),
        }
    }

    let verdict = worst_verdict(certificates.iter().map(|c| c.verdict));
    let sources: BTreeSet<_> = engine.lints().iter().map(|d| d.source()).collect();
    let data = CertguardData {
        profile: effective.profile.clone(),
        lints_selected: engine.lints().len() as u32,
        sources: sources.into_iter().collect(),
        certificates_total: certs.len() as u32,
        certificates_evaluated: certificates.len() as u32,
        skipped,
    };

    tracing::info!(
        certificates = data.certificates_total,
        evaluated = data.certificates_evaluated,
        lints = data.lints_selected,
        verdict = ?verdict,
        elapsed_ms = clock.elapsed().as_millis() as u64,
        "lint run finished"
    );

    let report = LintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "certguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        certificates,
        data,
    };

    Ok(LintOutput {
        report,
        resolved_config: resolved,
    })
}

fn certificate_meta(input: String, cert: &Certificate) -> CertificateMeta {
    CertificateMeta {
        input,
        fingerprint_sha256: hex::encode(Sha256::digest(&cert.raw)),
        subject: cert.subject.to_string(),
        not_before: cert.not_before,
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certguard_der::oids;
    use certguard_test_util::CertificateBuilder;
    use certguard_types::{Source, Status, ids};
    use std::sync::atomic::Ordering;

    fn file(label: &str, bytes: Vec<u8>) -> InputFile {
        InputFile {
            label: label.to_string(),
            bytes,
        }
    }

    fn lint(inputs: &[InputFile], config: &str, overrides: Overrides) -> anyhow::Result<LintReport> {
        run_lint(LintInput {
            inputs,
            config_text: config,
            overrides,
            deadline: None,
            cancel: None,
        })
        .map(|o| o.report)
    }

    fn status_of(report: &CertificateReport, name: &str) -> Status {
        report
            .results
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.status)
            .unwrap_or_else(|| panic!("{name} missing"))
    }

    #[test]
    fn clean_subscriber_passes_with_every_lint() {
        let inputs = [file("leaf.der", CertificateBuilder::subscriber().build())];
        let report = lint(&inputs, "", Overrides::default()).expect("lint");

        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.profile, "strict");
        assert_eq!(report.data.lints_selected, 16);
        assert_eq!(report.certificates.len(), 1);

        let cert = &report.certificates[0];
        assert_eq!(cert.certificate.input, "leaf.der");
        assert_eq!(cert.certificate.subject, "CN=example.com");
        assert_eq!(cert.certificate.fingerprint_sha256.len(), 64);
        assert_eq!(cert.results.len(), 16);
        assert!(cert.results.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn findings_drive_the_verdict() {
        let der = CertificateBuilder::subscriber()
            .subject_attr(oids::AT_ORGANIZATIONAL_UNIT, "IT")
            .build();
        let inputs = [file("ou.der", der)];
        let report = lint(&inputs, "", Overrides::default()).expect("lint");
        let cert = &report.certificates[0];
        assert_eq!(
            status_of(cert, ids::LINT_SUBJECT_CONTAINS_ORGANIZATIONAL_UNIT_NAME),
            Status::Error
        );
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(verdict_exit_code(report.verdict), 2);
    }

    #[test]
    fn notice_is_warn_unless_threshold_lowered() {
        let inputs = [file("sub.der", CertificateBuilder::sub_ca().build())];
        let report = lint(&inputs, "", Overrides::default()).expect("lint");
        assert_eq!(
            status_of(&report.certificates[0], ids::LINT_SUB_CA_EKU_MISSING),
            Status::Notice
        );
        assert_eq!(report.verdict, Verdict::Warn);

        let strict = lint(&inputs, "fail_on = \"notice\"", Overrides::default()).expect("lint");
        assert_eq!(strict.verdict, Verdict::Fail);
    }

    #[test]
    fn bundles_are_labelled_per_certificate() {
        let pem = format!(
            "{}{}",
            CertificateBuilder::subscriber().build_pem(),
            CertificateBuilder::root_ca().key_usage(true, 0x06).build_pem()
        );
        let inputs = [file("chain.pem", pem.into_bytes())];
        let report = lint(&inputs, "", Overrides::default()).expect("lint");
        let labels: Vec<_> = report
            .certificates
            .iter()
            .map(|c| c.certificate.input.as_str())
            .collect();
        assert_eq!(labels, ["chain.pem#1", "chain.pem#2"]);
        assert_eq!(report.data.certificates_total, 2);
    }

    #[test]
    fn source_selection_narrows_the_run() {
        let inputs = [file("leaf.der", CertificateBuilder::subscriber().build())];
        let overrides = Overrides {
            sources: vec!["ETSI_ESI".into()],
            ..Overrides::default()
        };
        let report = lint(&inputs, "", overrides).expect("lint");
        assert_eq!(report.data.sources, vec![Source::EtsiEsi]);
        assert_eq!(report.data.lints_selected, 6);
    }

    #[test]
    fn config_errors_stop_before_evaluation() {
        let inputs = [file("leaf.der", CertificateBuilder::subscriber().build())];
        let err = lint(&inputs, "include = [\"e_no_such_lint\"]", Overrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("e_no_such_lint"), "{err:#}");

        let err = lint(&inputs, "profile = [", Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"), "{err:#}");
    }

    #[test]
    fn unreadable_input_names_the_file() {
        let inputs = [file("broken.der", vec![0x30, 0x01])];
        let err = lint(&inputs, "", Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("broken.der"), "{err:#}");
    }

    #[test]
    fn cancelled_batch_reports_skips() {
        let inputs = [
            file("a.der", CertificateBuilder::subscriber().build()),
            file("b.der", CertificateBuilder::subscriber().build()),
        ];
        let cancel = Arc::new(AtomicBool::new(false));
        cancel.store(true, Ordering::SeqCst);
        let report = run_lint(LintInput {
            inputs: &inputs,
            config_text: "",
            overrides: Overrides::default(),
            deadline: None,
            cancel: Some(cancel),
        })
        .expect("lint")
        .report;

        assert!(report.certificates.is_empty());
        assert_eq!(report.data.skipped.len(), 2);
        assert_eq!(report.data.skipped[0].input, "a.der");
        assert_eq!(report.data.certificates_evaluated, 0);
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
