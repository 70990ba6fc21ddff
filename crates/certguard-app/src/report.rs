use anyhow::Context;
use camino::Utf8Path;
use certguard_types::{LintReport, SCHEMA_REPORT_V1};

pub fn serialize_report(report: &LintReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Parse a report written by [`serialize_report`]. Other schemas are rejected.
pub fn parse_report_json(text: &str) -> anyhow::Result<LintReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;
    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?}");
    }
    serde_json::from_value(value).context("parse certguard report")
}

/// Write the pretty-printed report, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &LintReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    let mut bytes = serialize_report(report)?;
    bytes.push(b'\n');
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{InputFile, LintInput, run_lint};
    use certguard_settings::Overrides;
    use certguard_test_util::{CertificateBuilder, normalize_nondeterministic};

    fn sample() -> LintReport {
        let inputs = [InputFile {
            label: "leaf.pem".into(),
            bytes: CertificateBuilder::subscriber().build_pem().into_bytes(),
        }];
        run_lint(LintInput {
            inputs: &inputs,
            config_text: "",
            overrides: Overrides::default(),
            deadline: None,
            cancel: None,
        })
        .expect("lint")
        .report
    }

    #[test]
    fn written_report_reads_back() {
        let report = sample();
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let path = root.join("out/nested/report.json");

        write_report(&path, &report).expect("write");
        let text = std::fs::read_to_string(&path).expect("read");
        let back = parse_report_json(&text).expect("parse");
        assert_eq!(back, report);
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema":"other.v1"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"), "{err}");
    }

    #[test]
    fn normalized_json_is_stable_across_runs() {
        let a = serde_json::to_value(sample()).expect("json");
        let b = serde_json::to_value(sample()).expect("json");
        assert_eq!(normalize_nondeterministic(a), normalize_nondeterministic(b));
    }

    #[test]
    fn report_json_shape() {
        let json = normalize_nondeterministic(serde_json::to_value(sample()).expect("json"));
        assert_eq!(json["schema"], "certguard.report.v1");
        assert_eq!(json["tool"]["version"], "__VERSION__");
        assert_eq!(json["verdict"], "pass");
        let cert = &json["certificates"][0];
        assert_eq!(cert["certificate"]["not_before"], "2024-06-01T00:00:00Z");
        assert_eq!(cert["results"][0]["status"], "NA");
        assert!(json["data"].get("skipped").is_none());
    }
}
