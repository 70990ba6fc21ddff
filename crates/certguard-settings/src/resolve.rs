use crate::{model::CertguardConfigV1, presets};
use anyhow::Context;
use certguard_domain::filter::LintSelection;
use certguard_domain::policy::{Dispatch, EffectiveConfig, FailOn};
use certguard_types::Source;
use globset::Glob;

/// Values from the command line. They win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
    pub dispatch: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub sources: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: CertguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    if let Some(dispatch_s) = overrides.dispatch.as_deref().or(cfg.dispatch.as_deref()) {
        effective.dispatch = parse_dispatch(dispatch_s)?;
    }

    // A selection set at a higher layer replaces the lower layer's mode entirely.
    let from_file = selection(
        "certguard.toml",
        cfg.include.unwrap_or_default(),
        cfg.exclude.unwrap_or_default(),
        cfg.sources.unwrap_or_default(),
    )?;
    if let Some(sel) = from_file {
        effective.selection = sel;
    }
    let from_cli = selection(
        "command line",
        overrides.include,
        overrides.exclude,
        overrides.sources,
    )?;
    if let Some(sel) = from_cli {
        effective.selection = sel;
    }

    Ok(ResolvedConfig { effective })
}

fn selection(
    layer: &str,
    include: Vec<String>,
    exclude: Vec<String>,
    sources: Vec<String>,
) -> anyhow::Result<Option<LintSelection>> {
    let set = [!include.is_empty(), !exclude.is_empty(), !sources.is_empty()]
        .iter()
        .filter(|b| **b)
        .count();
    if set > 1 {
        anyhow::bail!(
            "{layer}: include, exclude and sources are mutually exclusive; set at most one"
        );
    }

    if !include.is_empty() {
        validate_patterns("include", &include)?;
        return Ok(Some(LintSelection::Include(include)));
    }
    if !exclude.is_empty() {
        validate_patterns("exclude", &exclude)?;
        return Ok(Some(LintSelection::Exclude(exclude)));
    }
    if !sources.is_empty() {
        let parsed = sources
            .iter()
            .map(|s| {
                s.parse::<Source>()
                    .with_context(|| format!("{layer}: invalid sources entry"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        return Ok(Some(LintSelection::Sources(parsed)));
    }
    Ok(None)
}

fn validate_patterns(key: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid {key} glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warn),
        "notice" => Ok(FailOn::Notice),
        other => anyhow::bail!("unknown fail_on: {other} (expected notice|warn|error)"),
    }
}

fn parse_dispatch(v: &str) -> anyhow::Result<Dispatch> {
    match v {
        "parallel" => Ok(Dispatch::Parallel),
        "sequential" => Ok(Dispatch::Sequential),
        other => anyhow::bail!("unknown dispatch: {other} (expected parallel|sequential)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    fn resolve(toml: &str, overrides: Overrides) -> anyhow::Result<EffectiveConfig> {
        let cfg = parse_config_toml(toml)?;
        Ok(resolve_config(cfg, overrides)?.effective)
    }

    #[test]
    fn empty_config_is_strict() {
        let eff = resolve("", Overrides::default()).expect("resolve");
        assert_eq!(eff.profile, "strict");
        assert_eq!(eff.fail_on, FailOn::Error);
        assert_eq!(eff.dispatch, Dispatch::Parallel);
        assert_eq!(eff.selection, LintSelection::All);
    }

    #[test]
    fn presets_pick_sources() {
        let eff = resolve("profile = \"etsi\"", Overrides::default()).expect("resolve");
        assert_eq!(eff.selection, LintSelection::Sources(vec![Source::EtsiEsi]));

        let eff = resolve("profile = \"warn\"", Overrides::default()).expect("resolve");
        assert_eq!(eff.fail_on, FailOn::Warn);

        let eff = resolve("profile = \"nonsense\"", Overrides::default()).expect("resolve");
        assert_eq!(eff.profile, "strict");
    }

    #[test]
    fn file_values_apply_over_preset() {
        let toml = r#"
            profile = "webpki"
            fail_on = "notice"
            dispatch = "sequential"
            exclude = ["n_*"]
        "#;
        let eff = resolve(toml, Overrides::default()).expect("resolve");
        assert_eq!(eff.profile, "webpki");
        assert_eq!(eff.fail_on, FailOn::Notice);
        assert_eq!(eff.dispatch, Dispatch::Sequential);
        assert_eq!(eff.selection, LintSelection::Exclude(vec!["n_*".into()]));
    }

    #[test]
    fn command_line_wins() {
        let toml = "exclude = [\"n_*\"]\nfail_on = \"warn\"";
        let overrides = Overrides {
            include: vec!["e_qcstatem_*".into()],
            fail_on: Some("error".into()),
            ..Overrides::default()
        };
        let eff = resolve(toml, overrides).expect("resolve");
        assert_eq!(eff.fail_on, FailOn::Error);
        assert_eq!(
            eff.selection,
            LintSelection::Include(vec!["e_qcstatem_*".into()])
        );
    }

    #[test]
    fn conflicting_modes_are_rejected() {
        let err = resolve(
            "include = [\"e_a\"]\nexclude = [\"e_b\"]",
            Overrides::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"), "{err}");

        let overrides = Overrides {
            include: vec!["e_a".into()],
            sources: vec!["ETSI_ESI".into()],
            ..Overrides::default()
        };
        assert!(resolve("", overrides).is_err());
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert!(resolve("fail_on = \"fatal\"", Overrides::default()).is_err());
        assert!(resolve("dispatch = \"threads\"", Overrides::default()).is_err());
        assert!(resolve("sources = [\"NIST\"]", Overrides::default()).is_err());
        assert!(resolve("include = [\"e_[\"]", Overrides::default()).is_err());
    }

    #[test]
    fn source_tokens_parse() {
        let eff = resolve("sources = [\"CABF_BR\", \"Mozilla\"]", Overrides::default())
            .expect("resolve");
        assert_eq!(
            eff.selection,
            LintSelection::Sources(vec![
                Source::CabfBaselineRequirements,
                Source::MozillaRootStorePolicy
            ])
        );
    }
}
