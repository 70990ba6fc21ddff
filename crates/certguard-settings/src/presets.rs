use certguard_domain::filter::LintSelection;
use certguard_domain::policy::{Dispatch, EffectiveConfig, FailOn};
use certguard_types::Source;

pub const PROFILES: [&str; 4] = ["strict", "warn", "webpki", "etsi"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into certguard.toml.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "webpki" => webpki_profile(),
        "etsi" => etsi_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        dispatch: Dispatch::Parallel,
        selection: LintSelection::All,
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warn,
        ..strict_profile()
    }
}

fn webpki_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "webpki".to_string(),
        selection: LintSelection::Sources(vec![
            Source::CabfBaselineRequirements,
            Source::CabfEvGuidelines,
            Source::MozillaRootStorePolicy,
            Source::Rfc5280,
        ]),
        ..strict_profile()
    }
}

fn etsi_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "etsi".to_string(),
        selection: LintSelection::Sources(vec![Source::EtsiEsi]),
        ..strict_profile()
    }
}
