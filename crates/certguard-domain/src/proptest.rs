//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - dispatch determinism (sequential and parallel produce the same result set)
//! - effective-date gating
//! - non-applicable lints never reaching `execute`

use crate::engine::{Engine, run_lint};
use crate::filter::LintSelection;
use crate::lint::{LintDescriptor, LintMeta};
use crate::lints::builtin_registry;
use crate::policy::Dispatch;
use crate::registry::RegistryBuilder;
use crate::test_support::{CertBuilder, CountingLint, FixedLint, meta, qc_statement};
use certguard_der::{encode, oids};
use certguard_types::{LintResult, Source, Status};
use proptest::prelude::*;
use std::sync::atomic::Ordering;
use time::{Date, Duration};

// ============================================================================
// Strategies
// ============================================================================

fn arb_date() -> impl Strategy<Value = Date> {
    // 1995-01-01 .. roughly 2040
    (0i64..16_500).prop_map(|days| {
        time::macros::date!(1995 - 01 - 01) + Duration::days(days)
    })
}

fn arb_subject_attr() -> impl Strategy<Value = (&'static str, String)> {
    (
        prop_oneof![
            Just(oids::AT_ORGANIZATION),
            Just(oids::AT_ORGANIZATIONAL_UNIT),
            Just(oids::AT_LOCALITY),
            Just(oids::AT_STATE_OR_PROVINCE),
            Just(oids::AT_GIVEN_NAME),
            Just(oids::AT_SURNAME),
            Just(oids::AT_ORGANIZATION_IDENTIFIER),
        ],
        prop::string::string_regex("[A-Z]{3}[A-Z]{2}-[0-9A-Z]{0,8}").unwrap(),
    )
}

fn arb_certificate() -> impl Strategy<Value = crate::model::Certificate> {
    (
        0u8..3,
        prop::collection::vec(arb_subject_attr(), 0..4),
        arb_date(),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(any::<u8>(), 0..12),
    )
        .prop_map(|(kind, attrs, not_before, ev, critical_ku, noise)| {
            let mut b = match kind {
                0 => CertBuilder::subscriber(),
                1 => CertBuilder::sub_ca(),
                _ => CertBuilder::root_ca(),
            };
            for (oid, value) in &attrs {
                b = b.subject_attr(oid, value);
            }
            if ev {
                b = b.ev();
            }
            b = b.key_usage(critical_ku).not_before(not_before);
            if !noise.is_empty() {
                // Arbitrary bytes where a QC statement payload is expected.
                b = b.qc_statements(&[qc_statement(
                    oids::QCS_QC_TYPE,
                    Some(encode::sequence(&[noise])),
                )]);
            }
            b.build()
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn dispatch_mode_does_not_change_results(cert in arb_certificate()) {
        let registry = builtin_registry().expect("registry");
        let seq = Engine::new(&registry, &LintSelection::All, Dispatch::Sequential).expect("seq");
        let par = Engine::new(&registry, &LintSelection::All, Dispatch::Parallel).expect("par");

        let a = seq.evaluate(&cert);
        let b = par.evaluate(&cert);
        let c = par.evaluate(&cert);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &c);
        prop_assert_eq!(a.len(), registry.len());
    }

    #[test]
    fn builtin_lints_never_fault(cert in arb_certificate()) {
        let registry = builtin_registry().expect("registry");
        for d in registry.iter() {
            let result = run_lint(d, &cert);
            prop_assert_ne!(result.status, Status::Fatal, "{} faulted: {:?}", d.name(), result.details);
            prop_assert_ne!(result.status, Status::Reserved);
        }
    }

    #[test]
    fn window_outside_means_na(
        effective in arb_date(),
        span in 1i64..4000,
        not_before in arb_date(),
    ) {
        let m = LintMeta {
            effective_date: effective,
            ineffective_date: Some(effective + Duration::days(span)),
            ..meta("e_windowed", Source::Community)
        };
        let d = LintDescriptor::new(m, FixedLint::always(LintResult::error("always")));
        let cert = CertBuilder::subscriber().not_before(not_before).build();
        let result = run_lint(&d, &cert);
        if m.is_effective_on(not_before) {
            prop_assert_eq!(result.status, Status::Error);
        } else {
            prop_assert_eq!(result.status, Status::NotApplicable);
            prop_assert!(result.details.is_none());
        }
    }

    #[test]
    fn non_applicable_lints_are_na_and_never_execute(cert in arb_certificate()) {
        let (lint, calls) = CountingLint::new(false);
        let mut b = RegistryBuilder::new();
        b.register(LintDescriptor::new(meta("e_counting", Source::Community), lint)).expect("register");
        b.register(LintDescriptor::new(meta("e_never", Source::Community), FixedLint::never())).expect("register");
        let registry = b.build();
        let engine = Engine::new(&registry, &LintSelection::All, Dispatch::Parallel).expect("engine");

        let results = engine.evaluate(&cert);
        prop_assert!(results.iter().all(|(_, r)| r.status == Status::NotApplicable));
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
