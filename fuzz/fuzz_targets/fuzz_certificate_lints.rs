//! Fuzz target for the full lint pipeline.
//!
//! Goal: any certificate the adapter accepts is evaluated by every built-in lint without
//! a single `Fatal` result. `Fatal` means a lint body panicked.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_certificate_lints
//! ```

#![no_main]

use certguard_domain::{builtin_registry, run_lint};
use certguard_types::Status;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static REGISTRY: OnceLock<certguard_domain::Registry> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(cert) = certguard_x509::parse_der(data) else {
        return;
    };
    let registry = REGISTRY.get_or_init(|| builtin_registry().expect("built-in registry"));
    for descriptor in registry.iter() {
        let result = run_lint(descriptor, &cert);
        assert_ne!(
            result.status,
            Status::Fatal,
            "{} faulted: {:?}",
            descriptor.name(),
            result.details
        );
    }
});
