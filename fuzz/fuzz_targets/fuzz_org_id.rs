//! Fuzz target for the organizationIdentifier and NCA-ID grammars.
//!
//! Goal: the grammar checks should **never panic**, including on multi-byte UTF-8
//! at any position.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_org_id
//! ```

#![no_main]

use arbitrary::Arbitrary;
use certguard_der::org_id::{OrgIdProfile, parse_org_id};
use certguard_der::qc;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct OrgIdInput {
    value: String,
    etsi: bool,
}

fuzz_target!(|input: OrgIdInput| {
    if input.value.len() > 256 {
        return;
    }
    let profile = if input.etsi {
        OrgIdProfile::Etsi
    } else {
        OrgIdProfile::Cabf
    };
    if let Ok(parsed) = parse_org_id(&input.value, profile) {
        // Accepted values always carry a two-letter country.
        assert_eq!(parsed.country.len(), 2);
    }
    let _ = qc::check_nca_id(&input.value);
});
