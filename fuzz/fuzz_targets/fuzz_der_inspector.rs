//! Fuzz target for the raw-encoding inspector.
//!
//! Goal: every inspector entry point should **never panic** on any byte string.
//! Errors are expected for almost every input; panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_der_inspector
//! ```

#![no_main]

use certguard_der::{DerReader, algorithm, cert, name, oids, policies, qc, string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(parts) = cert::split_certificate(data)
        && let Ok(fields) = cert::tbs_fields(parts.tbs)
    {
        let _ = cert::spki_algorithm(fields.spki);
        let _ = cert::public_key_oid(fields.spki);
        let _ = name::attributes(fields.subject);
        if let Some(exts) = fields.extensions {
            let _ = cert::extensions(exts);
        }
    }

    let _ = algorithm::check_algorithm_id_param_null(data, oids::RSA_ENCRYPTION);
    let _ = algorithm::algorithm_oid(data);
    let _ = algorithm::ec_named_curve(data);
    let _ = algorithm::match_canonical(data, &algorithm::EC_PUBLIC_KEY_ENCODINGS);
    let _ = name::find_attribute(data, oids::AT_ORGANIZATION_IDENTIFIER);

    if let Ok(list) = policies::parse_certificate_policies(data) {
        let _ = policies::explicit_texts(&list);
    }

    if let Ok(statements) = qc::parse_qc_statements(data) {
        for statement in &statements {
            let _ = qc::check_marker(statement, "fuzz");
            let _ = qc::decode_qc_type(statement);
            let _ = qc::decode_limit_value(statement);
            if let Ok(psd2) = qc::decode_psd2(statement) {
                let _ = qc::check_nca_id(&psd2.nca_id);
            }
        }
    }

    let mut reader = DerReader::new(data);
    while let Ok(tlv) = reader.read_tlv() {
        let _ = string::decode(&tlv);
        let _ = tlv.as_oid();
        let _ = tlv.as_i64();
    }
});
