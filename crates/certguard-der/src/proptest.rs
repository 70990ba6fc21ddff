//! Property-based tests for the inspector.
//!
//! The inspector runs on attacker-controlled bytes, so the main property is totality:
//! every entry point returns a value or a typed error for every input.

use crate::algorithm::{
    EC_PUBLIC_KEY_ENCODINGS, algorithm_oid, check_algorithm_id_param_null, ec_named_curve,
    match_canonical,
};
use crate::encode;
use crate::oid::Oid;
use crate::oids;
use crate::org_id::{OrgIdProfile, parse_org_id};
use crate::qc::{decode_limit_value, decode_psd2, decode_qc_type, parse_qc_statements};
use crate::reader::DerReader;
use crate::{cert, name, policies};
use proptest::prelude::*;

/// Mostly-valid DER with random corruption, which reaches deeper than uniform noise.
fn arb_mutated_der() -> impl Strategy<Value = Vec<u8>> {
    let seeds = vec![
        hex::decode("300d06092a864886f70d0101010500").unwrap(),
        hex::decode("301306072a8648ce3d020106082a8648ce3d030107").unwrap(),
        encode::sequence(&[encode::sequence(&[
            encode::oid(oids::PSD2_STATEMENT).unwrap(),
            encode::sequence(&[
                encode::sequence(&[encode::sequence(&[
                    encode::oid(oids::PSD2_ROLE_PI).unwrap(),
                    encode::utf8_string("PSP_PI"),
                ])]),
                encode::utf8_string("Authority"),
                encode::utf8_string("BE-NBB"),
            ]),
        ])]),
    ];
    (
        prop::sample::select(seeds),
        prop::collection::vec((any::<prop::sample::Index>(), any::<u8>()), 0..4),
    )
        .prop_map(|(mut bytes, edits)| {
            for (idx, b) in edits {
                let i = idx.index(bytes.len());
                bytes[i] = b;
            }
            bytes
        })
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..64),
        arb_mutated_der(),
    ]
}

proptest! {
    #[test]
    fn reader_never_panics(data in arb_bytes()) {
        let mut r = DerReader::new(&data);
        while let Ok(tlv) = r.read_tlv() {
            let _ = tlv.as_oid();
            let _ = tlv.as_i64();
            let _ = crate::string::decode(&tlv);
        }
    }

    #[test]
    fn structure_decoders_never_panic(data in arb_bytes()) {
        let _ = check_algorithm_id_param_null(&data, oids::RSA_ENCRYPTION);
        let _ = algorithm_oid(&data);
        let _ = ec_named_curve(&data);
        let _ = match_canonical(&data, &EC_PUBLIC_KEY_ENCODINGS);
        let _ = cert::split_certificate(&data);
        let _ = cert::tbs_fields(&data);
        let _ = cert::spki_algorithm(&data);
        let _ = cert::extensions(&data);
        let _ = name::attributes(&data);
        let _ = policies::parse_certificate_policies(&data);
        if let Ok(stmts) = parse_qc_statements(&data) {
            for s in &stmts {
                let _ = decode_qc_type(s);
                let _ = decode_limit_value(s);
                let _ = decode_psd2(s);
            }
        }
    }

    #[test]
    fn oid_content_round_trips(content in prop::collection::vec(any::<u8>(), 1..16)) {
        if let Ok(oid) = Oid::from_der_content(&content) {
            prop_assert_eq!(oid.to_der_content(), content);
        }
    }

    #[test]
    fn null_check_accepts_only_the_exact_encoding(tail in prop::collection::vec(any::<u8>(), 1..8)) {
        let mut data = hex::decode("300d06092a864886f70d0101010500").unwrap();
        data.extend_from_slice(&tail);
        prop_assert!(check_algorithm_id_param_null(&data, oids::RSA_ENCRYPTION).is_err());
    }

    #[test]
    fn org_id_parser_is_total(value in ".{0,24}") {
        let _ = parse_org_id(&value, OrgIdProfile::Cabf);
        let _ = parse_org_id(&value, OrgIdProfile::Etsi);
    }
}
