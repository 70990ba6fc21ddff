//! `AlgorithmIdentifier` inspection.
//!
//! ```text
//! AlgorithmIdentifier ::= SEQUENCE {
//!     algorithm   OBJECT IDENTIFIER,
//!     parameters  ANY DEFINED BY algorithm OPTIONAL }
//! ```

use crate::error::DerError;
use crate::oid::Oid;
use crate::oids;
use crate::reader::{DerReader, Tag};

/// Why an `AlgorithmIdentifier` is not the exact `{ oid, NULL }` encoding.
///
/// Every variant renders a distinct message so callers can tell them apart in
/// lint details.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmIdError {
    #[error("error reading algorithm")]
    ReadAlgorithm(#[source] DerError),

    #[error("error reading algorithm OID")]
    ReadOid(#[source] DerError),

    #[error("algorithm OID is not equal to {expected}")]
    UnexpectedAlgorithm { expected: String, found: Oid },

    #[error("algorithm identifier missing required NULL parameter")]
    MissingNull,

    #[error("algorithm identifier with non-NULL parameter")]
    NonNullParameter,

    #[error("algorithm identifier with NULL parameter containing data")]
    NullWithData,

    #[error("algorithm identifier with trailing data")]
    TrailingData,
}

/// Verify that `raw` is exactly `SEQUENCE { expected, NULL }` with nothing after it.
///
/// The OID is checked first, then the parameter, then any remaining bytes (inside
/// the SEQUENCE or after it).
pub fn check_algorithm_id_param_null(raw: &[u8], expected: &str) -> Result<(), AlgorithmIdError> {
    let mut outer = DerReader::new(raw);
    let seq = outer
        .read_expected(Tag::SEQUENCE)
        .map_err(AlgorithmIdError::ReadAlgorithm)?;
    let mut fields = seq
        .contents("AlgorithmIdentifier")
        .map_err(AlgorithmIdError::ReadAlgorithm)?;

    let oid = fields.read_oid().map_err(AlgorithmIdError::ReadOid)?;
    if !oid.matches(expected) {
        return Err(AlgorithmIdError::UnexpectedAlgorithm {
            expected: expected.to_string(),
            found: oid,
        });
    }

    if fields.is_empty() {
        return Err(AlgorithmIdError::MissingNull);
    }
    // An unreadable parameter element is indistinguishable from garbage after the OID.
    let param = fields
        .read_tlv()
        .map_err(|_| AlgorithmIdError::TrailingData)?;
    if param.tag != Tag::NULL {
        return Err(AlgorithmIdError::NonNullParameter);
    }
    if !param.value.is_empty() {
        return Err(AlgorithmIdError::NullWithData);
    }
    if !fields.is_empty() || !outer.is_empty() {
        return Err(AlgorithmIdError::TrailingData);
    }
    Ok(())
}

/// The OID of an `AlgorithmIdentifier`, ignoring its parameters.
pub fn algorithm_oid(raw: &[u8]) -> Result<Oid, DerError> {
    let mut outer = DerReader::new(raw);
    let seq = outer.read_expected(Tag::SEQUENCE)?;
    let mut fields = seq.contents("AlgorithmIdentifier")?;
    fields.read_oid()
}

/// Named-curve parameter of an `id-ecPublicKey` identifier, when the parameter is an OID.
///
/// `Ok(None)` covers both the implicit-curve (NULL) and specified-curve (SEQUENCE) forms.
pub fn ec_named_curve(raw: &[u8]) -> Result<Option<Oid>, DerError> {
    let mut outer = DerReader::new(raw);
    let seq = outer.read_expected(Tag::SEQUENCE)?;
    let mut fields = seq.contents("AlgorithmIdentifier")?;
    let _algorithm = fields.read_oid()?;
    match fields.read_optional(Tag::OID)? {
        Some(tlv) => tlv.as_oid().map(Some),
        None => Ok(None),
    }
}

/// One permitted byte-exact `AlgorithmIdentifier` encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanonicalEncoding {
    pub name: &'static str,
    /// Governing OID: the curve for key encodings, the scheme for signatures.
    pub oid: &'static str,
    pub der: &'static [u8],
}

/// `id-ecPublicKey` with a named-curve parameter (RFC 5480 §2.1.1).
pub const EC_PUBLIC_KEY_ENCODINGS: [CanonicalEncoding; 2] = [
    CanonicalEncoding {
        name: "P-256",
        oid: oids::SECP256R1,
        der: &[
            0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a,
            0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07,
        ],
    },
    CanonicalEncoding {
        name: "P-384",
        oid: oids::SECP384R1,
        der: &[
            0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05, 0x2b,
            0x81, 0x04, 0x00, 0x22,
        ],
    },
];

/// ECDSA signature identifiers with the parameters field omitted (RFC 5758 §3.2).
pub const ECDSA_SIGNATURE_ENCODINGS: [CanonicalEncoding; 2] = [
    CanonicalEncoding {
        name: "ecdsa-with-SHA256",
        oid: oids::ECDSA_WITH_SHA256,
        der: &[
            0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02,
        ],
    },
    CanonicalEncoding {
        name: "ecdsa-with-SHA384",
        oid: oids::ECDSA_WITH_SHA384,
        der: &[
            0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x03,
        ],
    },
];

/// Encoded bytes that matched none of the permitted encodings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported encoding {hex}")]
pub struct EncodingMismatch {
    pub hex: String,
}

/// Byte-for-byte lookup in a table of canonical encodings.
pub fn match_canonical<'t>(
    raw: &[u8],
    table: &'t [CanonicalEncoding],
) -> Result<&'t CanonicalEncoding, EncodingMismatch> {
    table.iter().find(|enc| enc.der == raw).ok_or_else(|| EncodingMismatch {
        hex: hex::encode(raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(h: &str) -> Vec<u8> {
        hex::decode(h).expect("hex")
    }

    fn check(h: &str) -> Result<(), AlgorithmIdError> {
        check_algorithm_id_param_null(&bytes(h), oids::RSA_ENCRYPTION)
    }

    #[test]
    fn accepts_exact_rsa_encryption_with_null() {
        assert_eq!(check("300d06092a864886f70d0101010500"), Ok(()));
    }

    #[test]
    fn distinguishes_every_deviation() {
        // INTEGER 0 inside the SEQUENCE after the NULL.
        assert_eq!(
            check("300f06092a864886f70d01010105000200"),
            Err(AlgorithmIdError::TrailingData)
        );
        // OID only.
        assert_eq!(check("300b06092a864886f70d010101"), Err(AlgorithmIdError::MissingNull));
        // NULL with content "NOTNULL".
        assert_eq!(
            check("301406092a864886f70d01010105074e4f544e554c4c"),
            Err(AlgorithmIdError::NullWithData)
        );
        // Empty NULL followed by "NOTNULL".
        assert_eq!(
            check("301406092a864886f70d01010105004e4f544e554c4c"),
            Err(AlgorithmIdError::TrailingData)
        );
        // [0] instead of NULL.
        assert_eq!(
            check("300d06092a864886f70d010101a000"),
            Err(AlgorithmIdError::NonNullParameter)
        );
        // Bytes after the outer SEQUENCE.
        assert_eq!(
            check("300d06092a864886f70d01010105000000"),
            Err(AlgorithmIdError::TrailingData)
        );
    }

    #[test]
    fn wrong_algorithm_reports_expected_oid() {
        // md2WithRSAEncryption
        let err = check("301406092a864886f70d01010205004e4f544e554c4c").unwrap_err();
        assert!(matches!(err, AlgorithmIdError::UnexpectedAlgorithm { .. }));
        assert_eq!(err.to_string(), "algorithm OID is not equal to 1.2.840.113549.1.1.1");
    }

    #[test]
    fn malformed_structures_have_their_own_kinds() {
        // SET tag and truncated content.
        let err = check("310d06092a864886f70d01010105").unwrap_err();
        assert!(matches!(err, AlgorithmIdError::ReadAlgorithm(_)));
        assert_eq!(err.to_string(), "error reading algorithm");

        // PrintableString "1.2.840.113549.1.1.1" where the OID belongs.
        let err = check("30181314312e322e3834302e3131333534392e312e312e310500").unwrap_err();
        assert!(matches!(err, AlgorithmIdError::ReadOid(_)));
        assert_eq!(err.to_string(), "error reading algorithm OID");

        assert!(matches!(check(""), Err(AlgorithmIdError::ReadAlgorithm(_))));
    }

    #[test]
    fn messages_are_distinct() {
        let messages = [
            AlgorithmIdError::ReadAlgorithm(DerError::Truncated).to_string(),
            AlgorithmIdError::ReadOid(DerError::InvalidOid).to_string(),
            AlgorithmIdError::MissingNull.to_string(),
            AlgorithmIdError::NonNullParameter.to_string(),
            AlgorithmIdError::NullWithData.to_string(),
            AlgorithmIdError::TrailingData.to_string(),
        ];
        let unique: std::collections::BTreeSet<_> = messages.iter().collect();
        assert_eq!(unique.len(), messages.len());
    }

    #[test]
    fn canonical_tables_match_their_own_re_encoding() {
        for enc in EC_PUBLIC_KEY_ENCODINGS {
            let curve = crate::encode::oid(enc.oid).expect("curve oid");
            let aid = crate::encode::algorithm_identifier(oids::EC_PUBLIC_KEY, Some(&curve))
                .expect("aid");
            assert_eq!(aid.as_slice(), enc.der, "{}", enc.name);
            let curve = ec_named_curve(&aid).expect("parse").expect("named curve");
            assert!(curve.matches(enc.oid));
        }
        for enc in ECDSA_SIGNATURE_ENCODINGS {
            let aid = crate::encode::algorithm_identifier(enc.oid, None).expect("aid");
            assert_eq!(match_canonical(&aid, &ECDSA_SIGNATURE_ENCODINGS), Ok(&enc));
        }
    }

    #[test]
    fn mismatch_names_the_offending_bytes() {
        // ecdsa-with-SHA256 with an explicit NULL.
        let raw = bytes("300c06082a8648ce3d0403020500");
        let err = match_canonical(&raw, &ECDSA_SIGNATURE_ENCODINGS).unwrap_err();
        assert_eq!(err.hex, "300c06082a8648ce3d0403020500");
    }

    #[test]
    fn algorithm_oid_ignores_parameters() {
        let oid = algorithm_oid(&bytes("300d06092a864886f70d0101010500")).expect("oid");
        assert!(oid.matches(oids::RSA_ENCRYPTION));
        assert_eq!(ec_named_curve(&bytes("300d06092a864886f70d0101010500")), Ok(None));
    }
}
