//! Object identifiers referenced by the inspector and the lint catalog.
//!
//! Kept as dotted strings and compared with [`crate::Oid::matches`].

// ── Public key and signature algorithms (RFC 3279, RFC 4055, RFC 5480, RFC 5758) ──

pub const RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub const MD2_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.2";
pub const MD5_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.4";
pub const SHA1_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.5";
pub const SHA224_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.14";
pub const SHA256_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.11";
pub const SHA384_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.12";
pub const SHA512_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.13";

/// PKCS#1 v1.5 signature algorithms whose parameters MUST be an explicit NULL.
pub const RSA_PKCS1_SIGNATURE_ALGORITHMS: [&str; 7] = [
    MD2_WITH_RSA_ENCRYPTION,
    MD5_WITH_RSA_ENCRYPTION,
    SHA1_WITH_RSA_ENCRYPTION,
    SHA224_WITH_RSA_ENCRYPTION,
    SHA256_WITH_RSA_ENCRYPTION,
    SHA384_WITH_RSA_ENCRYPTION,
    SHA512_WITH_RSA_ENCRYPTION,
];

pub const EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
pub const ECDSA_WITH_SHA256: &str = "1.2.840.10045.4.3.2";
pub const ECDSA_WITH_SHA384: &str = "1.2.840.10045.4.3.3";
pub const ECDSA_WITH_SHA512: &str = "1.2.840.10045.4.3.4";
pub const SECP256R1: &str = "1.2.840.10045.3.1.7";
pub const SECP384R1: &str = "1.3.132.0.34";
pub const SECP521R1: &str = "1.3.132.0.35";

pub const ED25519: &str = "1.3.101.112";
pub const DSA: &str = "1.2.840.10040.4.1";

// ── Extensions (RFC 5280 §4.2, RFC 3739) ──

pub const EXT_KEY_USAGE: &str = "2.5.29.15";
pub const EXT_EXTENDED_KEY_USAGE: &str = "2.5.29.37";
pub const EXT_BASIC_CONSTRAINTS: &str = "2.5.29.19";
pub const EXT_CERTIFICATE_POLICIES: &str = "2.5.29.32";
pub const EXT_QC_STATEMENTS: &str = "1.3.6.1.5.5.7.1.3";

// ── Policy qualifiers ──

pub const QT_CPS: &str = "1.3.6.1.5.5.7.2.1";
pub const QT_UNOTICE: &str = "1.3.6.1.5.5.7.2.2";

// ── Subject attributes (X.520 and EV jurisdiction attributes) ──

pub const AT_COMMON_NAME: &str = "2.5.4.3";
pub const AT_SURNAME: &str = "2.5.4.4";
pub const AT_SERIAL_NUMBER: &str = "2.5.4.5";
pub const AT_COUNTRY: &str = "2.5.4.6";
pub const AT_LOCALITY: &str = "2.5.4.7";
pub const AT_STATE_OR_PROVINCE: &str = "2.5.4.8";
pub const AT_STREET_ADDRESS: &str = "2.5.4.9";
pub const AT_ORGANIZATION: &str = "2.5.4.10";
pub const AT_ORGANIZATIONAL_UNIT: &str = "2.5.4.11";
pub const AT_GIVEN_NAME: &str = "2.5.4.42";
pub const AT_ORGANIZATION_IDENTIFIER: &str = "2.5.4.97";
pub const AT_JURISDICTION_LOCALITY: &str = "1.3.6.1.4.1.311.60.2.1.1";
pub const AT_JURISDICTION_STATE_OR_PROVINCE: &str = "1.3.6.1.4.1.311.60.2.1.2";
pub const AT_JURISDICTION_COUNTRY: &str = "1.3.6.1.4.1.311.60.2.1.3";

// ── ETSI EN 319 412-5 QC statements ──

pub const QCS_QC_COMPLIANCE: &str = "0.4.0.1862.1.1";
pub const QCS_QC_LIMIT_VALUE: &str = "0.4.0.1862.1.2";
pub const QCS_QC_SSCD: &str = "0.4.0.1862.1.4";
pub const QCS_QC_TYPE: &str = "0.4.0.1862.1.6";
pub const QCT_ESIGN: &str = "0.4.0.1862.1.6.1";
pub const QCT_ESEAL: &str = "0.4.0.1862.1.6.2";
pub const QCT_WEB: &str = "0.4.0.1862.1.6.3";

// ── ETSI TS 119 495 PSD2 ──

pub const PSD2_STATEMENT: &str = "0.4.0.19495.2";
pub const PSD2_ROLE_AS: &str = "0.4.0.19495.1.1";
pub const PSD2_ROLE_PI: &str = "0.4.0.19495.1.2";
pub const PSD2_ROLE_AI: &str = "0.4.0.19495.1.3";
pub const PSD2_ROLE_IC: &str = "0.4.0.19495.1.4";

// ── Certificate policies ──

pub const CABF_EV_POLICY: &str = "2.23.140.1.1";
