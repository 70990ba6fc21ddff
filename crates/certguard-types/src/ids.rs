//! Stable lint names.
//!
//! Names carry a severity-class prefix (`e_`, `w_`, `n_`) followed by a snake_case slug.

// CABF Baseline Requirements
pub const LINT_ROOT_CA_KEY_USAGE_MUST_BE_CRITICAL: &str = "e_root_ca_key_usage_must_be_critical";
pub const LINT_SUB_CA_EKU_MISSING: &str = "n_sub_ca_eku_missing";
pub const LINT_SUB_CERT_LOCALITY_NAME_MUST_APPEAR: &str = "e_sub_cert_locality_name_must_appear";
pub const LINT_SUBJECT_CONTAINS_ORGANIZATIONAL_UNIT_NAME: &str =
    "e_subject_contains_organizational_unit_name";

// CABF EV Guidelines
pub const LINT_EV_ORGID: &str = "e_ev_orgid";

// ETSI ESI
pub const LINT_EV_ORGID_ETSI: &str = "e_ev_orgid_etsi";
pub const LINT_QCSTATEM_QCSSCD_VALID: &str = "e_qcstatem_qcsscd_valid";
pub const LINT_QCSTATEM_QCTYPE_VALID: &str = "e_qcstatem_qctype_valid";
pub const LINT_QCSTATEM_QCTYPE_WEB: &str = "w_qcstatem_qctype_web";
pub const LINT_QCSTATEM_QCLIMITVALUE_VALID: &str = "e_qcstatem_qclimitvalue_valid";
pub const LINT_QCSTATEM_PSD2_NCAID_FORMAT: &str = "e_qcstatem_psd2_psd2statem_ncaid_format";

// Mozilla Root Store Policy
pub const LINT_MP_ECDSA_PUB_KEY_ENCODING_CORRECT: &str = "e_mp_ecdsa_pub_key_encoding_correct";
pub const LINT_MP_ECDSA_SIGNATURE_ENCODING_CORRECT: &str = "e_mp_ecdsa_signature_encoding_correct";

// RFC 5280 and companions
pub const LINT_SPKI_RSA_ENCRYPTION_PARAMETER_NOT_NULL: &str =
    "e_spki_rsa_encryption_parameter_not_null";
pub const LINT_TBS_SIGNATURE_RSA_ENCRYPTION_PARAMETER_NOT_NULL: &str =
    "e_tbs_signature_rsa_encryption_parameter_not_null";
pub const LINT_EXT_CERT_POLICY_EXPLICIT_TEXT_NOT_UTF8: &str =
    "w_ext_cert_policy_explicit_text_not_utf8";
