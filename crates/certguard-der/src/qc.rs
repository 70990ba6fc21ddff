//! Qualified-certificate statements (RFC 3739, ETSI EN 319 412-5, ETSI TS 119 495).
//!
//! ```text
//! QCStatements ::= SEQUENCE OF QCStatement
//! QCStatement ::= SEQUENCE {
//!     statementId   OBJECT IDENTIFIER,
//!     statementInfo ANY DEFINED BY statementId OPTIONAL }
//! ```
//!
//! The outer list is decoded strictly (a malformed list is a `DerError`). Statement
//! payloads are decoded leniently and every deviation is collected as a message, so a
//! lint can report all of them at once.

use crate::cert::sequence_items;
use crate::error::DerError;
use crate::oid::Oid;
use crate::reader::{DerReader, Tag, Tlv};
use crate::string::{self, StringKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QcStatement<'a> {
    pub id: Oid,
    pub info: Option<Tlv<'a>>,
}

/// Decode the `extnValue` of a QCStatements extension.
pub fn parse_qc_statements(value: &[u8]) -> Result<Vec<QcStatement<'_>>, DerError> {
    let mut items = sequence_items(value, "QCStatements")?;
    let mut out = Vec::new();
    while !items.is_empty() {
        let stmt = items.read_expected(Tag::SEQUENCE)?;
        let mut f = stmt.contents("QCStatement")?;
        let id = f.read_oid()?;
        let info = if f.is_empty() { None } else { Some(f.read_tlv()?) };
        f.finish("QCStatement")?;
        out.push(QcStatement { id, info });
    }
    Ok(out)
}

/// All statements carrying `id`, in document order.
pub fn find_statements<'s, 'a>(
    statements: &'s [QcStatement<'a>],
    id: &'s str,
) -> impl Iterator<Item = &'s QcStatement<'a>> {
    statements.iter().filter(move |s| s.id.matches(id))
}

/// Marker statements (`QcCompliance`, `QcSSCD`) have no payload.
pub fn check_marker(statement: &QcStatement<'_>, label: &str) -> Result<(), String> {
    match statement.info {
        None => Ok(()),
        Some(_) => Err(format!("{label} statement must not carry statementInfo")),
    }
}

/// `QcType ::= SEQUENCE OF OBJECT IDENTIFIER`.
pub fn decode_qc_type(statement: &QcStatement<'_>) -> Result<Vec<Oid>, String> {
    let info = statement
        .info
        .ok_or_else(|| "QcType statement has no statementInfo".to_string())?;
    if info.tag != Tag::SEQUENCE {
        return Err("QcType statementInfo is not a SEQUENCE of OIDs".to_string());
    }
    let mut r = DerReader::new(info.value);
    let mut types = Vec::new();
    while !r.is_empty() {
        let oid = r
            .read_oid()
            .map_err(|e| format!("QcType contains an element that is not an OID: {e}"))?;
        types.push(oid);
    }
    Ok(types)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Currency {
    Alphabetic(String),
    Numeric(i64),
}

/// `MonetaryValue ::= SEQUENCE { currency Iso4217CurrencyCode, amount INTEGER, exponent INTEGER }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonetaryValue {
    pub currency: Currency,
    pub amount: i64,
    pub exponent: i64,
}

pub fn decode_limit_value(statement: &QcStatement<'_>) -> Result<MonetaryValue, Vec<String>> {
    let Some(info) = statement.info else {
        return Err(vec!["QcEuLimitValue statement has no statementInfo".to_string()]);
    };
    if info.tag != Tag::SEQUENCE {
        return Err(vec!["QcEuLimitValue statementInfo is not a SEQUENCE".to_string()]);
    }
    let mut r = DerReader::new(info.value);
    let mut errors = Vec::new();

    let currency = match r.read_tlv() {
        Ok(t) if t.tag == Tag::PRINTABLE_STRING => {
            let code = string::decode_as(StringKind::Printable, t.value).unwrap_or_default();
            if code.len() != 3 {
                errors.push(format!("invalid alphabetic currency code length {}", t.value.len()));
            } else if !code.bytes().all(|b| b.is_ascii_uppercase()) {
                errors.push(format!(
                    "alphabetic currency code {code:?} is not three upper-case letters"
                ));
            }
            Some(Currency::Alphabetic(code))
        }
        Ok(t) if t.tag == Tag::INTEGER => match t.as_i64() {
            Ok(n) if (1..=999).contains(&n) => Some(Currency::Numeric(n)),
            Ok(n) => {
                errors.push(format!("numeric currency code {n} is out of range 1..999"));
                None
            }
            Err(e) => {
                errors.push(format!("numeric currency code is malformed: {e}"));
                None
            }
        },
        Ok(t) => {
            errors.push(format!(
                "currency code has invalid type (tag 0x{:02x})",
                t.tag.byte()
            ));
            None
        }
        Err(e) => {
            errors.push(format!("currency code is missing or malformed: {e}"));
            None
        }
    };
    let amount = read_integer(&mut r, "amount", &mut errors);
    let exponent = read_integer(&mut r, "exponent", &mut errors);
    if errors.is_empty() && !r.is_empty() {
        errors.push("trailing data in QcEuLimitValue".to_string());
    }

    match (currency, amount, exponent) {
        (Some(currency), Some(amount), Some(exponent)) if errors.is_empty() => Ok(MonetaryValue {
            currency,
            amount,
            exponent,
        }),
        _ => Err(errors),
    }
}

fn read_integer(r: &mut DerReader<'_>, label: &str, errors: &mut Vec<String>) -> Option<i64> {
    match r.read_tlv().and_then(|t| t.as_i64()) {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(format!("{label} is not a valid INTEGER: {e}"));
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Psd2Role {
    pub oid: Oid,
    pub name: String,
}

/// ```text
/// PSD2QcType ::= SEQUENCE { rolesOfPSP RolesOfPSP, nCAName NCAName, nCAId NCAId }
/// RoleOfPSP ::= SEQUENCE { roleOfPspOid RoleOfPspOid, roleOfPspName RoleOfPspName }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Psd2Statement {
    pub roles: Vec<Psd2Role>,
    pub nca_name: String,
    pub nca_id: String,
}

const PSD2_MAX_STRING: usize = 256;

pub fn decode_psd2(statement: &QcStatement<'_>) -> Result<Psd2Statement, Vec<String>> {
    let Some(info) = statement.info else {
        return Err(vec!["PSD2 statement has no statementInfo".to_string()]);
    };
    if info.tag != Tag::SEQUENCE {
        return Err(vec!["PSD2 statementInfo is not a SEQUENCE".to_string()]);
    }
    let mut r = DerReader::new(info.value);
    let mut errors = Vec::new();

    let roles = match r.read_tlv() {
        Ok(t) if t.tag == Tag::SEQUENCE => decode_roles(t.value, &mut errors),
        Ok(_) => {
            errors.push("rolesOfPSP is not a SEQUENCE".to_string());
            Vec::new()
        }
        Err(e) => {
            errors.push(format!("rolesOfPSP is missing or malformed: {e}"));
            Vec::new()
        }
    };
    let nca_name = psd2_string(&mut r, "nCAName", &mut errors);
    let nca_id = psd2_string(&mut r, "nCAId", &mut errors);
    if errors.is_empty() && !r.is_empty() {
        errors.push("trailing data in PSD2 statement".to_string());
    }

    match (nca_name, nca_id) {
        (Some(nca_name), Some(nca_id)) if errors.is_empty() => Ok(Psd2Statement {
            roles,
            nca_name,
            nca_id,
        }),
        _ => Err(errors),
    }
}

fn decode_roles(content: &[u8], errors: &mut Vec<String>) -> Vec<Psd2Role> {
    let mut r = DerReader::new(content);
    let mut roles = Vec::new();
    if r.is_empty() {
        errors.push("rolesOfPSP is empty".to_string());
    }
    while !r.is_empty() {
        let role = match r.read_expected(Tag::SEQUENCE) {
            Ok(t) => t,
            Err(e) => {
                errors.push(format!("roleOfPSP is malformed: {e}"));
                break;
            }
        };
        let mut f = DerReader::new(role.value);
        let oid = match f.read_oid() {
            Ok(oid) => Some(oid),
            Err(e) => {
                errors.push(format!("roleOfPspOid is missing or not an OID: {e}"));
                None
            }
        };
        let name = psd2_string(&mut f, "roleOfPspName", errors);
        if let Some(name) = &name
            && !name
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
        {
            errors.push(format!("roleOfPspName {name:?} contains illegal characters"));
        }
        if !f.is_empty() {
            errors.push("trailing data in roleOfPSP".to_string());
        }
        if let (Some(oid), Some(name)) = (oid, name) {
            roles.push(Psd2Role { oid, name });
        }
    }
    roles
}

/// `UTF8String (SIZE (1..256))`.
fn psd2_string(r: &mut DerReader<'_>, label: &str, errors: &mut Vec<String>) -> Option<String> {
    let tlv = match r.read_tlv() {
        Ok(t) => t,
        Err(e) => {
            errors.push(format!("{label} is missing or malformed: {e}"));
            return None;
        }
    };
    if tlv.tag != Tag::UTF8_STRING {
        let found = StringKind::from_tag(tlv.tag)
            .map(|k| k.as_str().to_string())
            .unwrap_or_else(|| format!("tag 0x{:02x}", tlv.tag.byte()));
        errors.push(format!("{label} must be a UTF8String, found {found}"));
        return None;
    }
    let text = match string::decode_as(StringKind::Utf8, tlv.value) {
        Ok(t) => t,
        Err(e) => {
            errors.push(format!("{label}: {e}"));
            return None;
        }
    };
    let len = text.chars().count();
    if len == 0 {
        errors.push(format!("{label} has zero length"));
        return None;
    }
    if len > PSD2_MAX_STRING {
        errors.push(format!("{label} exceeds {PSD2_MAX_STRING} characters"));
        return None;
    }
    Some(text)
}

/// NCA identifier: two-letter country, `-`, then a 2 to 8 letter authority code.
pub fn check_nca_id(nca_id: &str) -> Result<(), String> {
    let valid = match nca_id.split_once('-') {
        Some((country, authority)) => {
            country.len() == 2
                && country.bytes().all(|b| b.is_ascii_uppercase())
                && (2..=8).contains(&authority.len())
                && authority.bytes().all(|b| b.is_ascii_uppercase())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(format!(
            "nCAId {nca_id:?} does not match the format CC-XXXX (country code, '-', 2 to 8 upper-case letters)"
        ))
    }
}
