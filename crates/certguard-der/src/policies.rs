//! Certificate policies extension (RFC 5280 §4.2.1.4).
//!
//! ```text
//! certificatePolicies ::= SEQUENCE SIZE (1..MAX) OF PolicyInformation
//! PolicyInformation ::= SEQUENCE {
//!     policyIdentifier   CertPolicyId,
//!     policyQualifiers   SEQUENCE SIZE (1..MAX) OF PolicyQualifierInfo OPTIONAL }
//! UserNotice ::= SEQUENCE {
//!     noticeRef        NoticeReference OPTIONAL,
//!     explicitText     DisplayText OPTIONAL }
//! NoticeReference ::= SEQUENCE {
//!     organization     DisplayText,
//!     noticeNumbers    SEQUENCE OF INTEGER }
//! DisplayText ::= CHOICE { ia5String, visibleString, bmpString, utf8String }
//! ```

use crate::cert::sequence_items;
use crate::error::DerError;
use crate::oid::Oid;
use crate::oids;
use crate::reader::{DerReader, Tag, Tlv};
use crate::string::{self, DecodedString, StringKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyInformation<'a> {
    pub policy: Oid,
    pub qualifiers: Vec<PolicyQualifier<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyQualifier<'a> {
    Cps(String),
    UserNotice(UserNotice),
    Other { id: Oid, qualifier: Tlv<'a> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeReference {
    pub organization: DecodedString,
    pub notice_numbers: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserNotice {
    pub notice_ref: Option<NoticeReference>,
    pub explicit_text: Option<DecodedString>,
}

/// Decode the `extnValue` of a certificate policies extension.
pub fn parse_certificate_policies(value: &[u8]) -> Result<Vec<PolicyInformation<'_>>, DerError> {
    let mut items = sequence_items(value, "certificatePolicies")?;
    let mut out = Vec::new();
    while !items.is_empty() {
        let info = items.read_expected(Tag::SEQUENCE)?;
        let mut f = info.contents("PolicyInformation")?;
        let policy = f.read_oid()?;
        let mut qualifiers = Vec::new();
        if let Some(list) = f.read_optional(Tag::SEQUENCE)? {
            let mut q = list.contents("policyQualifiers")?;
            while !q.is_empty() {
                qualifiers.push(parse_qualifier(&mut q)?);
            }
        }
        f.finish("PolicyInformation")?;
        out.push(PolicyInformation { policy, qualifiers });
    }
    Ok(out)
}

fn parse_qualifier<'a>(list: &mut DerReader<'a>) -> Result<PolicyQualifier<'a>, DerError> {
    let pqi = list.read_expected(Tag::SEQUENCE)?;
    let mut f = pqi.contents("PolicyQualifierInfo")?;
    let id = f.read_oid()?;
    let qualifier = f.read_tlv()?;
    f.finish("PolicyQualifierInfo")?;

    if id.matches(oids::QT_CPS) {
        qualifier.expect_tag(Tag::IA5_STRING)?;
        let uri = string::decode_as(StringKind::Ia5, qualifier.value)?;
        return Ok(PolicyQualifier::Cps(uri));
    }
    if id.matches(oids::QT_UNOTICE) {
        return parse_user_notice(&qualifier).map(PolicyQualifier::UserNotice);
    }
    Ok(PolicyQualifier::Other { id, qualifier })
}

fn parse_user_notice(tlv: &Tlv<'_>) -> Result<UserNotice, DerError> {
    tlv.expect_tag(Tag::SEQUENCE)?;
    let mut f = tlv.contents("UserNotice")?;
    let mut notice = UserNotice::default();

    if let Some(reference) = f.read_optional(Tag::SEQUENCE)? {
        let mut r = reference.contents("NoticeReference")?;
        let organization = display_text(&r.read_tlv()?)?;
        let numbers = r.read_expected(Tag::SEQUENCE)?;
        let mut n = numbers.contents("noticeNumbers")?;
        let mut notice_numbers = Vec::new();
        while !n.is_empty() {
            notice_numbers.push(n.read_tlv()?.as_i64()?);
        }
        r.finish("NoticeReference")?;
        notice.notice_ref = Some(NoticeReference {
            organization,
            notice_numbers,
        });
    }
    if !f.is_empty() {
        notice.explicit_text = Some(display_text(&f.read_tlv()?)?);
    }
    f.finish("UserNotice")?;
    Ok(notice)
}

fn display_text(tlv: &Tlv<'_>) -> Result<DecodedString, DerError> {
    let decoded = string::decode(tlv)?;
    match decoded.kind {
        StringKind::Ia5 | StringKind::Visible | StringKind::Bmp | StringKind::Utf8 => Ok(decoded),
        _ => Err(DerError::UnexpectedTag {
            expected: Tag::UTF8_STRING.byte(),
            found: tlv.tag.byte(),
        }),
    }
}

/// Every `explicitText` across all user notices, in document order.
pub fn explicit_texts(policies: &[PolicyInformation<'_>]) -> Vec<DecodedString> {
    policies
        .iter()
        .flat_map(|p| &p.qualifiers)
        .filter_map(|q| match q {
            PolicyQualifier::UserNotice(UserNotice {
                explicit_text: Some(text),
                ..
            }) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::*;

    fn policies_with_notice(notice: Vec<u8>) -> Vec<u8> {
        sequence(&[sequence(&[
            oid(oids::CABF_EV_POLICY).unwrap(),
            sequence(&[
                sequence(&[oid(oids::QT_CPS).unwrap(), ia5_string("https://cps.example")]),
                sequence(&[oid(oids::QT_UNOTICE).unwrap(), notice]),
            ]),
        ])])
    }

    #[test]
    fn decodes_cps_and_user_notice() {
        let notice = sequence(&[
            sequence(&[utf8_string("Example CA"), sequence(&[integer(1), integer(2)])]),
            visible_string("Relying parties must read the CPS"),
        ]);
        let ext = policies_with_notice(notice);
        let policies = parse_certificate_policies(&ext).expect("parse");
        assert_eq!(policies.len(), 1);
        assert!(policies[0].policy.matches(oids::CABF_EV_POLICY));
        assert_eq!(
            policies[0].qualifiers[0],
            PolicyQualifier::Cps("https://cps.example".into())
        );

        let PolicyQualifier::UserNotice(notice) = &policies[0].qualifiers[1] else {
            panic!("expected user notice");
        };
        let reference = notice.notice_ref.as_ref().expect("notice ref");
        assert_eq!(reference.notice_numbers, vec![1, 2]);
        let texts = explicit_texts(&policies);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].kind, StringKind::Visible);
    }

    #[test]
    fn explicit_text_without_reference() {
        let ext = policies_with_notice(sequence(&[bmp_string("Hinweis")]));
        let policies = parse_certificate_policies(&ext).expect("parse");
        let texts = explicit_texts(&policies);
        assert_eq!(texts[0].kind, StringKind::Bmp);
        assert_eq!(texts[0].text, "Hinweis");
    }

    #[test]
    fn policy_without_qualifiers_has_no_texts() {
        let ext = sequence(&[sequence(&[oid("2.23.140.1.2.2").unwrap()])]);
        let policies = parse_certificate_policies(&ext).expect("parse");
        assert!(policies[0].qualifiers.is_empty());
        assert!(explicit_texts(&policies).is_empty());
    }

    #[test]
    fn printable_string_is_not_display_text() {
        let ext = policies_with_notice(sequence(&[printable_string("Notice")]));
        assert!(parse_certificate_policies(&ext).is_err());
    }
}
