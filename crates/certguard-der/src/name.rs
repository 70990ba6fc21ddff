//! Attribute scanning over a raw `Name`.
//!
//! ```text
//! Name ::= SEQUENCE OF RelativeDistinguishedName
//! RelativeDistinguishedName ::= SET OF AttributeTypeAndValue
//! AttributeTypeAndValue ::= SEQUENCE { type OBJECT IDENTIFIER, value ANY }
//! ```

use crate::cert::sequence_items;
use crate::error::DerError;
use crate::oid::Oid;
use crate::reader::{Tag, Tlv};
use crate::string::{self, DecodedString};

/// One `AttributeTypeAndValue` in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeValue<'a> {
    pub oid: Oid,
    pub value: Tlv<'a>,
}

impl AttributeValue<'_> {
    /// The value as text, when it is one of the directory string types.
    pub fn text(&self) -> Result<DecodedString, DerError> {
        string::decode(&self.value)
    }
}

pub fn attributes(name: &[u8]) -> Result<Vec<AttributeValue<'_>>, DerError> {
    let mut rdns = sequence_items(name, "Name")?;
    let mut out = Vec::new();
    while !rdns.is_empty() {
        let rdn = rdns.read_expected(Tag::SET)?;
        let mut atvs = rdn.contents("RelativeDistinguishedName")?;
        while !atvs.is_empty() {
            let atv = atvs.read_expected(Tag::SEQUENCE)?;
            let mut f = atv.contents("AttributeTypeAndValue")?;
            let oid = f.read_oid()?;
            let value = f.read_tlv()?;
            f.finish("AttributeTypeAndValue")?;
            out.push(AttributeValue { oid, value });
        }
    }
    Ok(out)
}

/// First occurrence of an attribute type. Absence is `Ok(None)`, not an error.
pub fn find_attribute<'a>(
    name: &'a [u8],
    oid: &str,
) -> Result<Option<AttributeValue<'a>>, DerError> {
    Ok(attributes(name)?.into_iter().find(|a| a.oid.matches(oid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::*;
    use crate::oids;
    use crate::string::StringKind;

    fn atv(oid_str: &str, value: Vec<u8>) -> Vec<u8> {
        sequence(&[oid(oid_str).expect("oid"), value])
    }

    #[test]
    fn finds_organization_identifier() {
        let name = sequence(&[
            set(&[atv(oids::AT_COUNTRY, printable_string("DE"))]),
            set(&[
                atv(oids::AT_ORGANIZATION, utf8_string("Example GmbH")),
                atv(oids::AT_ORGANIZATION_IDENTIFIER, printable_string("NTRDE-HRB1234")),
            ]),
        ]);
        let found = find_attribute(&name, oids::AT_ORGANIZATION_IDENTIFIER)
            .expect("parse")
            .expect("present");
        let text = found.text().expect("string");
        assert_eq!(text.kind, StringKind::Printable);
        assert_eq!(text.text, "NTRDE-HRB1234");
        assert_eq!(attributes(&name).expect("parse").len(), 3);
    }

    #[test]
    fn absence_is_not_an_error() {
        let name = sequence(&[set(&[atv(oids::AT_COMMON_NAME, utf8_string("x"))])]);
        assert_eq!(find_attribute(&name, oids::AT_ORGANIZATIONAL_UNIT), Ok(None));
        assert_eq!(find_attribute(&name, oids::AT_LOCALITY), Ok(None));
        assert_eq!(attributes(&sequence(&[])).expect("empty name").len(), 0);
    }

    #[test]
    fn malformed_names_fail() {
        // RDN encoded as SEQUENCE instead of SET.
        let bad = sequence(&[sequence(&[atv(oids::AT_COMMON_NAME, utf8_string("x"))])]);
        assert!(attributes(&bad).is_err());
        // Extra element after the value.
        let bad = sequence(&[set(&[sequence(&[
            oid(oids::AT_COMMON_NAME).unwrap(),
            utf8_string("x"),
            null(),
        ])])]);
        assert_eq!(
            attributes(&bad),
            Err(DerError::TrailingData("AttributeTypeAndValue"))
        );
    }
}
