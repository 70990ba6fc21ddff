//! ASN.1 character string types as they appear in names, notices and QC statements.

use crate::error::DerError;
use crate::reader::{Tag, Tlv};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringKind {
    Utf8,
    Printable,
    Teletex,
    Ia5,
    Visible,
    Universal,
    Bmp,
}

impl StringKind {
    pub fn from_tag(tag: Tag) -> Option<StringKind> {
        Some(match tag {
            Tag::UTF8_STRING => StringKind::Utf8,
            Tag::PRINTABLE_STRING => StringKind::Printable,
            Tag::TELETEX_STRING => StringKind::Teletex,
            Tag::IA5_STRING => StringKind::Ia5,
            Tag::VISIBLE_STRING => StringKind::Visible,
            Tag::UNIVERSAL_STRING => StringKind::Universal,
            Tag::BMP_STRING => StringKind::Bmp,
            _ => return None,
        })
    }

    pub fn tag(self) -> Tag {
        match self {
            StringKind::Utf8 => Tag::UTF8_STRING,
            StringKind::Printable => Tag::PRINTABLE_STRING,
            StringKind::Teletex => Tag::TELETEX_STRING,
            StringKind::Ia5 => Tag::IA5_STRING,
            StringKind::Visible => Tag::VISIBLE_STRING,
            StringKind::Universal => Tag::UNIVERSAL_STRING,
            StringKind::Bmp => Tag::BMP_STRING,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StringKind::Utf8 => "UTF8String",
            StringKind::Printable => "PrintableString",
            StringKind::Teletex => "TeletexString",
            StringKind::Ia5 => "IA5String",
            StringKind::Visible => "VisibleString",
            StringKind::Universal => "UniversalString",
            StringKind::Bmp => "BMPString",
        }
    }
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string value together with the type it was encoded as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedString {
    pub kind: StringKind,
    pub text: String,
}

/// Decode any supported string type, enforcing its character set.
pub fn decode(tlv: &Tlv<'_>) -> Result<DecodedString, DerError> {
    let kind = StringKind::from_tag(tlv.tag).ok_or(DerError::UnexpectedTag {
        expected: Tag::UTF8_STRING.byte(),
        found: tlv.tag.byte(),
    })?;
    let text = decode_as(kind, tlv.value)?;
    Ok(DecodedString { kind, text })
}

/// Decode content octets of a known string type.
pub fn decode_as(kind: StringKind, content: &[u8]) -> Result<String, DerError> {
    let invalid = || DerError::InvalidString {
        kind: kind.as_str(),
    };
    match kind {
        StringKind::Utf8 => std::str::from_utf8(content)
            .map(str::to_owned)
            .map_err(|_| invalid()),
        StringKind::Printable => {
            if content.iter().all(|&b| is_printable(b)) {
                Ok(content.iter().map(|&b| char::from(b)).collect())
            } else {
                Err(invalid())
            }
        }
        StringKind::Ia5 => {
            if content.is_ascii() {
                Ok(content.iter().map(|&b| char::from(b)).collect())
            } else {
                Err(invalid())
            }
        }
        StringKind::Visible => {
            if content.iter().all(|&b| (0x20..=0x7e).contains(&b)) {
                Ok(content.iter().map(|&b| char::from(b)).collect())
            } else {
                Err(invalid())
            }
        }
        // T.61 is treated as Latin-1, which is what issuers actually put there.
        StringKind::Teletex => Ok(content.iter().map(|&b| char::from(b)).collect()),
        StringKind::Bmp => {
            if content.len() % 2 != 0 {
                return Err(invalid());
            }
            let units = content
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
            char::decode_utf16(units)
                .collect::<Result<String, _>>()
                .map_err(|_| invalid())
        }
        StringKind::Universal => {
            if content.len() % 4 != 0 {
                return Err(invalid());
            }
            content
                .chunks_exact(4)
                .map(|quad| {
                    char::from_u32(u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]))
                        .ok_or_else(invalid)
                })
                .collect()
        }
    }
}

fn is_printable(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b" '()+,-./:=?".contains(&b)
}
