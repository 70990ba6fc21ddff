//! Minimal DER writer.
//!
//! Used to build synthetic certificates in tests and fuzz seeds, and to re-encode
//! structures for byte-exact comparison. Every function produces a complete TLV.

use crate::error::DerError;
use crate::oid::Oid;
use crate::reader::Tag;

pub fn tlv(tag: Tag, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + 6);
    out.push(tag.byte());
    push_length(&mut out, content.len());
    out.extend_from_slice(content);
    out
}

fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
}

fn constructed(tag: Tag, parts: &[Vec<u8>]) -> Vec<u8> {
    tlv(tag, &parts.concat())
}

pub fn sequence(parts: &[Vec<u8>]) -> Vec<u8> {
    constructed(Tag::SEQUENCE, parts)
}

pub fn set(parts: &[Vec<u8>]) -> Vec<u8> {
    constructed(Tag::SET, parts)
}

/// `[number] EXPLICIT` wrapper.
pub fn explicit(number: u8, inner: &[u8]) -> Vec<u8> {
    tlv(Tag::context(number, true), inner)
}

/// `[number] IMPLICIT` primitive.
pub fn implicit(number: u8, content: &[u8]) -> Vec<u8> {
    tlv(Tag::context(number, false), content)
}

pub fn oid(dotted: &str) -> Result<Vec<u8>, DerError> {
    let oid = Oid::from_dotted(dotted)?;
    Ok(tlv(Tag::OID, &oid.to_der_content()))
}

pub fn null() -> Vec<u8> {
    vec![Tag::NULL.byte(), 0x00]
}

pub fn boolean(value: bool) -> Vec<u8> {
    tlv(Tag::BOOLEAN, &[if value { 0xff } else { 0x00 }])
}

/// Minimal two's-complement INTEGER.
pub fn integer(value: i64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < bytes.len() - 1 {
        let (cur, next) = (bytes[start], bytes[start + 1]);
        let redundant = (cur == 0x00 && next & 0x80 == 0) || (cur == 0xff && next & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    tlv(Tag::INTEGER, &bytes[start..])
}

/// Non-negative INTEGER from big-endian magnitude bytes (serial numbers, moduli).
pub fn unsigned_integer(magnitude: &[u8]) -> Vec<u8> {
    let trimmed: &[u8] = match magnitude.iter().position(|&b| b != 0) {
        Some(i) => &magnitude[i..],
        None => &[0],
    };
    if trimmed[0] & 0x80 != 0 {
        let mut content = Vec::with_capacity(trimmed.len() + 1);
        content.push(0);
        content.extend_from_slice(trimmed);
        tlv(Tag::INTEGER, &content)
    } else {
        tlv(Tag::INTEGER, trimmed)
    }
}

pub fn octet_string(content: &[u8]) -> Vec<u8> {
    tlv(Tag::OCTET_STRING, content)
}

/// BIT STRING with zero unused bits.
pub fn bit_string(bits: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(bits.len() + 1);
    content.push(0);
    content.extend_from_slice(bits);
    tlv(Tag::BIT_STRING, &content)
}

pub fn utf8_string(s: &str) -> Vec<u8> {
    tlv(Tag::UTF8_STRING, s.as_bytes())
}

pub fn printable_string(s: &str) -> Vec<u8> {
    tlv(Tag::PRINTABLE_STRING, s.as_bytes())
}

pub fn ia5_string(s: &str) -> Vec<u8> {
    tlv(Tag::IA5_STRING, s.as_bytes())
}

pub fn visible_string(s: &str) -> Vec<u8> {
    tlv(Tag::VISIBLE_STRING, s.as_bytes())
}

pub fn bmp_string(s: &str) -> Vec<u8> {
    let content: Vec<u8> = s.encode_utf16().flat_map(u16::to_be_bytes).collect();
    tlv(Tag::BMP_STRING, &content)
}

/// `YYMMDDHHMMSSZ`.
pub fn utc_time(s: &str) -> Vec<u8> {
    tlv(Tag::UTC_TIME, s.as_bytes())
}

/// `YYYYMMDDHHMMSSZ`.
pub fn generalized_time(s: &str) -> Vec<u8> {
    tlv(Tag::GENERALIZED_TIME, s.as_bytes())
}

/// `AlgorithmIdentifier` with optional raw parameters.
pub fn algorithm_identifier(dotted: &str, params: Option<&[u8]>) -> Result<Vec<u8>, DerError> {
    let mut parts = vec![oid(dotted)?];
    if let Some(p) = params {
        parts.push(p.to_vec());
    }
    Ok(sequence(&parts))
}
