use crate::error::DerError;
use crate::oid::Oid;
use std::fmt;

/// A single-byte DER identifier octet.
///
/// Only the low-tag-number form (tag numbers 0..=30) is representable; every structure
/// certificate policies talk about fits in it, and anything else is rejected by the reader.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(u8);

impl Tag {
    pub const BOOLEAN: Tag = Tag(0x01);
    pub const INTEGER: Tag = Tag(0x02);
    pub const BIT_STRING: Tag = Tag(0x03);
    pub const OCTET_STRING: Tag = Tag(0x04);
    pub const NULL: Tag = Tag(0x05);
    pub const OID: Tag = Tag(0x06);
    pub const UTF8_STRING: Tag = Tag(0x0c);
    pub const PRINTABLE_STRING: Tag = Tag(0x13);
    pub const TELETEX_STRING: Tag = Tag(0x14);
    pub const IA5_STRING: Tag = Tag(0x16);
    pub const UTC_TIME: Tag = Tag(0x17);
    pub const GENERALIZED_TIME: Tag = Tag(0x18);
    pub const VISIBLE_STRING: Tag = Tag(0x1a);
    pub const UNIVERSAL_STRING: Tag = Tag(0x1c);
    pub const BMP_STRING: Tag = Tag(0x1e);
    pub const SEQUENCE: Tag = Tag(0x30);
    pub const SET: Tag = Tag(0x31);

    /// Context-specific tag `[number]`.
    pub const fn context(number: u8, constructed: bool) -> Tag {
        let base = 0x80 | (number & 0x1f);
        if constructed { Tag(base | 0x20) } else { Tag(base) }
    }

    pub const fn from_byte(byte: u8) -> Option<Tag> {
        if byte & 0x1f == 0x1f { None } else { Some(Tag(byte)) }
    }

    pub const fn byte(self) -> u8 {
        self.0
    }

    pub const fn is_constructed(self) -> bool {
        self.0 & 0x20 != 0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(0x{:02x})", self.0)
    }
}

/// One decoded tag-length-value element, borrowing from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tag: Tag,
    /// Content octets only.
    pub value: &'a [u8],
    /// The full encoding: identifier, length and content octets.
    pub raw: &'a [u8],
}

impl<'a> Tlv<'a> {
    /// Cursor over the children of a constructed element.
    pub fn contents(&self, what: &'static str) -> Result<DerReader<'a>, DerError> {
        if !self.tag.is_constructed() {
            return Err(DerError::NotConstructed(what));
        }
        Ok(DerReader::new(self.value))
    }

    pub fn expect_tag(&self, tag: Tag) -> Result<(), DerError> {
        if self.tag == tag {
            Ok(())
        } else {
            Err(DerError::UnexpectedTag {
                expected: tag.byte(),
                found: self.tag.byte(),
            })
        }
    }

    pub fn as_oid(&self) -> Result<Oid, DerError> {
        self.expect_tag(Tag::OID)?;
        Oid::from_der_content(self.value)
    }

    /// Decode a DER INTEGER that fits in an `i64`.
    pub fn as_i64(&self) -> Result<i64, DerError> {
        self.expect_tag(Tag::INTEGER)?;
        decode_integer(self.value)
    }
}

fn decode_integer(content: &[u8]) -> Result<i64, DerError> {
    let (&first, rest) = content.split_first().ok_or(DerError::InvalidInteger)?;
    if let Some(&second) = rest.first() {
        // Nine leading identical bits is a non-minimal encoding.
        let redundant = (first == 0x00 && second & 0x80 == 0) || (first == 0xff && second & 0x80 != 0);
        if redundant {
            return Err(DerError::InvalidInteger);
        }
    }
    if content.len() > 8 {
        return Err(DerError::InvalidInteger);
    }
    let mut value: i64 = if first & 0x80 != 0 { -1 } else { 0 };
    for &b in content {
        value = (value << 8) | i64::from(b);
    }
    Ok(value)
}

/// Forward-only cursor over concatenated DER elements.
#[derive(Clone, Debug)]
pub struct DerReader<'a> {
    data: &'a [u8],
}

impl<'a> DerReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> &'a [u8] {
        self.data
    }

    /// Identifier of the next element without consuming it.
    pub fn peek_tag(&self) -> Option<Tag> {
        self.data.first().copied().and_then(Tag::from_byte)
    }

    pub fn read_tlv(&mut self) -> Result<Tlv<'a>, DerError> {
        let (&id, rest) = self.data.split_first().ok_or(DerError::Truncated)?;
        let tag = Tag::from_byte(id).ok_or(DerError::HighTagNumber(id))?;
        let (len, rest) = read_length(rest)?;
        if rest.len() < len {
            return Err(DerError::Truncated);
        }
        let (value, tail) = rest.split_at(len);
        let raw_len = self.data.len() - tail.len();
        let raw = &self.data[..raw_len];
        self.data = tail;
        Ok(Tlv { tag, value, raw })
    }

    pub fn read_expected(&mut self, tag: Tag) -> Result<Tlv<'a>, DerError> {
        let tlv = self.read_tlv()?;
        tlv.expect_tag(tag)?;
        Ok(tlv)
    }

    /// Consume the next element only when it carries `tag`.
    pub fn read_optional(&mut self, tag: Tag) -> Result<Option<Tlv<'a>>, DerError> {
        if self.peek_tag() == Some(tag) {
            self.read_tlv().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn read_oid(&mut self) -> Result<Oid, DerError> {
        self.read_expected(Tag::OID)?.as_oid()
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self, what: &'static str) -> Result<(), DerError> {
        if self.data.is_empty() {
            Ok(())
        } else {
            Err(DerError::TrailingData(what))
        }
    }
}

/// Decode exactly one element carrying `tag` that spans the whole input.
pub fn parse_single<'a>(data: &'a [u8], tag: Tag, what: &'static str) -> Result<Tlv<'a>, DerError> {
    let mut reader = DerReader::new(data);
    let tlv = reader.read_expected(tag)?;
    reader.finish(what)?;
    Ok(tlv)
}

fn read_length(data: &[u8]) -> Result<(usize, &[u8]), DerError> {
    let (&first, rest) = data.split_first().ok_or(DerError::Truncated)?;
    if first < 0x80 {
        return Ok((usize::from(first), rest));
    }
    if first == 0x80 {
        return Err(DerError::IndefiniteLength);
    }
    let count = usize::from(first & 0x7f);
    if count > std::mem::size_of::<usize>() {
        return Err(DerError::LengthOverflow);
    }
    if rest.len() < count {
        return Err(DerError::Truncated);
    }
    let (octets, rest) = rest.split_at(count);
    if octets.first() == Some(&0) {
        return Err(DerError::NonMinimalLength);
    }
    let len = octets
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
    if len < 0x80 {
        return Err(DerError::NonMinimalLength);
    }
    Ok((len, rest))
}
