use crate::error::DerError;
use std::fmt;

/// A decoded OBJECT IDENTIFIER.
///
/// Decoding only accepts minimal base-128 subidentifiers, so two `Oid`s are equal
/// exactly when their DER encodings are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid {
    arcs: Vec<u64>,
}

impl Oid {
    pub fn from_der_content(content: &[u8]) -> Result<Oid, DerError> {
        if content.is_empty() {
            return Err(DerError::InvalidOid);
        }

        let mut subids = Vec::new();
        let mut current: u64 = 0;
        let mut in_progress = false;
        for &b in content {
            if !in_progress && b == 0x80 {
                // Leading 0x80 pads a subidentifier.
                return Err(DerError::InvalidOid);
            }
            if current > (u64::MAX >> 7) {
                return Err(DerError::InvalidOid);
            }
            current = (current << 7) | u64::from(b & 0x7f);
            if b & 0x80 == 0 {
                subids.push(current);
                current = 0;
                in_progress = false;
            } else {
                in_progress = true;
            }
        }
        if in_progress {
            return Err(DerError::InvalidOid);
        }

        let Some((&first, rest)) = subids.split_first() else {
            return Err(DerError::InvalidOid);
        };
        let mut arcs = Vec::with_capacity(subids.len() + 1);
        match first {
            0..=39 => arcs.extend([0, first]),
            40..=79 => arcs.extend([1, first - 40]),
            _ => arcs.extend([2, first - 80]),
        }
        arcs.extend_from_slice(rest);
        Ok(Oid { arcs })
    }

    /// Parse dotted-decimal notation (`"1.2.840.113549.1.1.1"`).
    pub fn from_dotted(dotted: &str) -> Result<Oid, DerError> {
        let arcs = dotted
            .split('.')
            .map(|s| s.parse::<u64>().map_err(|_| DerError::InvalidOid))
            .collect::<Result<Vec<_>, _>>()?;
        match arcs.as_slice() {
            [0 | 1, second, ..] if *second < 40 => {}
            [2, second, ..] if *second <= u64::MAX - 80 => {}
            _ => return Err(DerError::InvalidOid),
        }
        Ok(Oid { arcs })
    }

    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    /// Compare against dotted-decimal notation without allocating.
    pub fn matches(&self, dotted: &str) -> bool {
        let mut parts = dotted.split('.');
        for arc in &self.arcs {
            match parts.next().and_then(|p| p.parse::<u64>().ok()) {
                Some(v) if v == *arc => {}
                _ => return false,
            }
        }
        parts.next().is_none()
    }

    /// DER content octets (without tag and length).
    pub fn to_der_content(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let (first, rest) = match self.arcs.as_slice() {
            [a, b, rest @ ..] => (a * 40 + b, rest),
            _ => return out,
        };
        push_base128(&mut out, first);
        for &arc in rest {
            push_base128(&mut out, arc);
        }
        out
    }
}

fn push_base128(out: &mut Vec<u8>, mut value: u64) {
    let mut tmp = [0u8; 10];
    let mut i = tmp.len();
    loop {
        i -= 1;
        tmp[i] = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            break;
        }
    }
    let last = tmp.len() - 1;
    for (idx, b) in tmp.iter().enumerate().skip(i) {
        out.push(if idx == last { *b } else { b | 0x80 });
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.arcs.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({self})")
    }
}
