/// Low-level DER decoding failures.
///
/// Each variant names one way the input deviates from DER; callers that need a
/// policy-specific message wrap these in their own error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DerError {
    #[error("unexpected end of input")]
    Truncated,

    #[error("high-tag-number form is not supported (tag byte 0x{0:02x})")]
    HighTagNumber(u8),

    #[error("indefinite length is not allowed in DER")]
    IndefiniteLength,

    #[error("length is not minimally encoded")]
    NonMinimalLength,

    #[error("length does not fit in memory")]
    LengthOverflow,

    #[error("expected tag 0x{expected:02x}, found 0x{found:02x}")]
    UnexpectedTag { expected: u8, found: u8 },

    #[error("trailing data after {0}")]
    TrailingData(&'static str),

    #[error("malformed object identifier")]
    InvalidOid,

    #[error("malformed integer")]
    InvalidInteger,

    #[error("invalid {kind} contents")]
    InvalidString { kind: &'static str },

    #[error("{0} is not a constructed encoding")]
    NotConstructed(&'static str),
}
