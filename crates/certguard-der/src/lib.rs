//! Raw-encoding inspection for certificate lints.
//!
//! A general certificate parser normalizes away exactly the encoding details some policies
//! forbid (an explicit NULL where none is allowed, trailing bytes, a non-canonical curve
//! parameter). The functions here work on raw DER slices and fail closed: any byte that does
//! not fit the expected grammar is reported as a typed error, never accepted silently and never
//! a panic.
//!
//! This is not a general ASN.1 engine. It knows the handful of structures policy text talks
//! about and nothing else.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cert;
pub mod encode;
pub mod name;
pub mod oid;
pub mod oids;
pub mod org_id;
pub mod policies;
pub mod qc;
pub mod reader;
pub mod string;

mod error;

#[cfg(test)]
mod proptest;

pub use error::DerError;
pub use oid::Oid;
pub use reader::{DerReader, Tag, Tlv};
