//! Pure lint evaluation (no IO).
//!
//! Input: a certificate model constructed elsewhere and a frozen lint registry.
//! Output: one result per selected lint, plus a verdict.

#![forbid(unsafe_code)]

pub mod engine;
pub mod filter;
pub mod lint;
pub mod lints;
pub mod model;
pub mod policy;
pub mod registry;
pub mod report;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{BatchControl, BatchEntry, BatchOutcome, Engine, SkipReason, run_lint};
pub use filter::{FilterError, LintSelection};
pub use lint::{Lint, LintDescriptor, LintMeta};
pub use lints::builtin_registry;
pub use registry::{Registry, RegistryBuilder, RegistryError};
