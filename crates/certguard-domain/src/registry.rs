//! Lint catalog.
//!
//! Registration happens on a [`RegistryBuilder`]; [`RegistryBuilder::build`] consumes it
//! and yields a read-only [`Registry`], so nothing can be added once evaluation is
//! possible. The frozen registry is `Send + Sync` and shared by reference.

use crate::lint::LintDescriptor;
use certguard_types::Source;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("lint {0} is registered more than once")]
    DuplicateLint(String),

    #[error("lint name {0:?} must start with e_, w_ or n_")]
    InvalidName(String),

    #[error("lint {name}: ineffective date {ineffective} is not after effective date {effective}")]
    InvalidWindow {
        name: String,
        effective: time::Date,
        ineffective: time::Date,
    },
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    lints: BTreeMap<&'static str, LintDescriptor>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: LintDescriptor) -> Result<&mut Self, RegistryError> {
        let meta = *descriptor.meta();
        if !is_valid_name(meta.name) {
            return Err(RegistryError::InvalidName(meta.name.to_string()));
        }
        if let Some(end) = meta.ineffective_date
            && end <= meta.effective_date
        {
            return Err(RegistryError::InvalidWindow {
                name: meta.name.to_string(),
                effective: meta.effective_date,
                ineffective: end,
            });
        }
        if self.lints.contains_key(meta.name) {
            return Err(RegistryError::DuplicateLint(meta.name.to_string()));
        }
        self.lints.insert(meta.name, descriptor);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.lints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lints.is_empty()
    }

    pub fn build(self) -> Registry {
        tracing::debug!(lints = self.lints.len(), "lint registry frozen");
        Registry { lints: self.lints }
    }
}

fn is_valid_name(name: &str) -> bool {
    let Some(slug) = ["e_", "w_", "n_"].iter().find_map(|p| name.strip_prefix(p)) else {
        return false;
    };
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

#[derive(Debug)]
pub struct Registry {
    lints: BTreeMap<&'static str, LintDescriptor>,
}

impl Registry {
    pub fn lookup(&self, name: &str) -> Option<&LintDescriptor> {
        self.lints.get(name)
    }

    /// All descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &LintDescriptor> {
        self.lints.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lints.keys().copied()
    }

    pub fn by_source(&self, source: Source) -> impl Iterator<Item = &LintDescriptor> {
        self.lints.values().filter(move |d| d.source() == source)
    }

    /// Sources that have at least one registered lint.
    pub fn sources(&self) -> BTreeSet<Source> {
        self.lints.values().map(|d| d.source()).collect()
    }

    pub fn len(&self) -> usize {
        self.lints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lints.is_empty()
    }
}
