use crate::status::{LintResult, Status, StatusCounts};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lint name -> result for one certificate evaluation.
///
/// Keyed by a `BTreeMap` so iteration and serialization order never depend on
/// the order lints happened to finish in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ResultSet(BTreeMap<String, LintResult>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&LintResult> {
        self.0.get(name)
    }

    pub fn status(&self, name: &str) -> Option<Status> {
        self.0.get(name).map(|r| r.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LintResult)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest-precedence status in the set (`Reserved` when empty).
    pub fn worst(&self) -> Status {
        self.0
            .values()
            .map(|r| r.status)
            .fold(Status::Reserved, Status::merge)
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for result in self.0.values() {
            counts.record(result.status);
        }
        counts
    }
}

impl FromIterator<(String, LintResult)> for ResultSet {
    fn from_iter<T: IntoIterator<Item = (String, LintResult)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ResultSet {
    type Item = (String, LintResult);
    type IntoIter = std::collections::btree_map::IntoIter<String, LintResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
