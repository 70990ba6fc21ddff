//! Lint execution.
//!
//! Per (certificate, lint) pair the contract is:
//! 1. `check_applies` false → `NA`, `execute` is never called;
//! 2. `notBefore` outside `[effective, ineffective)` → `NA`;
//! 3. otherwise `execute`, with any panic from either call recorded as `Fatal` for that
//!    lint alone.
//!
//! No lint reads another lint's result, so candidates can run on the rayon pool or in a
//! plain loop; both produce the same `ResultSet`.

use crate::filter::{self, FilterError, LintSelection};
use crate::lint::LintDescriptor;
use crate::model::Certificate;
use crate::policy::Dispatch;
use crate::registry::Registry;
use certguard_types::{LintResult, ResultSet, Status};
use rayon::prelude::*;
use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, trace, warn};

/// A resolved set of candidate lints, ready to evaluate certificates.
#[derive(Debug)]
pub struct Engine<'r> {
    lints: Vec<&'r LintDescriptor>,
    dispatch: Dispatch,
}

impl<'r> Engine<'r> {
    /// Resolve the selection against the registry. Filter problems surface here,
    /// before any certificate is looked at.
    pub fn new(
        registry: &'r Registry,
        selection: &LintSelection,
        dispatch: Dispatch,
    ) -> Result<Self, FilterError> {
        let lints = filter::resolve(registry, selection)?;
        debug!(
            selected = lints.len(),
            registered = registry.len(),
            mode = selection.mode(),
            dispatch = dispatch.as_str(),
            "lint selection resolved"
        );
        Ok(Self { lints, dispatch })
    }

    pub fn lints(&self) -> &[&'r LintDescriptor] {
        &self.lints
    }

    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    pub fn evaluate(&self, cert: &Certificate) -> ResultSet {
        let results: ResultSet = match self.dispatch {
            Dispatch::Parallel => self
                .lints
                .par_iter()
                .map(|d| (d.name().to_string(), run_lint(d, cert)))
                .collect::<Vec<_>>()
                .into_iter()
                .collect(),
            Dispatch::Sequential => self
                .lints
                .iter()
                .map(|d| (d.name().to_string(), run_lint(d, cert)))
                .collect(),
        };
        debug!(
            lints = results.len(),
            worst = %results.worst(),
            "certificate evaluated"
        );
        results
    }

    /// Evaluate many certificates, stopping cleanly at the deadline or on cancellation.
    ///
    /// The stop condition is checked before each certificate starts; a certificate that
    /// has started always runs to completion, so no partial result sets are produced.
    pub fn evaluate_batch(&self, certs: &[Certificate], control: &BatchControl) -> BatchOutcome {
        let run_one = |cert: &Certificate| match control.stop_reason() {
            Some(reason) => BatchEntry::Skipped(reason),
            None => BatchEntry::Evaluated(self.evaluate(cert)),
        };
        let entries: Vec<BatchEntry> = match self.dispatch {
            Dispatch::Parallel => certs.par_iter().map(run_one).collect(),
            Dispatch::Sequential => certs.iter().map(run_one).collect(),
        };
        let outcome = BatchOutcome { entries };
        if outcome.skipped() > 0 {
            warn!(
                evaluated = outcome.evaluated(),
                skipped = outcome.skipped(),
                "batch stopped early"
            );
        }
        outcome
    }
}

/// Apply the lint contract to one certificate.
pub fn run_lint(descriptor: &LintDescriptor, cert: &Certificate) -> LintResult {
    let name = descriptor.name();
    let lint = descriptor.lint();

    let applies = match catch_unwind(AssertUnwindSafe(|| lint.check_applies(cert))) {
        Ok(applies) => applies,
        Err(payload) => return fault(name, "check_applies", payload.as_ref()),
    };
    if !applies {
        trace!(lint = name, "not applicable");
        return LintResult::na();
    }
    if !descriptor.meta().is_effective_on(cert.not_before_date()) {
        trace!(lint = name, "outside effective window");
        return LintResult::na();
    }

    match catch_unwind(AssertUnwindSafe(|| lint.execute(cert))) {
        Ok(result) if result.status == Status::Reserved => {
            warn!(lint = name, "lint returned reserved status");
            LintResult::fatal(format!("lint {name} returned reserved status"))
        }
        Ok(result) => result,
        Err(payload) => fault(name, "execute", payload.as_ref()),
    }
}

fn fault(name: &str, stage: &str, payload: &(dyn Any + Send)) -> LintResult {
    let message = panic_message(payload);
    warn!(lint = name, stage, %message, "lint faulted");
    LintResult::fatal(format!("lint {name} failed during {stage}: {message}"))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Stop conditions for a batch run.
#[derive(Clone, Debug, Default)]
pub struct BatchControl {
    pub deadline: Option<Instant>,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl BatchControl {
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn stop_reason(&self) -> Option<SkipReason> {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Some(SkipReason::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(SkipReason::DeadlineExceeded);
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    DeadlineExceeded,
    Cancelled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::DeadlineExceeded => "deadline exceeded before evaluation started",
            SkipReason::Cancelled => "cancelled before evaluation started",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchEntry {
    Evaluated(ResultSet),
    Skipped(SkipReason),
}

/// Per-certificate outcomes, index-aligned with the input slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOutcome {
    pub entries: Vec<BatchEntry>,
}

impl BatchOutcome {
    pub fn evaluated(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BatchEntry::Evaluated(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.len() - self.evaluated()
    }
}
