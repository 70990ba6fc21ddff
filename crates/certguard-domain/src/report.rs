use crate::policy::FailOn;
use certguard_types::{ResultSet, Status, StatusCounts, Verdict};

/// Evaluation of one certificate, ready for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub counts: StatusCounts,
    pub results: ResultSet,
}

impl DomainReport {
    pub fn from_results(results: ResultSet, fail_on: FailOn) -> Self {
        Self {
            verdict: compute_verdict(&results, fail_on),
            counts: results.counts(),
            results,
        }
    }
}

/// `fail` when any status reaches the threshold or a lint faulted; `warn` for any
/// lower finding; otherwise `pass`.
pub fn compute_verdict(results: &ResultSet, fail_on: FailOn) -> Verdict {
    let threshold = match fail_on {
        FailOn::Notice => Status::Notice,
        FailOn::Warn => Status::Warn,
        FailOn::Error => Status::Error,
    };
    let worst = results.worst();
    if worst >= threshold || worst == Status::Fatal {
        Verdict::Fail
    } else if worst.is_finding() {
        Verdict::Warn
    } else {
        Verdict::Pass
    }
}

/// Roll several verdicts up to the most severe.
pub fn worst_verdict(verdicts: impl IntoIterator<Item = Verdict>) -> Verdict {
    verdicts
        .into_iter()
        .max_by_key(|v| match v {
            Verdict::Pass => 0,
            Verdict::Warn => 1,
            Verdict::Fail => 2,
        })
        .unwrap_or(Verdict::Pass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use certguard_types::LintResult;

    fn set(statuses: &[Status]) -> ResultSet {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("e_{i}"), LintResult::new(*s)))
            .collect()
    }

    #[test]
    fn verdict_thresholds() {
        let notice = set(&[Status::Pass, Status::Notice, Status::NotApplicable]);
        assert_eq!(compute_verdict(&notice, FailOn::Error), Verdict::Warn);
        assert_eq!(compute_verdict(&notice, FailOn::Notice), Verdict::Fail);

        let warn = set(&[Status::Warn]);
        assert_eq!(compute_verdict(&warn, FailOn::Error), Verdict::Warn);
        assert_eq!(compute_verdict(&warn, FailOn::Warn), Verdict::Fail);

        let error = set(&[Status::Error, Status::Pass]);
        assert_eq!(compute_verdict(&error, FailOn::Error), Verdict::Fail);

        let clean = set(&[Status::Pass, Status::NotApplicable]);
        assert_eq!(compute_verdict(&clean, FailOn::Notice), Verdict::Pass);
        assert_eq!(compute_verdict(&ResultSet::default(), FailOn::Error), Verdict::Pass);
    }

    #[test]
    fn fatal_always_fails() {
        assert_eq!(compute_verdict(&set(&[Status::Fatal]), FailOn::Error), Verdict::Fail);
    }

    #[test]
    fn report_carries_counts() {
        let r = DomainReport::from_results(set(&[Status::Pass, Status::Warn, Status::Warn]), FailOn::Error);
        assert_eq!(r.verdict, Verdict::Warn);
        assert_eq!(r.counts.warn, 2);
        assert_eq!(r.counts.pass, 1);
    }

    #[test]
    fn worst_verdict_rolls_up() {
        assert_eq!(worst_verdict([]), Verdict::Pass);
        assert_eq!(worst_verdict([Verdict::Warn, Verdict::Pass]), Verdict::Warn);
        assert_eq!(worst_verdict([Verdict::Warn, Verdict::Fail, Verdict::Pass]), Verdict::Fail);
    }
}
