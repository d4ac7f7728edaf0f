//! Machine-readable outcome of one harness run.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sieve_model::{CaseOutcome, Mode};

/// Terminal record for one case within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Fully qualified `suite::name` of the case.
    pub case: String,
    /// How the case terminated.
    pub outcome: CaseOutcome,
    /// Wall-clock duration of the body in milliseconds (`0` for skips).
    pub duration_ms: u64,
}

/// Aggregated result of one harness run.
///
/// A report is append-only while the run is in progress and read-only
/// afterwards. Skips count toward the total but never toward failure:
/// [`RunReport::ok`] looks at failed cases only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Unique identifier of this run.
    pub run_id: Uuid,
    /// Mode the run was executed under.
    pub mode: Mode,
    /// Per-case records in completion order (skips first).
    pub cases: Vec<CaseRecord>,
}

impl RunReport {
    /// Start an empty report for the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            mode,
            cases: Vec::new(),
        }
    }

    /// Append a case record.
    pub fn push(&mut self, record: CaseRecord) {
        self.cases.push(record);
    }

    /// Total number of recorded cases.
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// Number of passed cases.
    pub fn passed(&self) -> usize {
        self.count(CaseOutcome::is_passed)
    }

    /// Number of failed cases.
    pub fn failed(&self) -> usize {
        self.count(CaseOutcome::is_failed)
    }

    /// Number of cases excluded by tag.
    pub fn skipped(&self) -> usize {
        self.count(CaseOutcome::is_skipped)
    }

    /// Returns `true` when no case failed. Skips do not affect this.
    pub fn ok(&self) -> bool {
        self.failed() == 0
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "mode={} total={} passed={} failed={} skipped={}",
            self.mode,
            self.total(),
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }

    fn count(&self, pred: impl Fn(&CaseOutcome) -> bool) -> usize {
        self.cases.iter().filter(|r| pred(&r.outcome)).count()
    }
}
