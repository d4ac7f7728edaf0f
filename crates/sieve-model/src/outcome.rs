use serde::{Deserialize, Serialize};

use crate::domain::Tag;

/// Terminal outcome of one case within a run.
///
/// A skip is not a failure: it records that the case was excluded by tag
/// before execution, so the body never ran under the excluded mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseOutcome {
    /// Case body ran to completion and returned success.
    Passed,
    /// Case body ran and failed, timed out, panicked, or was cancelled.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
    /// Case was excluded by tag and was never executed.
    Skipped {
        /// The tag that caused the exclusion.
        tag: Tag,
    },
}

impl CaseOutcome {
    /// Return a static label for logs and counters.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            CaseOutcome::Passed => "passed",
            CaseOutcome::Failed { .. } => "failed",
            CaseOutcome::Skipped { .. } => "skipped",
        }
    }

    /// Returns `true` for [`CaseOutcome::Passed`].
    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    /// Returns `true` for [`CaseOutcome::Failed`].
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, CaseOutcome::Failed { .. })
    }

    /// Returns `true` for [`CaseOutcome::Skipped`].
    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self, CaseOutcome::Skipped { .. })
    }
}
