//! Run listener seam for external observers of a harness run.
//!
//! Listeners are notified when a case starts, is skipped by tag, or
//! finishes with an outcome. Reporters, progress printers and log
//! forwarders implement [`RunListener`] and are attached to the harness.
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use sieve_model::{CaseOutcome, CaseSpec, Tag};

/// Shared handle to a run listener.
pub type ListenerHandle = Arc<dyn RunListener>;

/// Observer of case-level events within one run.
///
/// All callbacks default to no-ops so implementations only override what
/// they care about.
#[async_trait]
pub trait RunListener: Send + Sync {
    /// Listener name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// A selected case is about to execute.
    async fn on_case_started(&self, _spec: &CaseSpec, _run_id: &str) {}

    /// A case was excluded by tag; its body will not execute.
    async fn on_case_skipped(&self, _spec: &CaseSpec, _tag: &Tag) {}

    /// A case reached a terminal outcome.
    async fn on_case_finished(&self, _spec: &CaseSpec, _outcome: &CaseOutcome, _duration_ms: u64) {}
}

/// Listener that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpListener;

#[async_trait]
impl RunListener for NoOpListener {
    fn name(&self) -> &'static str {
        "noop-listener"
    }
}

/// Listener that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogListener;

#[async_trait]
impl RunListener for LogListener {
    fn name(&self) -> &'static str {
        "log-listener"
    }

    async fn on_case_started(&self, spec: &CaseSpec, run_id: &str) {
        debug!(case = %spec.qualified_name(), run_id = %run_id, "case started");
    }

    async fn on_case_skipped(&self, spec: &CaseSpec, tag: &Tag) {
        info!(case = %spec.qualified_name(), tag = %tag, "case skipped");
    }

    async fn on_case_finished(&self, spec: &CaseSpec, outcome: &CaseOutcome, duration_ms: u64) {
        match outcome {
            CaseOutcome::Failed { reason } => {
                warn!(
                    case = %spec.qualified_name(),
                    outcome = outcome.as_label(),
                    duration_ms,
                    reason = %reason,
                    "case finished"
                );
            }
            _ => {
                info!(
                    case = %spec.qualified_name(),
                    outcome = outcome.as_label(),
                    duration_ms,
                    "case finished"
                );
            }
        }
    }
}
