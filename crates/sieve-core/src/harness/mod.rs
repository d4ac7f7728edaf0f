//! Harness that executes a run plan and records outcomes.
//! - Emits a skip record for every tag-excluded case, without executing it.
//! - Runs selected cases in registration order with a per-case timeout.
//! - Converts panics, timeouts and cancellation into failure records.
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use sieve_model::{CaseOutcome, CaseSpec, Mode, Tag, TimeoutMs};

use crate::{
    error::CoreError,
    events::ListenerHandle,
    registry::{CaseEntry, CaseRegistry},
    report::{CaseRecord, RunReport},
    runner::{RunContext, make_run_id},
    select::RunPlan,
};

/// Harness-wide settings for one run.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Mode the run operates under; drives tag-based exclusion.
    pub mode: Mode,
    /// Timeout applied to cases whose spec leaves `timeout_ms` at `0`.
    pub default_timeout_ms: TimeoutMs,
    /// Cancel the remaining cases after the first failure.
    pub fail_fast: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            default_timeout_ms: 30_000,
            fail_fast: false,
        }
    }
}

/// Executes registered cases under a mode, honoring exclusion tags.
///
/// The harness never executes a case that the selection layer excluded:
/// skip records are emitted up front, before any body runs. Selected
/// cases execute sequentially, each inside its own spawned task so that
/// a panicking body is contained and recorded as a failure.
pub struct Harness {
    config: HarnessConfig,
    listeners: Vec<ListenerHandle>,
}

impl Harness {
    /// Create a harness with the given configuration and no listeners.
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            listeners: Vec::new(),
        }
    }

    /// Attach a run listener.
    ///
    /// Listeners are notified in the order they were attached.
    pub fn with_listener(mut self, listener: ListenerHandle) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Mode this harness operates under.
    pub fn mode(&self) -> &Mode {
        &self.config.mode
    }

    /// Build a plan from the registry and execute it.
    #[instrument(level = "info", skip(self, registry), fields(mode = %self.config.mode))]
    pub async fn run(&self, registry: &CaseRegistry) -> RunReport {
        let plan = RunPlan::build(registry, self.config.mode.clone());
        self.run_plan(plan).await
    }

    /// Look up and run a single case, honoring its exclusion tags.
    ///
    /// Fails with [`CoreError::UnknownCase`] when no case with the given
    /// suite and name was registered. A tag-excluded case is recorded as
    /// skipped, exactly as in a full run.
    #[instrument(level = "info", skip(self, registry), fields(mode = %self.config.mode))]
    pub async fn run_case(
        &self,
        registry: &CaseRegistry,
        suite: &str,
        name: &str,
    ) -> Result<RunReport, CoreError> {
        let entry = registry.require(suite, name)?;
        let mut report = RunReport::new(self.config.mode.clone());

        if let Some(tag) = entry.spec.exclusion_tag(&self.config.mode) {
            self.notify_skipped(&entry.spec, tag).await;
            report.push(CaseRecord {
                case: entry.spec.qualified_name(),
                outcome: CaseOutcome::Skipped { tag: tag.clone() },
                duration_ms: 0,
            });
            return Ok(report);
        }

        let cancel = CancellationToken::new();
        let (outcome, duration_ms) = self.execute(entry, &cancel).await;
        self.notify_finished(&entry.spec, &outcome, duration_ms).await;
        report.push(CaseRecord {
            case: entry.spec.qualified_name(),
            outcome,
            duration_ms,
        });
        Ok(report)
    }

    /// Execute a previously built plan.
    ///
    /// Steps:
    /// 1. Record every excluded case as skipped; bodies never execute.
    /// 2. Execute selected cases in order, with timeout and panic capture.
    /// 3. On failure with `fail_fast`, cancel the remaining cases.
    pub async fn run_plan(&self, plan: RunPlan) -> RunReport {
        let mut report = RunReport::new(plan.mode.clone());
        let cancel = CancellationToken::new();

        for skip in &plan.skipped {
            self.notify_skipped(&skip.spec, &skip.tag).await;
            report.push(CaseRecord {
                case: skip.spec.qualified_name(),
                outcome: CaseOutcome::Skipped {
                    tag: skip.tag.clone(),
                },
                duration_ms: 0,
            });
        }

        for entry in &plan.selected {
            let outcome = if cancel.is_cancelled() {
                (
                    CaseOutcome::Failed {
                        reason: "cancelled before start".to_string(),
                    },
                    0,
                )
            } else {
                self.execute(entry, &cancel).await
            };

            let (outcome, duration_ms) = outcome;
            if outcome.is_failed() && self.config.fail_fast {
                debug!(case = %entry.spec.qualified_name(), "failure with fail-fast, cancelling run");
                cancel.cancel();
            }

            self.notify_finished(&entry.spec, &outcome, duration_ms)
                .await;
            report.push(CaseRecord {
                case: entry.spec.qualified_name(),
                outcome,
                duration_ms,
            });
        }

        info!(summary = %report.summary(), run_id = %report.run_id, "run finished");
        report
    }

    /// Run one selected case body to a terminal outcome.
    async fn execute(&self, entry: &CaseEntry, cancel: &CancellationToken) -> (CaseOutcome, u64) {
        let run_id = make_run_id(&entry.spec.suite, &entry.spec.name);
        let ctx = RunContext::with_cancel(run_id.clone(), cancel.child_token());
        self.notify_started(&entry.spec, &run_id).await;

        let case = entry.case.clone();
        let started = Instant::now();
        let mut handle = tokio::spawn(async move { case.run(ctx).await });

        let outcome = match self.effective_timeout(&entry.spec) {
            Some(limit) => match timeout(limit, &mut handle).await {
                Ok(joined) => Self::outcome_from_join(joined),
                Err(_) => {
                    handle.abort();
                    CaseOutcome::Failed {
                        reason: format!("timeout after {}ms", limit.as_millis()),
                    }
                }
            },
            None => Self::outcome_from_join(handle.await),
        };

        (outcome, started.elapsed().as_millis() as u64)
    }

    fn effective_timeout(&self, spec: &CaseSpec) -> Option<Duration> {
        let ms = if spec.timeout_ms > 0 {
            spec.timeout_ms
        } else {
            self.config.default_timeout_ms
        };
        (ms > 0).then(|| Duration::from_millis(ms))
    }

    fn outcome_from_join(
        joined: Result<Result<(), crate::runner::CaseError>, tokio::task::JoinError>,
    ) -> CaseOutcome {
        match joined {
            Ok(Ok(())) => CaseOutcome::Passed,
            Ok(Err(e)) => CaseOutcome::Failed {
                reason: e.to_string(),
            },
            Err(join_err) if join_err.is_panic() => {
                let payload = join_err.into_panic();
                let msg = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "opaque payload".to_string());
                CaseOutcome::Failed {
                    reason: format!("panic: {msg}"),
                }
            }
            Err(_) => CaseOutcome::Failed {
                reason: "cancelled".to_string(),
            },
        }
    }

    async fn notify_started(&self, spec: &CaseSpec, run_id: &str) {
        for listener in &self.listeners {
            listener.on_case_started(spec, run_id).await;
        }
    }

    async fn notify_skipped(&self, spec: &CaseSpec, tag: &Tag) {
        for listener in &self.listeners {
            listener.on_case_skipped(spec, tag).await;
        }
    }

    async fn notify_finished(&self, spec: &CaseSpec, outcome: &CaseOutcome, duration_ms: u64) {
        for listener in &self.listeners {
            listener.on_case_finished(spec, outcome, duration_ms).await;
        }
    }
}
