use std::sync::atomic::{AtomicU64, Ordering};

/// Global monotonically increasing sequence for run identifiers.
///
/// Local to the current harness process.
static RUN_SEQ: AtomicU64 = AtomicU64::new(1);

/// Returns next numeric sequence value.
fn next_seq() -> u64 {
    RUN_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Build a human-readable run id for one case execution.
///
/// Format: `{suite}-{name}-{seq:x}`.
/// - `suite` — CaseSpec.suite
/// - `name`  — CaseSpec.name
/// - `seq`   — per-process hex sequence
pub fn make_run_id(suite: &str, name: &str) -> String {
    format!("{suite}-{name}-{seq:x}", seq = next_seq())
}
