use std::fmt;

use tokio_util::sync::CancellationToken;

/// Per-execution context handed to a case body.
#[derive(Clone)]
pub struct RunContext {
    run_id: String,
    cancel: CancellationToken,
}

impl RunContext {
    /// Create a context with a fresh cancellation token.
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            cancel: CancellationToken::new(),
        }
    }

    /// Create a context bound to an existing cancellation token.
    ///
    /// The harness uses this to derive per-case tokens from its run-wide
    /// token, so a fail-fast cancel reaches every in-flight body.
    pub fn with_cancel(run_id: impl Into<String>, cancel: CancellationToken) -> Self {
        Self {
            run_id: run_id.into(),
            cancel,
        }
    }

    /// Identifier of this execution, unique within the process.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Token a long-running body should select on while waiting.
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Returns `true` once the run has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl fmt::Debug for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("run_id", &self.run_id)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunContext(run_id={})", self.run_id)
    }
}

#[cfg(test)]
mod tests {
    use super::RunContext;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn new_context_is_not_cancelled() {
        let ctx = RunContext::new("tabs-open-tab-1");
        assert_eq!(ctx.run_id(), "tabs-open-tab-1");
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn with_cancel_observes_parent_token() {
        let parent = CancellationToken::new();
        let ctx = RunContext::with_cancel("t-1", parent.child_token());

        assert!(!ctx.is_cancelled());
        parent.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn display_includes_run_id() {
        let ctx = RunContext::new("t-1");
        assert_eq!(ctx.to_string(), "RunContext(run_id=t-1)");
    }
}
