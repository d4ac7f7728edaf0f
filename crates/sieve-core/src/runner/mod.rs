//! Case execution seam used by the harness.
//!
//! Test bodies implement [`Case`] (or are wrapped via [`CaseFn`]) and are
//! attached to a [`sieve_model::CaseSpec`] at registration time.
mod error;
pub use error::CaseError;

mod context;
pub use context::RunContext;

mod id;
pub use id::make_run_id;

use std::{future::Future, pin::Pin, sync::Arc};

use async_trait::async_trait;

/// Boxed future returned by [`CaseFn`] bodies.
pub type CaseFuture = Pin<Box<dyn Future<Output = Result<(), CaseError>> + Send>>;

/// Shared handle to a case body.
pub type CaseRef = Arc<dyn Case>;

/// Executable body of a test case.
///
/// The harness decides *whether* a case runs (selection by tag) before it
/// ever touches this trait; an implementation only defines *what* the
/// case does once selected.
#[async_trait]
pub trait Case: Send + Sync {
    /// Execute the case body.
    ///
    /// The provided [`RunContext`] carries the run id and a cancellation
    /// token the body should observe for long waits.
    async fn run(&self, ctx: RunContext) -> Result<(), CaseError>;
}

/// Adapter turning an async closure into a [`CaseRef`].
pub struct CaseFn {
    f: Box<dyn Fn(RunContext) -> CaseFuture + Send + Sync>,
}

impl CaseFn {
    /// Wrap an async closure into a shared case handle.
    ///
    /// ```rust
    /// use sieve_core::runner::{CaseError, CaseFn, RunContext};
    ///
    /// let case = CaseFn::arc(|_ctx: RunContext| async move {
    ///     Ok::<(), CaseError>(())
    /// });
    /// ```
    pub fn arc<F, Fut>(f: F) -> CaseRef
    where
        F: Fn(RunContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), CaseError>> + Send + 'static,
    {
        Arc::new(CaseFn {
            f: Box::new(move |ctx| Box::pin(f(ctx))),
        })
    }
}

#[async_trait]
impl Case for CaseFn {
    async fn run(&self, ctx: RunContext) -> Result<(), CaseError> {
        (self.f)(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn case_fn_runs_closure_body() {
        let case = CaseFn::arc(|ctx: RunContext| async move {
            assert_eq!(ctx.run_id(), "t-1");
            Ok(())
        });

        let res = case.run(RunContext::new("t-1")).await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn case_fn_propagates_errors() {
        let case = CaseFn::arc(|_ctx: RunContext| async move {
            Err(CaseError::Assertion("expected 2 tabs, got 1".into()))
        });

        let res = case.run(RunContext::new("t-2")).await;
        match res {
            Err(CaseError::Assertion(msg)) => assert!(msg.contains("tabs")),
            other => panic!("expected CaseError::Assertion, got {other:?}"),
        }
    }
}
