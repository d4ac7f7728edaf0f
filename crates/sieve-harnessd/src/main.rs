use std::{sync::Arc, time::Duration};

use tracing::info;

use sieve_core::{
    CaseRegistry, Harness, HarnessConfig, LogListener,
    runner::{CaseError, CaseFn, RunContext},
};
use sieve_model::{CaseSpec, DOCUMENT_MODE, Mode, Tag};
use sieve_observe::{LoggerConfig, LoggerLevel, init_logger};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig {
        level: LoggerLevel::new("info")?,
        ..Default::default()
    };
    init_logger(&cfg)?;
    info!("logger initialized");

    // 2) mode (SIEVE_MODE, defaults to "default")
    let mode = match std::env::var("SIEVE_MODE") {
        Ok(raw) => raw.parse::<Mode>()?,
        Err(_) => Mode::default(),
    };
    info!(mode = %mode, "operating mode resolved");

    // 3) registry
    let document_mode = Tag::new(DOCUMENT_MODE)?;
    let mut registry = CaseRegistry::new();

    registry.register(
        CaseSpec::new("tabs", "open-tab").with_timeout_ms(5_000),
        CaseFn::arc(|_ctx: RunContext| async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<(), CaseError>(())
        }),
    )?;

    // Tab reparenting does not exist in document mode, hence the tag.
    registry.register(
        CaseSpec::new("tabs", "reparent-tab")
            .with_tag(document_mode.clone())
            .with_timeout_ms(5_000),
        CaseFn::arc(|_ctx: RunContext| async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<(), CaseError>(())
        }),
    )?;

    registry.register(
        CaseSpec::new("omnibox", "smoke"),
        CaseFn::arc(|ctx: RunContext| async move {
            if ctx.is_cancelled() {
                return Err(CaseError::Cancelled);
            }
            Ok(())
        }),
    )?;

    // 4) harness
    let harness = Harness::new(HarnessConfig {
        mode,
        ..Default::default()
    })
    .with_listener(Arc::new(LogListener));

    let report = harness.run(&registry).await;

    // 5) report
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.ok() {
        std::process::exit(1);
    }
    Ok(())
}
