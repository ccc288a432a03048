use serde::Serialize;

use lab_sync::Scheduler;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RunSummary {
    passes: u64,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interval = ctx.config.sync.interval();
    let scheduler = Scheduler::new(super::reconciler(ctx)?, interval);
    tracing::info!(
        interval_secs = interval.as_secs(),
        people = ctx.roster.len(),
        "scheduler started; press Ctrl-C to stop"
    );

    let passes = scheduler.run_until(shutdown_signal()).await?;
    output(&RunSummary { passes }, flags.format)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        // without a signal handler the scheduler only stops on a fatal error
        tracing::warn!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
