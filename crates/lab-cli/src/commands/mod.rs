pub mod add;
pub mod list;
pub mod roster;
pub mod run;
pub mod sync;

use anyhow::Context;
use lab_portal::PortalClient;
use lab_sync::Reconciler;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add { name, barcode } => add::run(&name, &barcode, ctx, flags).await,
        Commands::List { limit } => list::run(limit, ctx, flags).await,
        Commands::Roster => roster::run(ctx, flags),
        Commands::Sync => sync::run(ctx, flags).await,
        Commands::Run => run::run(ctx, flags).await,
    }
}

fn reconciler(ctx: &AppContext) -> anyhow::Result<Reconciler<PortalClient>> {
    let portal = PortalClient::new(&ctx.config.portal).context("failed to build portal client")?;
    tracing::debug!(url = portal.url(), "portal client ready");
    Ok(Reconciler::new(ctx.store.clone(), portal, ctx.roster.clone()))
}
