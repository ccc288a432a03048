use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(limit: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let specimens = ctx.store.list_recent(limit).await?;
    output(&specimens, flags.format)
}
