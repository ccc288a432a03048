use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reconciler = super::reconciler(ctx)?;
    let report = reconciler.run_pass().await?;
    output(&report, flags.format)
}
