use lab_core::NewSpecimen;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    barcode: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let new = NewSpecimen::new(name, barcode)?;
    if !ctx.roster.contains(&new.name) {
        anyhow::bail!(
            "'{}' is not in the roster; results cannot be looked up without a date of birth",
            new.name
        );
    }

    let specimen = ctx.store.add_specimen(&new).await?;
    output(&specimen, flags.format)
}
