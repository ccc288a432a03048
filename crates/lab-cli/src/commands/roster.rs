use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Birth dates stay out of command output.
#[derive(Serialize)]
struct RosterName<'a> {
    name: &'a str,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let names: Vec<RosterName<'_>> = ctx.roster.names().map(|name| RosterName { name }).collect();
    output(&names, flags.format)
}
