use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(flags: &GlobalFlags, ctx: &AppContext) -> anyhow::Result<()> {
    let summary = ctx.api.dashboard().await?;
    output(&summary, flags.format)
}
