use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(flags: &GlobalFlags, ctx: &AppContext) -> anyhow::Result<()> {
    let rooms = ctx.api.rooms().await?;
    output(&rooms, flags.format)
}
