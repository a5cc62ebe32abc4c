use crate::cli::SelectArgs;
use crate::context::AppContext;
use crate::error::AppResult;

/// Launch failures are logged by the dispatcher and never reach the exit status.
pub fn run(ctx: &AppContext, args: SelectArgs) -> AppResult<()> {
    ctx.dispatcher().handle_select(&args.profile);
    Ok(())
}
