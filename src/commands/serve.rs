use std::io;

use tracing::info;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::host;

/// Reads one host event per line from stdin and answers with one action per line.
/// The profile cache lives for the whole session.
pub fn run(ctx: &AppContext) -> AppResult<()> {
    let mut dispatcher = ctx.dispatcher();
    info!("zen profile extension initialized");

    let replies = host::serve(&mut dispatcher, io::stdin().lock(), io::stdout().lock())?;

    info!(replies, "host closed the event stream");
    Ok(())
}
