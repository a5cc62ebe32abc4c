use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        verbose,
        zen_folder,
        zen_cmd,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(json, verbose, zen_folder, zen_cmd)?;

    match command {
        Command::Query(args) => commands::query::run(&ctx, args),
        Command::Select(args) => commands::select::run(&ctx, args),
        Command::Profiles => commands::profiles::run(&ctx),
        Command::Serve => commands::serve::run(&ctx),
    }
}
