pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod host;
pub mod launcher;
pub mod logging;
pub mod output;
pub mod profiles;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
