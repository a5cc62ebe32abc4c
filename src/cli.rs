use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "zen-profiles",
    version,
    about = "List Zen browser profiles and launch the browser with one"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        long,
        global = true,
        env = "ZEN_FOLDER",
        help = "Folder holding profiles.ini (overrides preferences)"
    )]
    pub zen_folder: Option<String>,
    #[arg(
        long,
        global = true,
        env = "ZEN_CMD",
        help = "Browser executable (overrides preferences)"
    )]
    pub zen_cmd: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Query(QueryArgs),
    Select(SelectArgs),
    Profiles,
    Serve,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[arg(num_args = 0.., help = "Filter text (case-insensitive substring)")]
    pub text: Vec<String>,
}

impl QueryArgs {
    /// Words are joined back with single spaces, as a launcher would pass them.
    pub fn argument(&self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        Some(self.text.join(" "))
    }
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    #[arg(help = "Profile name to launch")]
    pub profile: String,
}
