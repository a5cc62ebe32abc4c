use clap::Parser;

fn main() {
    let cli = zen_profiles::cli::Cli::parse();

    if let Err(err) = zen_profiles::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
