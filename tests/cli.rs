use clap::Parser;
use zen_profiles::cli::{Cli, Command};

#[test]
fn parses_query_words() {
    let cli = Cli::try_parse_from(["zen-profiles", "query", "work", "stuff"])
        .expect("cli parse should work");
    match cli.command {
        Command::Query(query) => assert_eq!(query.argument().as_deref(), Some("work stuff")),
        _ => panic!("expected query command"),
    }
}

#[test]
fn parses_query_without_text() {
    let cli = Cli::try_parse_from(["zen-profiles", "query"]).expect("cli parse should work");
    match cli.command {
        Command::Query(query) => assert_eq!(query.argument(), None),
        _ => panic!("expected query command"),
    }
}

#[test]
fn parses_select() {
    let cli = Cli::try_parse_from(["zen-profiles", "select", "My Profile"])
        .expect("cli parse should work");
    match cli.command {
        Command::Select(select) => assert_eq!(select.profile, "My Profile"),
        _ => panic!("expected select command"),
    }
}

#[test]
fn select_requires_a_profile() {
    assert!(Cli::try_parse_from(["zen-profiles", "select"]).is_err());
}

#[test]
fn parses_global_overrides() {
    let cli = Cli::try_parse_from([
        "zen-profiles",
        "serve",
        "--zen-folder",
        "~/.zen",
        "--zen-cmd",
        "flatpak-zen",
        "-vv",
        "--json",
    ])
    .expect("cli parse should work");
    assert!(matches!(cli.command, Command::Serve));
    assert_eq!(cli.zen_folder.as_deref(), Some("~/.zen"));
    assert_eq!(cli.zen_cmd.as_deref(), Some("flatpak-zen"));
    assert_eq!(cli.verbose, 2);
    assert!(cli.json);
}

#[test]
fn parses_profiles() {
    let cli = Cli::try_parse_from(["zen-profiles", "profiles"]).expect("cli parse should work");
    assert!(matches!(cli.command, Command::Profiles));
}
