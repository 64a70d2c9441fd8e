use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn no_subcommand_means_install() {
    let cli = Cli::try_parse_from(["mcnc-installer"]).unwrap();
    assert_eq!(cli.command, None);
    assert!(!cli.global.yes);
}

#[test]
fn guide_subcommand_accepts_global_flags_after_it() {
    let cli = Cli::try_parse_from(["mcnc-installer", "guide", "--yes", "--token", "abc"]).unwrap();
    assert_eq!(cli.command, Some(Command::Guide));
    assert!(cli.global.yes);
    assert_eq!(cli.settings.token.as_deref(), Some("abc"));
}

#[test]
fn yes_conflicts_with_non_interactive() {
    let err = Cli::try_parse_from(["mcnc-installer", "--yes", "--non-interactive"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn overrides_carry_flags() {
    let cli = Cli::try_parse_from([
        "mcnc-installer",
        "--package",
        "@acme/tool",
        "--api-url",
        "http://localhost:3000/api",
    ])
    .unwrap();
    let overrides = cli.settings.overrides();
    assert_eq!(overrides.package.as_deref(), Some("@acme/tool"));
    assert_eq!(overrides.api_url.as_deref(), Some("http://localhost:3000/api"));
}
