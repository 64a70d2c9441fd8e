use super::*;
use crate::config::settings::{self, Settings};
use crate::runner::{CommandOutcome, ScriptedRunner};

fn config() -> InstallerConfig {
    let mut settings = Settings::default();
    settings
        .set(settings::KEY_TOKEN, "ghp_testtoken".to_string())
        .unwrap();
    InstallerConfig::from_settings(&settings).unwrap()
}

#[test]
fn whoami_targets_private_registry() {
    assert_eq!(
        whoami(&config()).args,
        ["whoami", "--registry=https://npm.pkg.github.com/"]
    );
}

#[test]
fn auth_success_names_user() {
    let runner = ScriptedRunner::new().on("npm whoami", CommandOutcome::ok("octocat\n"));
    let outcome = probe_auth(&runner, &config());
    assert!(outcome.succeeded);
    assert!(outcome.has_message("as octocat"));
}

#[test]
fn auth_failure_lists_four_causes() {
    let runner = ScriptedRunner::new().on("npm whoami", CommandOutcome::failed(1, "E401"));
    let outcome = probe_auth(&runner, &config());

    assert!(!outcome.succeeded);
    assert!(outcome.has_message("expired or is invalid"));
    assert!(outcome.has_message("read:packages"));
    assert!(outcome.has_message("Network"));
    assert!(outcome.has_message(".npmrc"));
}

#[test]
fn install_streams_and_lists() {
    let runner = ScriptedRunner::new().on(
        "npm list -g",
        CommandOutcome::ok("/usr/lib\n`-- @mcnc-bizmob/mcnc-rag-mcp-server@1.2.0\n"),
    );

    let outcome = install_package(&runner, &config());

    assert!(outcome.succeeded);
    assert!(outcome.has_message("mcnc-rag-mcp-server@1.2.0"));

    let calls = runner.calls();
    assert_eq!(
        runner.command_lines(),
        [
            "npm cache verify",
            "npm install -g @mcnc-bizmob/mcnc-rag-mcp-server@latest",
            "npm list -g @mcnc-bizmob/mcnc-rag-mcp-server --depth=0",
        ]
    );
    assert_eq!(calls[1].1, OutputMode::Streamed);
    assert_eq!(calls[2].1, OutputMode::Captured);
}

#[test]
fn cache_verify_failure_does_not_block_install() {
    let runner = ScriptedRunner::new().on("npm cache verify", CommandOutcome::failed(1, "EPERM"));
    let outcome = install_package(&runner, &config());
    assert!(outcome.succeeded);
    assert!(runner.was_called("npm install -g"));
}

#[test]
fn listing_failure_is_swallowed() {
    let runner = ScriptedRunner::new().on("npm list", CommandOutcome::failed(1, "ELSPROBLEMS"));
    let outcome = install_package(&runner, &config());
    assert!(outcome.succeeded);
    assert!(!outcome.has_message("Installed package:"));
}

#[test]
fn install_failure_prints_manual_command_and_hints() {
    let runner = ScriptedRunner::new().on("npm install", CommandOutcome::failed(1, ""));
    let outcome = install_package(&runner, &config());

    assert!(!outcome.succeeded);
    assert!(outcome.has_message("401 Unauthorized"));
    assert!(outcome.has_message("404 Not Found"));
    assert!(outcome.has_message("ECONNREFUSED"));
    assert!(outcome.has_message(
        "npm install -g @mcnc-bizmob/mcnc-rag-mcp-server@latest --verbose"
    ));
    assert!(!runner.was_called("npm list"));
}

#[test]
fn missing_npm_fails_install() {
    let runner = ScriptedRunner::new().missing("npm");
    let outcome = install_package(&runner, &config());
    assert!(!outcome.succeeded);
    assert!(outcome.has_message("not found"));
}
