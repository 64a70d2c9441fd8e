//! Host application setup guide
//!
//! Prints where the host config lives and the fragment to merge into it,
//! then walks a small prompt state machine:
//!
//! ```text
//! AwaitOpenDecision --yes, file opened--> AwaitKillDecision --any--> Done
//!        |--no / missing file / open failed--> Done
//! ```
//!
//! Nothing here affects the exit status.

use crate::config::InstallerConfig;
use crate::constants;
use crate::core::{InstallOutcome, PlatformProfile};
use crate::error::Result;
use crate::runner::{CommandRunner, OutputMode};
use crate::ui::{self, Prompter};
use serde_json::json;
use std::path::Path;

pub const STAGE: &str = "host-config";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideState {
    AwaitOpenDecision,
    AwaitKillDecision,
    Done,
}

/// `{ "mcpServers": { "<server>": { command, args, env: { API_URL } } } }`
pub fn config_snippet(config: &InstallerConfig) -> Result<String> {
    let snippet = json!({
        (constants::HOST_CONFIG_SECTION): {
            (config.server_name.as_str()): {
                "command": config.launch_command,
                "args": [config.package],
                "env": {
                    "API_URL": config.api_url
                }
            }
        }
    });
    Ok(serde_json::to_string_pretty(&snippet)?)
}

pub fn run(
    runner: &dyn CommandRunner,
    prompter: &mut dyn Prompter,
    profile: &PlatformProfile,
    config: &InstallerConfig,
) -> InstallOutcome {
    let mut outcome = InstallOutcome::new(STAGE);

    if let Err(e) = print_instructions(profile, config, &mut outcome) {
        outcome.warning(format!("Could not render the config snippet: {}", e));
    }

    let mut state = GuideState::AwaitOpenDecision;
    while state != GuideState::Done {
        state = match state {
            GuideState::AwaitOpenDecision => {
                if prompter.confirm("Open the config file now?") {
                    open_config(runner, profile, config, &mut outcome)
                } else {
                    GuideState::Done
                }
            }
            GuideState::AwaitKillDecision => {
                let question = format!("Quit {} now?", constants::HOST_APP_NAME);
                if prompter.confirm(&question) {
                    kill_host_app(runner, profile, &mut outcome);
                }
                GuideState::Done
            }
            GuideState::Done => GuideState::Done,
        };
    }

    outcome
}

fn print_instructions(
    profile: &PlatformProfile,
    config: &InstallerConfig,
    outcome: &mut InstallOutcome,
) -> Result<()> {
    ui::separator();
    outcome.info(format!("{} setup:", constants::HOST_APP_NAME));
    outcome.info("1. Config file location:");
    ui::indent(&profile.host_config_path.display().to_string(), 2);
    outcome.info(format!(
        "2. Add the following to the \"{}\" section:",
        constants::HOST_CONFIG_SECTION
    ));
    outcome.block(config_snippet(config)?);
    outcome.info(format!(
        "3. Restart {} after saving the file",
        constants::HOST_APP_NAME
    ));
    outcome.info(format!(
        "4. Ask {} to run the \"{}\" connection test",
        constants::HOST_APP_NAME,
        config.server_name
    ));
    ui::separator();
    Ok(())
}

fn open_config(
    runner: &dyn CommandRunner,
    profile: &PlatformProfile,
    config: &InstallerConfig,
    outcome: &mut InstallOutcome,
) -> GuideState {
    let path: &Path = &profile.host_config_path;

    if !path.exists() {
        outcome.warning("The config file does not exist yet.");
        outcome.warning(format!(
            "Run {} once to create it, then try again.",
            constants::HOST_APP_NAME
        ));
        return GuideState::Done;
    }

    let command = match profile.editor_command(path, config.editor.as_deref()) {
        Ok(command) => command,
        Err(e) => {
            outcome.error(format!("Failed to open the config file: {}", e));
            return GuideState::Done;
        }
    };

    // Streamed so terminal editors (`editor "vim"`) get the tty
    let opened = runner.run_lenient(&command, OutputMode::Streamed);
    if !opened.success {
        outcome.error(format!("Failed to open the config file with `{}`", command));
        if !opened.stderr.trim().is_empty() {
            outcome.error(opened.stderr.trim().to_string());
        }
        return GuideState::Done;
    }

    outcome.success("Config file opened.");
    outcome.info("Add the snippet above to it.");
    GuideState::AwaitKillDecision
}

/// A non-zero exit usually means the app was not running.
fn kill_host_app(
    runner: &dyn CommandRunner,
    profile: &PlatformProfile,
    outcome: &mut InstallOutcome,
) {
    let killed = runner.run_lenient(&profile.process_kill, OutputMode::Captured);
    if killed.success {
        outcome.success(format!("{} was closed.", constants::HOST_APP_NAME));
        outcome.info("Start it again after editing the config.");
    } else {
        outcome.info(format!("{} is not running.", constants::HOST_APP_NAME));
    }
}
