use super::{CommandOutcome, CommandRunner, CommandSpec, OutputMode};
use crate::error::{InstallerError, Result};
use crate::ui;
use crate::utils::platform;
use std::process::Stdio;

/// Spawns real processes and waits for them.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec, mode: OutputMode) -> Result<CommandOutcome> {
        let program = platform::resolve_program(&spec.program)?;
        ui::verbose(&format!("$ {}", spec));

        let mut cmd = platform::build_program_command(&program, &spec.args);

        match mode {
            OutputMode::Captured => {
                let output = cmd
                    .stdin(Stdio::null())
                    .output()
                    .map_err(|e| InstallerError::SystemCommandFailed {
                        command: spec.to_string(),
                        reason: e.to_string(),
                    })?;

                Ok(CommandOutcome {
                    success: output.status.success(),
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
            OutputMode::Streamed => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| InstallerError::SystemCommandFailed {
                        command: spec.to_string(),
                        reason: e.to_string(),
                    })?;

                Ok(CommandOutcome {
                    success: status.success(),
                    code: status.code(),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            }
        }
    }
}
