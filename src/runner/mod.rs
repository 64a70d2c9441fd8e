//! Subprocess execution seam
//!
//! Every stage shells out through [`CommandRunner`]. The real
//! [`SystemRunner`] blocks on the child with no timeout; [`ScriptedRunner`]
//! substitutes canned outcomes so stage logic can be exercised without
//! spawning anything.

mod scripted;
mod system;

pub use scripted::ScriptedRunner;
pub use system::SystemRunner;

use crate::error::Result;
use crate::utils::platform;
use std::fmt;

/// Program plus argv, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Same command with one more trailing argument
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&platform::display_command(&self.program, &self.args))
    }
}

/// Where the child's output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collected into [`CommandOutcome`], nothing reaches the terminal
    Captured,
    /// Inherited stdio so the user watches progress live
    Streamed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub code: Option<i32>,
    /// Empty when streamed
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn ok(stdout: &str) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: &str) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

pub trait CommandRunner {
    /// Run to completion. `Err` means the program could not be started at
    /// all (not on PATH, spawn failure); a non-zero exit is an `Ok` outcome
    /// with `success == false`.
    fn run(&self, spec: &CommandSpec, mode: OutputMode) -> Result<CommandOutcome>;

    /// Run and collapse spawn errors into a failed outcome.
    fn run_lenient(&self, spec: &CommandSpec, mode: OutputMode) -> CommandOutcome {
        match self.run(spec, mode) {
            Ok(outcome) => outcome,
            Err(e) => CommandOutcome {
                success: false,
                code: None,
                stdout: String::new(),
                stderr: e.to_string(),
            },
        }
    }
}
