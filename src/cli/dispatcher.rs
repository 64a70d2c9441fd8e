//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::error::Result;
use crate::ui::{FixedPrompter, Prompter, TerminalPrompter};

/// Dispatch the parsed CLI command. Returns the process exit code.
pub fn dispatch(args: &Cli) -> Result<i32> {
    let mut prompter = prompter_for(args);
    let overrides = args.settings.overrides();

    match args.command.unwrap_or(Command::Install) {
        Command::Install => commands::install::run(&overrides, prompter.as_mut()),
        Command::Guide => commands::guide::run(&overrides, prompter.as_mut()),
    }
}

fn prompter_for(args: &Cli) -> Box<dyn Prompter> {
    if args.global.yes {
        Box::new(FixedPrompter::new(true))
    } else if args.global.non_interactive {
        Box::new(FixedPrompter::new(false))
    } else {
        Box::new(TerminalPrompter)
    }
}
