//! Runtime and package manager presence check

use crate::constants::urls;
use crate::core::InstallOutcome;
use crate::runner::{CommandOutcome, CommandRunner, CommandSpec, OutputMode};
use crate::ui;

pub const STAGE: &str = "prerequisites";

pub fn runtime_version() -> CommandSpec {
    CommandSpec::new("node", ["--version"])
}

pub fn package_manager_version() -> CommandSpec {
    CommandSpec::new("npm", ["--version"])
}

/// Query `node --version` and `npm --version`. No retries: a missing
/// runtime is not going to appear on its own.
pub fn check(runner: &dyn CommandRunner) -> InstallOutcome {
    let mut outcome = InstallOutcome::new(STAGE);

    let node = runner.run_lenient(&runtime_version(), OutputMode::Captured);
    if !node.success {
        return missing_runtime(outcome, &node);
    }

    let npm = runner.run_lenient(&package_manager_version(), OutputMode::Captured);
    if !npm.success {
        return missing_runtime(outcome, &npm);
    }

    outcome.success(format!("Node.js {} found", node.stdout_trimmed()));
    outcome.success(format!("npm {} found", npm.stdout_trimmed()));
    outcome
}

fn missing_runtime(mut outcome: InstallOutcome, failed: &CommandOutcome) -> InstallOutcome {
    let detail = failed.stderr.trim();
    if !detail.is_empty() {
        ui::verbose(detail);
    }
    outcome.fail("Node.js is not installed (or node/npm is not on PATH)!");
    outcome.fail(format!(
        "Install Node.js from {} first, then run this installer again.",
        urls::NODEJS_DOWNLOAD
    ));
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ScriptedRunner;

    #[test]
    fn reports_both_versions() {
        let runner = ScriptedRunner::new()
            .on("node --version", CommandOutcome::ok("v20.11.0\n"))
            .on("npm --version", CommandOutcome::ok("10.2.4\n"));

        let outcome = check(&runner);
        assert!(outcome.succeeded);
        assert!(outcome.has_message("Node.js v20.11.0 found"));
        assert!(outcome.has_message("npm 10.2.4 found"));
    }

    #[test]
    fn missing_node_fails_with_install_hint() {
        let runner = ScriptedRunner::new().missing("node");

        let outcome = check(&runner);
        assert!(!outcome.succeeded);
        assert!(outcome.has_message("https://nodejs.org/"));
        assert!(!runner.was_called("npm"));
    }

    #[test]
    fn failing_npm_fails_the_stage() {
        let runner = ScriptedRunner::new()
            .on("node --version", CommandOutcome::ok("v20.11.0"))
            .on("npm --version", CommandOutcome::failed(127, "npm: not found"));

        let outcome = check(&runner);
        assert!(!outcome.succeeded);
    }
}
