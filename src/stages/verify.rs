//! Registry authentication probe and package installation
//!
//! Both halves gate the pipeline. The package manager's error text is not
//! parsed; failures print the usual suspects and a command to retry by hand.

use crate::config::InstallerConfig;
use crate::core::InstallOutcome;
use crate::runner::{CommandRunner, CommandSpec, OutputMode};
use crate::ui;

pub const AUTH_STAGE: &str = "auth";
pub const INSTALL_STAGE: &str = "install";

pub fn whoami(config: &InstallerConfig) -> CommandSpec {
    CommandSpec::new(
        "npm",
        [
            "whoami".to_string(),
            format!("--registry={}", config.private_registry),
        ],
    )
}

pub fn cache_verify() -> CommandSpec {
    CommandSpec::new("npm", ["cache", "verify"])
}

pub fn install(config: &InstallerConfig) -> CommandSpec {
    CommandSpec::new(
        "npm",
        ["install".to_string(), "-g".to_string(), config.package_spec()],
    )
}

pub fn list_installed(config: &InstallerConfig) -> CommandSpec {
    CommandSpec::new(
        "npm",
        [
            "list".to_string(),
            "-g".to_string(),
            config.package.clone(),
            "--depth=0".to_string(),
        ],
    )
}

/// What to paste into a terminal to retry the install with full logs.
pub fn manual_install_command(config: &InstallerConfig) -> String {
    format!("npm install -g {} --verbose", config.package_spec())
}

/// `npm whoami` against the private registry. Output stays captured.
pub fn probe_auth(runner: &dyn CommandRunner, config: &InstallerConfig) -> InstallOutcome {
    let mut outcome = InstallOutcome::new(AUTH_STAGE);

    let result = runner.run_lenient(&whoami(config), OutputMode::Captured);
    if result.success {
        let user = result.stdout_trimmed();
        if user.is_empty() {
            outcome.success("Registry authentication succeeded!");
        } else {
            outcome.success(format!("Registry authentication succeeded! (as {})", user));
        }
        return outcome;
    }

    let detail = result.stderr.trim();
    if !detail.is_empty() {
        ui::verbose(detail);
    }

    outcome.fail(format!(
        "Authentication against {} failed!",
        config.private_registry
    ));
    outcome.error("Possible causes:");
    outcome.error("  1. The registry token has expired or is invalid");
    outcome.error("  2. The token lacks the read:packages permission");
    outcome.error("  3. Network connection problem");
    outcome.error("  4. The .npmrc file is misconfigured");
    outcome
}

/// Cache verify (best effort), streamed install, then a best-effort listing.
pub fn install_package(runner: &dyn CommandRunner, config: &InstallerConfig) -> InstallOutcome {
    let mut outcome = InstallOutcome::new(INSTALL_STAGE);

    let cache = runner.run_lenient(&cache_verify(), OutputMode::Captured);
    if !cache.success {
        ui::verbose("npm cache verify failed; continuing with install");
    }

    let installed = runner.run_lenient(&install(config), OutputMode::Streamed);
    if !installed.success {
        if installed.code.is_none() && !installed.stderr.is_empty() {
            outcome.error(installed.stderr.trim().to_string());
        }
        outcome.fail("Installation failed!");
        outcome.error("Troubleshooting:");
        outcome.error("  1. Check the error output above");
        outcome.error("  2. \"401 Unauthorized\" = token problem");
        outcome.error("  3. \"404 Not Found\" = package name or version problem");
        outcome.error("  4. \"ECONNREFUSED\" = network connection problem");
        outcome.info("Manual install command:");
        outcome.info(format!("  {}", manual_install_command(config)));
        return outcome;
    }

    outcome.success("Package installed!");

    // `npm list` sometimes exits non-zero even when the package is present
    let listing = runner.run_lenient(&list_installed(config), OutputMode::Captured);
    if listing.success && !listing.stdout_trimmed().is_empty() {
        outcome.info("Installed package:");
        outcome.block(listing.stdout_trimmed().to_string());
    }

    outcome
}

#[cfg(test)]
mod tests;
