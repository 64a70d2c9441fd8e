use crate::config::{InstallerConfig, Overrides};
use crate::core::PlatformProfile;
use crate::error::Result;
use crate::project_identity;
use crate::runner::SystemRunner;
use crate::stages::{self, Stage, StageContext};
use crate::ui::{self as output, Prompter};
use crate::utils::{platform, sanitize};
use chrono::Local;

/// Full five-stage install. Returns the process exit code.
pub fn run(overrides: &Overrides, prompter: &mut dyn Prompter) -> Result<i32> {
    let config = InstallerConfig::load(overrides)?;
    let profile = PlatformProfile::detect()?;
    let runner = SystemRunner::new();

    print_banner(&config, &profile);

    let mut ctx = StageContext {
        config: &config,
        profile: &profile,
        runner: &runner,
        prompter,
        today: Local::now().date_naive(),
    };
    let result = stages::run_pipeline(&mut ctx, &Stage::PIPELINE);

    if let Some(stage) = result.halted_at {
        output::error(&format!(
            "Installation stopped at stage '{}'. Fix the problem above and run {} again.",
            stage,
            project_identity::BINARY_NAME
        ));
        return Ok(result.exit_code());
    }

    output::separator();
    output::success("Installation complete!");
    output::separator();
    Ok(result.exit_code())
}

pub(super) fn print_banner(config: &InstallerConfig, profile: &PlatformProfile) {
    output::separator();
    output::header(&format!("{} installer", project_identity::DISPLAY_NAME));
    output::keyval("Platform", &format!("{} ({})", platform::current_os_tag(), profile.os));
    output::keyval("Package", &config.package);
    output::separator();

    output::verbose(&format!("Registry: {}", config.private_registry));
    output::verbose(&format!("Token: {}", sanitize::mask_secret(&config.token)));
    output::verbose(&format!("Credential file: {}", profile.credential_path.display()));
    output::verbose(&format!("Host config: {}", profile.host_config_path.display()));
}
