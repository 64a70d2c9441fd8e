use crate::config::{InstallerConfig, Overrides};
use crate::core::PlatformProfile;
use crate::error::Result;
use crate::runner::SystemRunner;
use crate::stages::{self, Stage, StageContext};
use crate::ui::Prompter;
use chrono::Local;

/// Host config guide on its own, for machines that already have the package.
pub fn run(overrides: &Overrides, prompter: &mut dyn Prompter) -> Result<i32> {
    let config = InstallerConfig::load_without_token(overrides)?;
    let profile = PlatformProfile::detect()?;
    let runner = SystemRunner::new();

    super::install::print_banner(&config, &profile);

    let mut ctx = StageContext {
        config: &config,
        profile: &profile,
        runner: &runner,
        prompter,
        today: Local::now().date_naive(),
    };
    let result = stages::run_pipeline(&mut ctx, &[Stage::HostConfig]);
    Ok(result.exit_code())
}
