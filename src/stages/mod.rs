//! Installation pipeline
//!
//! Stages run strictly in order. A failed gating stage halts everything
//! after it; the host config guide is advisory and never gates.

pub mod host_config;
pub mod prerequisites;
pub mod registry;
pub mod verify;

use crate::config::InstallerConfig;
use crate::constants;
use crate::core::{InstallOutcome, PipelineResult, PlatformProfile};
use crate::runner::CommandRunner;
use crate::ui::{self, Prompter};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prerequisites,
    Registry,
    Auth,
    Install,
    HostConfig,
}

impl Stage {
    /// Full install, in execution order
    pub const PIPELINE: [Stage; 5] = [
        Stage::Prerequisites,
        Stage::Registry,
        Stage::Auth,
        Stage::Install,
        Stage::HostConfig,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Prerequisites => prerequisites::STAGE,
            Self::Registry => registry::STAGE,
            Self::Auth => verify::AUTH_STAGE,
            Self::Install => verify::INSTALL_STAGE,
            Self::HostConfig => host_config::STAGE,
        }
    }

    pub fn title(self, config: &InstallerConfig) -> String {
        match self {
            Self::Prerequisites => "Checking Node.js installation".to_string(),
            Self::Registry => "Configuring private registry".to_string(),
            Self::Auth => "Verifying registry authentication".to_string(),
            Self::Install => format!(
                "Installing {} (the first install takes 1-2 minutes)",
                config.package
            ),
            Self::HostConfig => format!("{} setup", constants::HOST_APP_NAME),
        }
    }

    pub fn is_gating(self) -> bool {
        !matches!(self, Self::HostConfig)
    }

    pub fn run(self, ctx: &mut StageContext<'_>) -> InstallOutcome {
        match self {
            Self::Prerequisites => prerequisites::check(ctx.runner),
            Self::Registry => {
                registry::configure(&ctx.profile.credential_path, ctx.config, ctx.today)
            }
            Self::Auth => verify::probe_auth(ctx.runner, ctx.config),
            Self::Install => verify::install_package(ctx.runner, ctx.config),
            Self::HostConfig => host_config::run(ctx.runner, ctx.prompter, ctx.profile, ctx.config),
        }
    }
}

/// Everything a stage may touch
pub struct StageContext<'a> {
    pub config: &'a InstallerConfig,
    pub profile: &'a PlatformProfile,
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a mut dyn Prompter,
    /// Date used for backup suffixes
    pub today: NaiveDate,
}

/// Run `stages` in order, stopping at the first gating failure.
pub fn run_pipeline(ctx: &mut StageContext<'_>, stages: &[Stage]) -> PipelineResult {
    let mut outcomes = Vec::with_capacity(stages.len());
    let mut halted_at = None;

    for (index, stage) in stages.iter().copied().enumerate() {
        ui::step(index + 1, stages.len(), &stage.title(ctx.config));
        let outcome = stage.run(ctx);
        let failed = !outcome.succeeded;
        outcomes.push(outcome);

        if failed && stage.is_gating() {
            halted_at = Some(stage.name());
            break;
        }
    }

    PipelineResult {
        outcomes,
        halted_at,
    }
}

#[cfg(test)]
mod tests;
