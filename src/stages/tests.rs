use super::*;
use crate::config::settings::{self, Settings};
use crate::runner::{CommandOutcome, ScriptedRunner};
use crate::ui::ScriptedPrompter;
use std::fs;
use tempfile::{TempDir, tempdir};

struct Fixture {
    _home: TempDir,
    config: InstallerConfig,
    profile: PlatformProfile,
    today: NaiveDate,
}

impl Fixture {
    fn new() -> Self {
        let home = tempdir().unwrap();
        let mut settings = Settings::default();
        settings
            .set(settings::KEY_TOKEN, "ghp_testtoken".to_string())
            .unwrap();

        Self {
            config: InstallerConfig::from_settings(&settings).unwrap(),
            profile: PlatformProfile::resolve("linux", home.path()),
            today: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            _home: home,
        }
    }

    fn run(&self, runner: &ScriptedRunner, prompter: &mut ScriptedPrompter) -> PipelineResult {
        let mut ctx = StageContext {
            config: &self.config,
            profile: &self.profile,
            runner,
            prompter,
            today: self.today,
        };
        run_pipeline(&mut ctx, &Stage::PIPELINE)
    }

    fn credential(&self) -> &std::path::Path {
        &self.profile.credential_path
    }

    fn backup(&self) -> std::path::PathBuf {
        registry::backup_path(self.credential(), self.today)
    }
}

#[test]
fn pipeline_order_and_gating() {
    let names: Vec<_> = Stage::PIPELINE.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        ["prerequisites", "registry", "auth", "install", "host-config"]
    );
    assert!(Stage::PIPELINE[..4].iter().all(|s| s.is_gating()));
    assert!(!Stage::HostConfig.is_gating());
}

#[test]
fn missing_runtime_halts_before_credential_file_is_touched() {
    let fx = Fixture::new();
    let runner = ScriptedRunner::new().missing("node");
    let mut prompter = ScriptedPrompter::new(&[]);

    let result = fx.run(&runner, &mut prompter);

    assert_eq!(result.exit_code(), 1);
    assert_eq!(result.halted_at, Some("prerequisites"));
    assert_eq!(result.outcomes.len(), 1);
    assert!(!fx.credential().exists());
    assert_eq!(runner.command_lines(), ["node --version"]);
}

#[test]
fn fresh_machine_happy_path_declining_guide() {
    let fx = Fixture::new();
    let runner = ScriptedRunner::new()
        .on("node --version", CommandOutcome::ok("v20.11.0"))
        .on("npm --version", CommandOutcome::ok("10.2.4"));
    let mut prompter = ScriptedPrompter::new(&[false]);

    let result = fx.run(&runner, &mut prompter);

    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.outcomes.len(), 5);
    assert!(fx.credential().exists());
    assert!(!fx.backup().exists());
    assert!(!fx.profile.host_config_path.exists());
    assert!(!runner.was_called("xdg-open"));
}

#[test]
fn auth_failure_skips_install_but_keeps_new_credentials() {
    let fx = Fixture::new();
    fs::write(fx.credential(), "registry=https://old.example/").unwrap();
    let runner = ScriptedRunner::new().on("npm whoami", CommandOutcome::failed(1, "E401"));
    let mut prompter = ScriptedPrompter::new(&[true]);

    let result = fx.run(&runner, &mut prompter);

    assert_eq!(result.exit_code(), 1);
    assert_eq!(result.halted_at, Some("auth"));
    assert!(!runner.was_called("npm install"));
    assert!(prompter.asked().is_empty());

    assert_eq!(
        fs::read_to_string(fx.backup()).unwrap(),
        "registry=https://old.example/"
    );
    let content = fs::read_to_string(fx.credential()).unwrap();
    assert!(content.contains("@mcnc-bizmob:registry=https://npm.pkg.github.com/"));
}

#[test]
fn install_failure_halts_before_guide() {
    let fx = Fixture::new();
    let runner = ScriptedRunner::new().on("npm install", CommandOutcome::failed(1, ""));
    let mut prompter = ScriptedPrompter::new(&[true]);

    let result = fx.run(&runner, &mut prompter);

    assert_eq!(result.halted_at, Some("install"));
    assert!(prompter.asked().is_empty());
    let install = result.outcome("install").unwrap();
    assert!(install.has_message("--verbose"));
}

#[test]
fn guide_problems_do_not_change_exit_code() {
    let fx = Fixture::new();
    let parent = fx.profile.host_config_path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::write(&fx.profile.host_config_path, "{}").unwrap();

    let runner = ScriptedRunner::new()
        .missing("xdg-open")
        .on("pkill", CommandOutcome::failed(1, ""));
    let mut prompter = ScriptedPrompter::new(&[true, true]);

    let result = fx.run(&runner, &mut prompter);

    assert_eq!(result.exit_code(), 0);
    assert!(result.outcome("host-config").unwrap().has_message("Failed to open"));
    // Host config file is only ever opened, never written
    assert_eq!(fs::read_to_string(&fx.profile.host_config_path).unwrap(), "{}");
}

#[test]
fn guide_only_pipeline_runs_single_stage() {
    let fx = Fixture::new();
    let runner = ScriptedRunner::new();
    let mut prompter = ScriptedPrompter::new(&[false]);
    let mut ctx = StageContext {
        config: &fx.config,
        profile: &fx.profile,
        runner: &runner,
        prompter: &mut prompter,
        today: fx.today,
    };

    let result = run_pipeline(&mut ctx, &[Stage::HostConfig]);

    assert!(result.succeeded());
    assert!(runner.calls().is_empty());
    assert!(!fx.credential().exists());
}
