//! Registry credential file (`~/.npmrc`)
//!
//! The file is overwritten wholesale. Any previous content is copied to
//! `<path>.backup.<YYYY-MM-DD>` first; a failed backup is only a warning.
//! The new content lands in `<path>.tmp` and is renamed over the target, so
//! an interrupted write never leaves a truncated credential file.

use crate::config::InstallerConfig;
use crate::constants::urls;
use crate::core::InstallOutcome;
use crate::project_identity;
use crate::utils::paths;
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const STAGE: &str = "registry";

/// Scope line, auth line, public fallback.
pub fn credential_content(config: &InstallerConfig) -> String {
    format!(
        "# Private registry for {scope} (written by {bin})\n\
         {scope}:registry={private}\n\
         //{host}:_authToken={token}\n\
         \n\
         # Default registry\n\
         registry={public}\n",
        scope = config.scope,
        bin = project_identity::BINARY_NAME,
        private = config.private_registry,
        host = urls::registry_host_path(&config.private_registry),
        token = config.token,
        public = config.public_registry,
    )
}

pub fn backup_path(path: &Path, today: NaiveDate) -> PathBuf {
    paths::sibling_with_suffix(path, &format!(".backup.{}", today.format("%Y-%m-%d")))
}

pub fn configure(path: &Path, config: &InstallerConfig, today: NaiveDate) -> InstallOutcome {
    let mut outcome = InstallOutcome::new(STAGE);

    if path.exists() {
        backup_existing(path, today, &mut outcome);
    }

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        outcome.fail(format!("Failed to create {}: {}", parent.display(), e));
        return outcome;
    }

    if let Err(e) = write_replacing(path, &credential_content(config)) {
        outcome.fail(format!("Failed to write {}: {}", path.display(), e));
        return outcome;
    }

    restrict_permissions(path, &mut outcome);
    outcome.success(format!(
        "Registry configured: {} -> {}",
        config.scope, config.private_registry
    ));
    outcome
}

pub fn staging_path(path: &Path) -> PathBuf {
    paths::sibling_with_suffix(path, ".tmp")
}

/// Write a sibling then rename it over `path`.
fn write_replacing(path: &Path, content: &str) -> io::Result<()> {
    let staging = staging_path(path);
    fs::write(&staging, content)?;
    fs::rename(&staging, path).inspect_err(|_| {
        let _ = fs::remove_file(&staging);
    })
}

/// Copy bytes as-is. Never fails the stage.
fn backup_existing(path: &Path, today: NaiveDate, outcome: &mut InstallOutcome) {
    let backup = backup_path(path, today);

    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            outcome.warning(format!(
                "Could not read existing {} for backup: {}",
                path.display(),
                e
            ));
            return;
        }
    };

    match fs::write(&backup, content) {
        Ok(()) => outcome.info(format!(
            "Backed up existing {} to {}",
            path.display(),
            backup.display()
        )),
        Err(e) => outcome.warning(format!(
            "Failed to back up existing {} to {}: {}",
            path.display(),
            backup.display(),
            e
        )),
    }
}

/// The file holds a token: owner read/write only.
#[cfg(unix)]
fn restrict_permissions(path: &Path, outcome: &mut InstallOutcome) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        outcome.warning(format!(
            "Could not restrict permissions on {}: {}",
            path.display(),
            e
        ));
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path, _outcome: &mut InstallOutcome) {}
