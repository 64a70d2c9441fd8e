use crate::error::{InstallerError, Result};
use crate::project_identity;
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

pub fn home_dir() -> Result<PathBuf> {
    let user_dirs = UserDirs::new().ok_or_else(|| {
        InstallerError::PathError("Could not determine user home directory".to_string())
    })?;
    Ok(user_dirs.home_dir().to_path_buf())
}

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home_dir()?;

    if path_str == "~" {
        return Ok(home);
    }

    let stripped = path_str.strip_prefix("~/").ok_or_else(|| {
        InstallerError::PathError(format!("Invalid path format: {}", path_str))
    })?;

    Ok(home.join(stripped))
}

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(
        project_identity::PROJECT_QUALIFIER,
        project_identity::PROJECT_ORG,
        project_identity::CONFIG_DIR_NAME,
    )
    .ok_or_else(|| {
        InstallerError::PathError("Could not determine config directory".to_string())
    })?;
    Ok(proj.config_dir().to_path_buf())
}

/// Default location of the optional KDL settings file
pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(project_identity::SETTINGS_FILE_NAME))
}

/// `<original>.backup.<suffix>` next to the original file
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
