//! Platform resolution
//!
//! Maps an OS identifier to the paths and commands every stage needs.
//! Never fails: anything that is not Windows or macOS gets the Unix layout.

use crate::constants;
use crate::error::{InstallerError, Result};
use crate::runner::CommandSpec;
use crate::utils::{paths, platform};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsKind {
    Windows,
    MacOs,
    /// Linux, BSDs, and anything unrecognized
    Unix,
}

impl OsKind {
    /// Accepts Rust (`windows`, `macos`) and Node-style (`win32`, `darwin`) names.
    pub fn from_identifier(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            _ => Self::Unix,
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Unix => write!(f, "unix"),
        }
    }
}

/// Derived once at startup, read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub os: OsKind,
    /// Host application's JSON config
    pub host_config_path: PathBuf,
    /// Registry credential file (`~/.npmrc` everywhere)
    pub credential_path: PathBuf,
    /// Opens a file in a text editor; the path is appended as the last arg
    pub editor_open: CommandSpec,
    /// Terminates the host application
    pub process_kill: CommandSpec,
}

impl PlatformProfile {
    pub fn resolve(os_id: &str, home: &Path) -> Self {
        let os = OsKind::from_identifier(os_id);

        let host_config_dir = match os {
            OsKind::Windows => home.join("AppData").join("Roaming").join("Claude"),
            OsKind::MacOs => home
                .join("Library")
                .join("Application Support")
                .join("Claude"),
            OsKind::Unix => home.join(".config").join("Claude"),
        };

        let (editor_open, process_kill) = match os {
            OsKind::Windows => (
                // `start` is a cmd builtin; the empty string is the window title
                CommandSpec::new("cmd", ["/C", "start", "", "notepad"]),
                CommandSpec::new("taskkill", ["/F", "/IM", "Claude.exe"]),
            ),
            OsKind::MacOs => (
                CommandSpec::new("open", ["-a", "TextEdit"]),
                CommandSpec::new("pkill", ["-f", "Claude"]),
            ),
            OsKind::Unix => (
                CommandSpec::new("xdg-open", Vec::<String>::new()),
                CommandSpec::new("pkill", ["-f", "claude"]),
            ),
        };

        Self {
            os,
            host_config_path: host_config_dir.join(constants::HOST_CONFIG_FILE_NAME),
            credential_path: home.join(constants::CREDENTIAL_FILE_NAME),
            editor_open,
            process_kill,
        }
    }

    /// Profile for the running machine
    pub fn detect() -> Result<Self> {
        let home = paths::home_dir()?;
        Ok(Self::resolve(platform::current_os_tag(), &home))
    }

    /// Command that opens `path`, honoring a configured editor such as `code -w`.
    pub fn editor_command(&self, path: &Path, editor: Option<&str>) -> Result<CommandSpec> {
        let base = match editor {
            Some(editor) => {
                let words = shlex::split(editor)
                    .filter(|w| !w.is_empty())
                    .ok_or_else(|| {
                        InstallerError::ConfigError(format!(
                            "Cannot parse editor command: {}",
                            editor
                        ))
                    })?;
                CommandSpec::new(&words[0], words[1..].iter().cloned())
            }
            None => self.editor_open.clone(),
        };
        Ok(base.with_arg(path.to_string_lossy()))
    }
}
