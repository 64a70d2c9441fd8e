use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("KDL parse error in '{file}': {message}")]
    KdlError { file: String, message: String },

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Config file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Program is not on PATH
    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    /// Home or platform directory could not be determined
    #[error("Path error: {0}")]
    PathError(String),
}

pub type Result<T> = std::result::Result<T, InstallerError>;
