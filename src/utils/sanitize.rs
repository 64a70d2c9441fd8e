//! Input sanitization utilities for security
//!
//! Values from settings, environment, and flags end up in subprocess
//! argv and in the credential file, so they are validated up front.

use crate::error::{InstallerError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Safe characters for npm package names
/// Allows: alphanumeric, dash, underscore, dot, at sign, slash (for scoped packages)
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._/-]+$").expect("Invalid regex pattern"));

/// `@scope/name`
static SCOPED_PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@[a-z0-9][a-z0-9._-]*/[a-z0-9][a-z0-9._-]*$").expect("Invalid regex pattern")
});

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&<>\\'"\n\r\t ]"#).expect("Invalid regex pattern"));

/// Validate a package name is safe to hand to the package manager
///
/// # Security
/// Package names like `foo; rm -rf /` are rejected even though the runner
/// never goes through a shell: the name is also echoed as a manual command.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(InstallerError::ConfigError(
            "Package name cannot be empty".to_string(),
        ));
    }

    if SHELL_DANGEROUS.is_match(name) {
        return Err(InstallerError::ConfigError(format!(
            "Package name contains unsafe characters: {}",
            name
        )));
    }

    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(InstallerError::ConfigError(format!(
            "Package name contains invalid characters: {}",
            name
        )));
    }

    if name.len() > 214 {
        return Err(InstallerError::ConfigError(format!(
            "Package name too long (max 214 chars): {}...",
            &name[..50]
        )));
    }

    if name.contains("..") {
        return Err(InstallerError::ConfigError(format!(
            "Package name cannot contain path traversal: {}",
            name
        )));
    }

    Ok(())
}

/// Validate and split a scoped package name into its namespace.
///
/// `@mcnc-bizmob/mcnc-rag-mcp-server` -> `@mcnc-bizmob`
pub fn package_scope(name: &str) -> Result<&str> {
    validate_package_name(name)?;

    if !SCOPED_PACKAGE_NAME.is_match(name) {
        return Err(InstallerError::ConfigError(format!(
            "Package '{}' must be scoped (@scope/name) to route it to the private registry",
            name
        )));
    }

    name.split_once('/')
        .map(|(scope, _)| scope)
        .ok_or_else(|| InstallerError::ConfigError(format!("Invalid scoped package: {}", name)))
}

/// Registry and API URLs must be plain http(s) without whitespace.
pub fn validate_url(key: &str, url: &str) -> Result<()> {
    let has_scheme = url.starts_with("https://") || url.starts_with("http://");
    if !has_scheme || url.len() <= "https://".len() || url.chars().any(char::is_whitespace) {
        return Err(InstallerError::ConfigError(format!(
            "Invalid URL for '{}': '{}' (expected http:// or https://)",
            key, url
        )));
    }
    Ok(())
}

/// Token goes verbatim into a line-oriented file.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(InstallerError::ConfigError(
            "Registry token cannot be empty".to_string(),
        ));
    }
    if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InstallerError::ConfigError(
            "Registry token must not contain whitespace or control characters".to_string(),
        ));
    }
    Ok(())
}

/// Hide all but the first few characters of a secret for display.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}
