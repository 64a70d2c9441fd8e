//! Settings Module
//!
//! Raw key/value settings for the installer: built-in defaults, then an
//! optional KDL file, then explicit overrides (environment and flags).

use crate::constants::{self, urls};
use crate::error::{InstallerError, Result};
use kdl::{KdlDocument, KdlNode};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const KEY_PACKAGE: &str = "package";
pub const KEY_PRIVATE_REGISTRY: &str = "private-registry";
pub const KEY_PUBLIC_REGISTRY: &str = "public-registry";
pub const KEY_API_URL: &str = "api-url";
pub const KEY_SERVER_NAME: &str = "server-name";
pub const KEY_LAUNCH_COMMAND: &str = "launch-command";
pub const KEY_TOKEN: &str = "token";
pub const KEY_EDITOR: &str = "editor";

pub const VALID_KEYS: &[&str] = &[
    KEY_PACKAGE,
    KEY_PRIVATE_REGISTRY,
    KEY_PUBLIC_REGISTRY,
    KEY_API_URL,
    KEY_SERVER_NAME,
    KEY_LAUNCH_COMMAND,
    KEY_TOKEN,
    KEY_EDITOR,
];

/// Settings manager
#[derive(Debug, Clone)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: Self::defaults(),
        }
    }
}

impl Settings {
    /// Defaults merged with a KDL settings file.
    ///
    /// A missing file is fine unless `required` is set (explicit `--config`).
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        let mut settings = Self::default();

        if !path.exists() {
            if required {
                return Err(InstallerError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Ok(settings);
        }

        let content = fs::read_to_string(path).map_err(|e| InstallerError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        for (key, value) in parse_settings(&content, &path.display().to_string())? {
            settings.values.insert(key, value);
        }

        Ok(settings)
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Set a setting value
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        validate_key(key)?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Apply an override when one was given
    pub fn set_opt(&mut self, key: &str, value: Option<&String>) -> Result<()> {
        match value {
            Some(v) => self.set(key, v.clone()),
            None => Ok(()),
        }
    }

    /// Get default settings
    fn defaults() -> BTreeMap<String, String> {
        let mut defaults = BTreeMap::new();
        defaults.insert(KEY_PACKAGE.to_string(), constants::DEFAULT_PACKAGE.to_string());
        defaults.insert(
            KEY_PRIVATE_REGISTRY.to_string(),
            urls::DEFAULT_PRIVATE_REGISTRY.to_string(),
        );
        defaults.insert(
            KEY_PUBLIC_REGISTRY.to_string(),
            urls::DEFAULT_PUBLIC_REGISTRY.to_string(),
        );
        defaults.insert(KEY_API_URL.to_string(), urls::DEFAULT_API_URL.to_string());
        defaults.insert(
            KEY_SERVER_NAME.to_string(),
            constants::DEFAULT_SERVER_NAME.to_string(),
        );
        defaults.insert(
            KEY_LAUNCH_COMMAND.to_string(),
            constants::DEFAULT_LAUNCH_COMMAND.to_string(),
        );
        defaults.insert(KEY_TOKEN.to_string(), String::new()); // Must be injected
        defaults.insert(KEY_EDITOR.to_string(), String::new()); // Empty = platform default
        defaults
    }
}

fn validate_key(key: &str) -> Result<()> {
    if !VALID_KEYS.contains(&key) {
        return Err(InstallerError::ConfigError(format!(
            "Unknown setting: '{}'. Valid settings: {}",
            key,
            VALID_KEYS.join(", ")
        )));
    }
    Ok(())
}

/// Parse `settings { key "value" }` or top-level `key "value"` nodes.
fn parse_settings(content: &str, file: &str) -> Result<BTreeMap<String, String>> {
    let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        let err_msg = e.to_string();
        let hint = if err_msg.contains("unexpected end of file") {
            "\nHint: You might be missing a closing brace '}'."
        } else if err_msg.contains("expected") {
            "\nHint: Settings look like: package \"@scope/name\""
        } else {
            ""
        };
        InstallerError::KdlError {
            file: file.to_string(),
            message: format!("{}{}", err_msg, hint),
        }
    })?;

    let mut values = BTreeMap::new();

    for node in doc.nodes() {
        if node.name().value() == "settings" {
            if let Some(children) = node.children() {
                for child in children.nodes() {
                    insert_node(child, file, &mut values)?;
                }
            }
            continue;
        }
        insert_node(node, file, &mut values)?;
    }

    Ok(values)
}

fn insert_node(node: &KdlNode, file: &str, values: &mut BTreeMap<String, String>) -> Result<()> {
    let key = node.name().value();
    validate_key(key)?;

    let value = node
        .entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .and_then(|entry| entry.value().as_string())
        .ok_or_else(|| InstallerError::KdlError {
            file: file.to_string(),
            message: format!("Setting '{}' needs a string value, e.g. {} \"...\"", key, key),
        })?;

    values.insert(key.to_string(), value.to_string());
    Ok(())
}
