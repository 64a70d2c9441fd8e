//! Resolved installer configuration
//!
//! Layering, later wins: built-in defaults, KDL settings file, then
//! environment variables and flags (clap merges those two).

pub mod settings;

use crate::constants::urls;
use crate::error::{InstallerError, Result};
use crate::project_identity;
use crate::utils::{paths, sanitize};
use settings::Settings;
use std::path::PathBuf;

/// Values supplied on the command line or through `MCNC_INSTALLER_*`
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub package: Option<String>,
    pub private_registry: Option<String>,
    pub public_registry: Option<String>,
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub editor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    /// Scoped package, e.g. `@mcnc-bizmob/mcnc-rag-mcp-server`
    pub package: String,
    /// `@mcnc-bizmob`
    pub scope: String,
    pub private_registry: String,
    pub public_registry: String,
    pub api_url: String,
    pub server_name: String,
    pub launch_command: String,
    pub token: String,
    /// Replaces the platform editor-open command when set
    pub editor: Option<String>,
}

impl InstallerConfig {
    /// Resolve every layer. Fails before anything touches the system.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::from_settings(&Self::layered_settings(overrides)?)
    }

    /// Same layering, but the registry token may be absent (guide only).
    pub fn load_without_token(overrides: &Overrides) -> Result<Self> {
        Self::resolve(&Self::layered_settings(overrides)?, false)
    }

    fn layered_settings(overrides: &Overrides) -> Result<Settings> {
        let (path, required) = match &overrides.config_path {
            Some(path) => (paths::expand_home(path)?, true),
            None => (paths::settings_file()?, false),
        };

        let mut settings = Settings::load(&path, required)?;
        settings.set_opt(settings::KEY_PACKAGE, overrides.package.as_ref())?;
        settings.set_opt(
            settings::KEY_PRIVATE_REGISTRY,
            overrides.private_registry.as_ref(),
        )?;
        settings.set_opt(
            settings::KEY_PUBLIC_REGISTRY,
            overrides.public_registry.as_ref(),
        )?;
        settings.set_opt(settings::KEY_API_URL, overrides.api_url.as_ref())?;
        settings.set_opt(settings::KEY_TOKEN, overrides.token.as_ref())?;
        settings.set_opt(settings::KEY_EDITOR, overrides.editor.as_ref())?;

        Ok(settings)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::resolve(settings, true)
    }

    fn resolve(settings: &Settings, require_token: bool) -> Result<Self> {
        let require = |key: &str| -> Result<String> {
            settings.get(key).map(str::to_string).ok_or_else(|| {
                InstallerError::ConfigError(format!("Setting '{}' cannot be empty", key))
            })
        };

        let package = require(settings::KEY_PACKAGE)?;
        let scope = sanitize::package_scope(&package)?.to_string();

        let private_registry = require(settings::KEY_PRIVATE_REGISTRY)?;
        sanitize::validate_url(settings::KEY_PRIVATE_REGISTRY, &private_registry)?;
        let public_registry = require(settings::KEY_PUBLIC_REGISTRY)?;
        sanitize::validate_url(settings::KEY_PUBLIC_REGISTRY, &public_registry)?;
        let api_url = require(settings::KEY_API_URL)?;
        sanitize::validate_url(settings::KEY_API_URL, &api_url)?;

        let token = match settings.get(settings::KEY_TOKEN) {
            Some(token) => {
                sanitize::validate_token(token)?;
                token
            }
            None if require_token => {
                return Err(InstallerError::ConfigError(format!(
                    "No registry token configured. Set {} or pass --token",
                    project_identity::env_key("TOKEN")
                )));
            }
            None => "",
        };

        Ok(Self {
            package,
            scope,
            private_registry: urls::with_trailing_slash(&private_registry),
            public_registry: urls::with_trailing_slash(&public_registry),
            api_url,
            server_name: require(settings::KEY_SERVER_NAME)?,
            launch_command: require(settings::KEY_LAUNCH_COMMAND)?,
            token: token.to_string(),
            editor: settings.get(settings::KEY_EDITOR).map(str::to_string),
        })
    }

    /// `@scope/name@latest`
    pub fn package_spec(&self) -> String {
        format!("{}@latest", self.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_token() -> Settings {
        let mut settings = Settings::default();
        settings
            .set(settings::KEY_TOKEN, "ghp_test".to_string())
            .unwrap();
        settings
    }

    #[test]
    fn defaults_plus_token_resolve() {
        let config = InstallerConfig::from_settings(&settings_with_token()).unwrap();
        assert_eq!(config.package, "@mcnc-bizmob/mcnc-rag-mcp-server");
        assert_eq!(config.scope, "@mcnc-bizmob");
        assert_eq!(config.private_registry, "https://npm.pkg.github.com/");
        assert_eq!(config.launch_command, "npx");
        assert_eq!(config.editor, None);
        assert_eq!(
            config.package_spec(),
            "@mcnc-bizmob/mcnc-rag-mcp-server@latest"
        );
    }

    #[test]
    fn missing_token_is_config_error() {
        let err = InstallerConfig::from_settings(&Settings::default()).unwrap_err();
        assert!(err.to_string().contains("MCNC_INSTALLER_TOKEN"));
    }

    #[test]
    fn guide_does_not_need_a_token() {
        let config = InstallerConfig::resolve(&Settings::default(), false).unwrap();
        assert!(config.token.is_empty());
    }

    #[test]
    fn registries_gain_trailing_slash() {
        let mut settings = settings_with_token();
        settings
            .set(
                settings::KEY_PRIVATE_REGISTRY,
                "https://npm.example.com".to_string(),
            )
            .unwrap();
        let config = InstallerConfig::from_settings(&settings).unwrap();
        assert_eq!(config.private_registry, "https://npm.example.com/");
    }

    #[test]
    fn unscoped_package_is_rejected() {
        let mut settings = settings_with_token();
        settings
            .set(settings::KEY_PACKAGE, "left-pad".to_string())
            .unwrap();
        assert!(InstallerConfig::from_settings(&settings).is_err());
    }

    #[test]
    fn bad_api_url_is_rejected() {
        let mut settings = settings_with_token();
        settings
            .set(settings::KEY_API_URL, "not a url".to_string())
            .unwrap();
        let err = InstallerConfig::from_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("api-url"));
    }

    #[test]
    fn overrides_win_over_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("installer.kdl");
        std::fs::write(&path, "package \"@file/pkg\"\ntoken \"from-file\"\n").unwrap();

        let overrides = Overrides {
            config_path: Some(path),
            token: Some("from-flag".to_string()),
            ..Overrides::default()
        };
        let config = InstallerConfig::load(&overrides).unwrap();
        assert_eq!(config.package, "@file/pkg");
        assert_eq!(config.token, "from-flag");
    }

    #[test]
    fn explicit_missing_config_file_fails() {
        let overrides = Overrides {
            config_path: Some(PathBuf::from("/nonexistent/installer.kdl")),
            token: Some("t".to_string()),
            ..Overrides::default()
        };
        assert!(InstallerConfig::load(&overrides).is_err());
    }
}
