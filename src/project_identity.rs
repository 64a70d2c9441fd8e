//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const DISPLAY_NAME: &str = "MCNC RAG MCP Server";
pub const BINARY_NAME: &str = "mcnc-installer";
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORG: &str = "mcnc";
pub const CONFIG_DIR_NAME: &str = "mcnc-installer";
pub const SETTINGS_FILE_NAME: &str = "installer.kdl";
pub const ENV_PREFIX: &str = "MCNC_INSTALLER";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_uses_prefix() {
        assert_eq!(env_key("TOKEN"), "MCNC_INSTALLER_TOKEN");
    }
}
