// Common constants used throughout the codebase

/// Package installed by default (scoped to the private registry namespace)
pub const DEFAULT_PACKAGE: &str = "@mcnc-bizmob/mcnc-rag-mcp-server";

/// Registry credential file, relative to the home directory
pub const CREDENTIAL_FILE_NAME: &str = ".npmrc";

/// Host desktop application
pub const HOST_APP_NAME: &str = "Claude Desktop";

/// Host application config file name
pub const HOST_CONFIG_FILE_NAME: &str = "claude_desktop_config.json";

/// Section of the host config that lists launchable servers
pub const HOST_CONFIG_SECTION: &str = "mcpServers";

/// Server identifier written into the host config snippet
pub const DEFAULT_SERVER_NAME: &str = "mcnc-rag";

/// Command the host application uses to launch the server
pub const DEFAULT_LAUNCH_COMMAND: &str = "npx";
