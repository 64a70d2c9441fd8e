use crate::config::Overrides;
use crate::ui::ColorChoice;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mcnc-installer",
    about = "Installs the MCNC RAG MCP server and wires it into Claude Desktop",
    long_about = "Bootstrap installer for the MCNC RAG MCP server.\n\
                  Checks Node.js, configures the private npm registry, verifies \
                  authentication, installs the package, and guides Claude Desktop setup.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(flatten)]
    pub settings: SettingsFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Verbose output (echo every command before it runs)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode (warnings and errors only)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Answer yes to every prompt
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Answer no to every prompt
    #[arg(long, global = true, conflicts_with = "yes")]
    pub non_interactive: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,
}

#[derive(Args, Debug)]
pub struct SettingsFlags {
    /// Settings file (KDL). Defaults to the per-user config directory
    #[arg(
        long,
        value_name = "PATH",
        env = "MCNC_INSTALLER_CONFIG",
        global = true,
        help_heading = "Settings",
    )]
    pub config: Option<PathBuf>,

    /// Read token for the private registry
    #[arg(
        long,
        env = "MCNC_INSTALLER_TOKEN",
        hide_env_values = true,
        global = true,
        help_heading = "Settings",
    )]
    pub token: Option<String>,

    /// Scoped package to install
    #[arg(
        long,
        value_name = "@SCOPE/NAME",
        env = "MCNC_INSTALLER_PACKAGE",
        global = true,
        help_heading = "Settings",
    )]
    pub package: Option<String>,

    /// Private registry URL
    #[arg(
        long,
        value_name = "URL",
        env = "MCNC_INSTALLER_PRIVATE_REGISTRY",
        global = true,
        help_heading = "Settings",
    )]
    pub private_registry: Option<String>,

    /// Public registry URL for unscoped packages
    #[arg(
        long,
        value_name = "URL",
        env = "MCNC_INSTALLER_PUBLIC_REGISTRY",
        global = true,
        help_heading = "Settings",
    )]
    pub public_registry: Option<String>,

    /// API base URL written into the Claude Desktop snippet
    #[arg(
        long,
        value_name = "URL",
        env = "MCNC_INSTALLER_API_URL",
        global = true,
        help_heading = "Settings",
    )]
    pub api_url: Option<String>,

    /// Editor used to open the Claude Desktop config (e.g. "code -w")
    #[arg(long, env = "MCNC_INSTALLER_EDITOR", global = true, help_heading = "Settings")]
    pub editor: Option<String>,
}

impl SettingsFlags {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            package: self.package.clone(),
            private_registry: self.private_registry.clone(),
            public_registry: self.public_registry.clone(),
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            editor: self.editor.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the full installation (default)
    Install,

    /// Only show the Claude Desktop setup guide
    Guide,
}

#[cfg(test)]
mod tests;
