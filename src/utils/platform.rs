use crate::error::{InstallerError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// OS identifier of the running binary (`windows`, `macos`, `linux`, ...)
pub fn current_os_tag() -> &'static str {
    std::env::consts::OS
}

/// Locate a program on PATH.
///
/// On Windows this also resolves `npm` to `npm.cmd` through `PATHEXT`.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|e| {
        InstallerError::DependencyMissing(format!("'{}' not found on PATH: {}", program, e))
    })
}

/// Build a direct program invocation (no shell in between).
pub fn build_program_command(program: &Path, args: &[String]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd
}

/// Render argv the way a user would type it in a POSIX shell.
pub fn display_command(program: &str, args: &[String]) -> String {
    let words = std::iter::once(program).chain(args.iter().map(String::as_str));
    shlex::try_join(words).unwrap_or_else(|_| {
        let mut joined = program.to_string();
        for arg in args {
            joined.push(' ');
            joined.push_str(arg);
        }
        joined
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_program_keeps_args() {
        let cmd = build_program_command(Path::new("echo"), &["ok".to_string()]);
        let debug = format!("{:?}", cmd);
        assert!(debug.contains("echo"));
        assert!(debug.contains("ok"));
    }

    #[test]
    fn current_os_tag_is_not_empty() {
        assert!(!current_os_tag().is_empty());
    }

    #[test]
    fn missing_program_is_dependency_error() {
        let err = resolve_program("definitely-not-a-real-binary-xyz").unwrap_err();
        assert!(matches!(err, InstallerError::DependencyMissing(_)));
    }

    #[test]
    fn display_quotes_paths_with_spaces() {
        let shown = display_command(
            "open",
            &[
                "-a".to_string(),
                "TextEdit".to_string(),
                "/Users/me/Library/Application Support/Claude/x.json".to_string(),
            ],
        );
        assert!(shown.starts_with("open -a TextEdit "));
        assert!(shown.contains('\''));
        assert_eq!(shlex::split(&shown).unwrap().len(), 4);
    }

    #[test]
    fn display_round_trips_through_shell_split() {
        let shown = display_command(
            "npm",
            &["install".to_string(), "-g".to_string(), "@scope/pkg@latest".to_string()],
        );
        assert!(shown.starts_with("npm install -g "));
        assert_eq!(
            shlex::split(&shown).unwrap(),
            ["npm", "install", "-g", "@scope/pkg@latest"]
        );
    }
}
