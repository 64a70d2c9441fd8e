use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod prompt;

pub use prompt::{FixedPrompter, Prompter, ScriptedPrompter, TerminalPrompter};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Apply the color choice. `NO_COLOR` wins over `auto`.
pub fn init_colors(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                colored::control::set_override(false);
            }
        }
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn header(title: &str) {
    if is_quiet() {
        return;
    }
    println!("\n{}", title.bold().underline());
}

/// Stage heading, e.g. `[2/5] Registry setup`
pub fn step(index: usize, total: usize, title: &str) {
    if is_quiet() {
        return;
    }
    println!(
        "\n{} {}",
        format!("[{}/{}]", index, total).yellow().bold(),
        title.yellow()
    );
}

pub fn success(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn info(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "ℹ".blue().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Debug-level line, shown only with `--verbose`
pub fn verbose(msg: &str) {
    if !is_verbose() {
        return;
    }
    println!("{} {}", "·".bright_black(), msg.dimmed());
}

pub fn separator() {
    if is_quiet() {
        return;
    }
    println!("{}", "─".repeat(60).bright_black());
}

pub fn keyval(key: &str, val: &str) {
    if is_quiet() {
        return;
    }
    println!("{}: {}", key.bold(), val);
}

pub fn indent(msg: &str, level: usize) {
    if is_quiet() {
        return;
    }
    let spaces = " ".repeat(level * 2);
    println!("{}{}", spaces, msg);
}

/// Print a block verbatim (JSON snippets, captured command output).
///
/// Unaffected by quiet mode: the block is content the user asked for.
pub fn raw(block: &str) {
    println!("{}", block);
}
