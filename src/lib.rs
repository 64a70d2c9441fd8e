pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod project_identity;
pub mod runner;
pub mod stages;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run the installer CLI entrypoint.
pub fn run_cli() {
    // 1. Parse (clap exits on --help / usage errors)
    let args = cli::args::Cli::parse();
    ui::init_colors(args.global.color);
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    // 2. Signal Handling (a blocked subprocess or prompt gets the signal too)
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(1);
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 3. Run
    match cli::dispatcher::dispatch(&args) {
        Ok(code) => exit(code),
        Err(e) => {
            ui::error(&format!("{}", e));
            exit(1);
        }
    }
}
