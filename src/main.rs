//! Clipcheck CLI - Clipping Detection
//!
//! Command-line front end for the Clipcheck analyzer.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use clipcheck::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Clipcheck v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd)?,
        None => {
            println!("Clipcheck v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
        }
    }

    Ok(())
}

fn handle_command(cmd: Commands) -> clipcheck::Result<()> {
    match cmd {
        Commands::Analyze {
            file,
            segment_length,
            rule,
            json,
        } => commands::analyze(&file, segment_length, rule, json),
        Commands::Scan { dir, rule, json } => commands::scan(&dir, rule, json),
        Commands::Calibrate => commands::calibrate(),
    }
}
