//! README locator CLI
//!
//! Finds the README that represents a directory of a git repository.

mod cli;
mod commands;
mod config;
mod error;
mod locale;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::FindOptions;
use config::{Config, Settings};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    execute_command(cli.command, &config)
}

/// Logs go to stderr; `--verbose` forces debug, otherwise `RUST_LOG` applies.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Find {
            repo,
            rev,
            path,
            ranking,
            json,
            content,
        } => {
            let settings = Settings::resolve(&ranking, config);
            let options = FindOptions {
                repo,
                rev,
                path,
                json,
                content,
            };
            commands::run_find(&options, &settings)
        }
        Commands::Extensions { ranking } => {
            let settings = Settings::resolve(&ranking, config);
            commands::run_extensions(&settings)
        }
    }
}
