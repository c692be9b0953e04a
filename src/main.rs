use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::Paths;
use pomo::logging::{init_logging, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let format = cli.output;

    let config = commands::load_config(cli.config.as_deref(), &paths, &cli.timer.overrides())?;

    let output = match cli.command {
        None | Some(Commands::Start) => {
            // The TUI owns the terminal, so logs go to a file
            paths.ensure_dirs()?;
            init_logging(cli.verbose, &LogTarget::File(paths.log_file.clone()))?;
            commands::start(&config, cli.timer.title, format).context("timer session failed")?
        }
        Some(Commands::Config) => {
            init_logging(cli.verbose, &LogTarget::Stderr)?;
            commands::config(&config, format)?
        }
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
