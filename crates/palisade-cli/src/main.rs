//! Palisade CLI - Command-line interface for the content sanitization and
//! provenance pipeline.

use clap::Parser;
use palisade_cli::commands;
use palisade_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from the explicit path, or the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Sanitize(args) => {
            commands::execute_sanitize(args, &config, &formatter)?;
        }
        Command::Classify(args) => {
            commands::execute_classify(args, &config, &formatter)?;
        }
        Command::Check(args) => {
            let safe = commands::execute_check(args, &config, &formatter)?;
            if !safe {
                std::process::exit(1);
            }
        }
        Command::Freshness(args) => {
            commands::execute_freshness(args, &config, &formatter)?;
        }
        Command::Rank(args) => {
            commands::execute_rank(args, &config, &formatter)?;
        }
        Command::Assemble(args) => {
            commands::execute_assemble(args)?;
        }
        Command::Audit(args) => {
            commands::execute_audit(args, &formatter)?;
        }
    }

    Ok(())
}
