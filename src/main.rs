//! Position sizing calculator CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use sizing_config::load_config;
use sizing_monitor::setup_logging;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })?;

    // Setup logging
    let log_level = cli
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json_logs = cli.json_logs || config.logging.is_json();
    // The TUI owns the terminal, so it only logs to the configured file
    let console_logs = !cli.command.owns_terminal();
    let _guard = setup_logging(
        &log_level,
        json_logs,
        console_logs,
        config.logging.file.as_deref().map(Path::new),
    );

    if !cli.command.reports_validation() {
        config.validate().context("Invalid configuration")?;
    }

    // Execute command
    match cli.command {
        Commands::Size(args) => cli::commands::size::run(args, &config),
        Commands::Compare(args) => cli::commands::compare::run(args, &config),
        Commands::Grades(args) => cli::commands::grades::run(args, &config),
        Commands::Guide(args) => cli::commands::guide::run(args),
        Commands::Tui => cli::commands::tui::run(&config),
        Commands::ValidateConfig(args) => {
            cli::commands::validate::run(args, &config, cli.config.as_deref())
        }
    }
}
