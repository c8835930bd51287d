//! Validate configuration command.

use anyhow::Result;
use sizing_config::AppConfig;
use std::path::Path;

use crate::cli::ValidateArgs;

pub fn run(args: ValidateArgs, config: &AppConfig, config_path: Option<&Path>) -> Result<()> {
    match config_path {
        Some(path) => println!("Validating configuration: {:?}", path),
        None => println!("Validating built-in configuration"),
    }

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Account value: {}", config.calculator.account_value);
    println!("Base risk: {}%", config.calculator.risk_percent);
    println!("Sizing method: {}", config.calculator.method);
    println!("Grade: {}", config.calculator.grade);
    println!("Trades per year: {}", config.distribution.total());

    if args.show {
        println!();
        println!("{}", config.to_toml()?);
    }

    Ok(())
}
