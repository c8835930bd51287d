//! Sizing method comparison command implementation.

use anyhow::{Context, Result};
use sizing_calc::{CalculatorState, ComparisonReport};
use sizing_config::AppConfig;
use tracing::info;

use crate::cli::{CompareArgs, CompareFormat};

pub fn run(args: CompareArgs, config: &AppConfig) -> Result<()> {
    let defaults = &config.calculator;
    // Reuse the calculator validation; method and grade do not matter here.
    let state = CalculatorState::new(
        args.account.unwrap_or(defaults.account_value),
        args.risk.unwrap_or(defaults.risk_percent),
        defaults.method,
        defaults.grade,
    )
    .context("Invalid calculator input")?;

    let comparison = config
        .aggregator()
        .compute(state.account_value(), state.risk_percent())
        .context("Failed to compare sizing methods")?;
    info!(
        "Compared {} methods over {} trades",
        comparison.iter().count(),
        comparison.distribution.total()
    );
    let report = ComparisonReport::new(comparison);

    let rendered = match args.output {
        CompareFormat::Text => report.summary(),
        CompareFormat::Json => report.to_json()?,
        CompareFormat::Csv => report.to_csv()?,
    };
    println!("{}", rendered);

    // Save if requested
    if let Some(save_path) = &args.save {
        std::fs::write(save_path, &rendered)
            .with_context(|| format!("Failed to write {}", save_path.display()))?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}
