//! Position size command implementation.

use anyhow::{Context, Result};
use sizing_calc::{CalculatorState, SizeReport};
use sizing_config::AppConfig;
use tracing::info;

use crate::cli::{ReportFormat, SizeArgs};

pub fn run(args: SizeArgs, config: &AppConfig) -> Result<()> {
    let defaults = &config.calculator;
    let state = CalculatorState::new(
        args.account.unwrap_or(defaults.account_value),
        args.risk.unwrap_or(defaults.risk_percent),
        args.method.unwrap_or(defaults.method),
        args.grade.unwrap_or(defaults.grade),
    )
    .context("Invalid calculator input")?;

    let recommendation = config
        .sizer()
        .recommend(&state)
        .context("Failed to size position")?;
    info!(
        "Sizing {}-trade with {} method: risk {}",
        state.grade(),
        state.method(),
        recommendation.risk_amount
    );

    let report = SizeReport::new(
        state.account_value(),
        state.risk_percent(),
        recommendation,
        &config.grades,
    );

    match args.output {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => println!("{}", report.summary()),
    }

    Ok(())
}
