//! Interactive calculator command.

use anyhow::{Context, Result};
use sizing_config::AppConfig;
use sizing_monitor::{Dashboard, DashboardState};
use tracing::info;

pub fn run(config: &AppConfig) -> Result<()> {
    let calculator = config
        .calculator
        .to_state()
        .context("Invalid calculator defaults in configuration")?;

    let dashboard = Dashboard::new(config.aggregator(), 250);
    let state = dashboard
        .run(DashboardState::new(calculator))
        .context("Terminal UI failed")?;

    info!(
        "Last input: account {}, risk {}%, {} sizing, {}-trade",
        state.calculator.account_value(),
        state.calculator.risk_percent(),
        state.calculator.method(),
        state.calculator.grade()
    );
    Ok(())
}
