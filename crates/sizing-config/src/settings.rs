//! Configuration structures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sizing_calc::{CalculatorState, ComparisonAggregator, PositionSizer};
use sizing_core::{Grade, GradeTable, MultiplierTable, SizingMethod, SizingResult, TradeDistribution};
use tracing::warn;

/// Largest tolerated gap between a configured EV and the EV implied by
/// win rate and reward/risk.
const EV_TOLERANCE: Decimal = dec!(0.01);

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calculator: CalculatorSettings,
    #[serde(default)]
    pub grades: GradeTable,
    #[serde(default)]
    pub multipliers: MultiplierTable,
    #[serde(default)]
    pub distribution: TradeDistribution,
}

impl AppConfig {
    /// Check every table and the calculator defaults.
    ///
    /// Inconsistent EVs are only warned about; the constants are
    /// illustrative.
    pub fn validate(&self) -> SizingResult<()> {
        self.grades.validate()?;
        self.multipliers.validate()?;
        self.distribution.validate()?;
        self.calculator.to_state()?;

        for (grade, profile) in self.grades.iter() {
            let implied = profile.implied_ev();
            let consistent = implied
                .checked_sub(profile.ev)
                .is_some_and(|gap| gap.abs() <= EV_TOLERANCE);
            if !consistent {
                warn!(
                    %grade,
                    configured = %profile.ev,
                    %implied,
                    "configured EV differs from win rate and reward/risk"
                );
            }
        }
        Ok(())
    }

    /// Sizer over the configured multipliers.
    pub fn sizer(&self) -> PositionSizer {
        PositionSizer::new(self.multipliers.clone())
    }

    /// Comparison over the configured tables.
    pub fn aggregator(&self) -> ComparisonAggregator {
        ComparisonAggregator::new(self.sizer(), self.grades.clone(), self.distribution.clone())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// General app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "position-sizing".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Initial calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    pub account_value: Decimal,
    pub risk_percent: Decimal,
    pub method: SizingMethod,
    pub grade: Grade,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            account_value: dec!(100000),
            risk_percent: dec!(1),
            method: SizingMethod::Exponential,
            grade: Grade::A,
        }
    }
}

impl CalculatorSettings {
    /// Validated calculator state from these settings.
    pub fn to_state(&self) -> SizingResult<CalculatorState> {
        CalculatorState::new(self.account_value, self.risk_percent, self.method, self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizing_core::SizingError;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.calculator.to_state().unwrap(), CalculatorState::default());
    }

    #[test]
    fn test_invalid_calculator_defaults() {
        let mut config = AppConfig::default();
        config.calculator.risk_percent = dec!(5);

        assert!(matches!(
            config.validate(),
            Err(SizingError::RiskPercentOutOfRange { .. })
        ));
    }

    #[test]
    fn test_inconsistent_ev_is_not_fatal() {
        let mut config = AppConfig::default();
        config.grades.0.b.ev = dec!(2);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configured_tables_flow_into_calculation() {
        let mut config = AppConfig::default();
        config.multipliers.0.equal.a = dec!(2);

        let size = config
            .sizer()
            .compute_size(dec!(100000), dec!(1), SizingMethod::Equal, Grade::A)
            .unwrap();
        assert_eq!(size, dec!(2000));

        let totals = config.aggregator().compute(dec!(100000), dec!(1)).unwrap().totals();
        // one extra unit of risk on two A-trades at EV 3.5
        assert_eq!(totals.equal, dec!(12000));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let rendered = config.to_toml().unwrap();

        assert!(rendered.contains("[calculator]"));
        assert!(rendered.contains("method = \"exponential\""));

        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
