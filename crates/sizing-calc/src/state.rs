//! Calculator input state.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use sizing_core::{Grade, SizingError, SizingMethod, SizingResult};

/// Smallest base risk per D-trade, in percent.
pub const RISK_PERCENT_MIN: Decimal = dec!(0.25);
/// Largest base risk per D-trade, in percent.
pub const RISK_PERCENT_MAX: Decimal = dec!(3.0);
/// Granularity of the base risk.
pub const RISK_PERCENT_STEP: Decimal = dec!(0.25);
/// Largest accepted account value (one quadrillion).
pub const ACCOUNT_VALUE_MAX: Decimal = dec!(1000000000000000);

/// User-driven calculator inputs.
///
/// Every constructor and setter validates, so a state always holds a
/// positive account value no larger than `ACCOUNT_VALUE_MAX` and an
/// on-step risk percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    account_value: Decimal,
    risk_percent: Decimal,
    method: SizingMethod,
    grade: Grade,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            account_value: dec!(100000),
            risk_percent: dec!(1),
            method: SizingMethod::Exponential,
            grade: Grade::A,
        }
    }
}

impl CalculatorState {
    pub fn new(
        account_value: Decimal,
        risk_percent: Decimal,
        method: SizingMethod,
        grade: Grade,
    ) -> SizingResult<Self> {
        validate_account_value(account_value)?;
        validate_risk_percent(risk_percent)?;
        Ok(Self {
            account_value,
            risk_percent,
            method,
            grade,
        })
    }

    pub fn account_value(&self) -> Decimal {
        self.account_value
    }

    pub fn risk_percent(&self) -> Decimal {
        self.risk_percent
    }

    pub fn method(&self) -> SizingMethod {
        self.method
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn set_account_value(&mut self, value: Decimal) -> SizingResult<()> {
        validate_account_value(value)?;
        self.account_value = value;
        Ok(())
    }

    pub fn set_risk_percent(&mut self, value: Decimal) -> SizingResult<()> {
        validate_risk_percent(value)?;
        self.risk_percent = value;
        Ok(())
    }

    pub fn set_method(&mut self, method: SizingMethod) {
        self.method = method;
    }

    pub fn set_grade(&mut self, grade: Grade) {
        self.grade = grade;
    }

    /// Raise the risk by one step, saturating at the maximum.
    pub fn increase_risk(&mut self) {
        self.risk_percent = (self.risk_percent + RISK_PERCENT_STEP).min(RISK_PERCENT_MAX);
    }

    /// Lower the risk by one step, saturating at the minimum.
    pub fn decrease_risk(&mut self) {
        self.risk_percent = (self.risk_percent - RISK_PERCENT_STEP).max(RISK_PERCENT_MIN);
    }

    pub fn next_method(&mut self) {
        self.method = self.method.next();
    }

    pub fn next_grade(&mut self) {
        self.grade = self.grade.next();
    }

    /// Shift the account value; a change that would leave the valid range
    /// is ignored. Returns whether the value changed.
    pub fn adjust_account(&mut self, delta: Decimal) -> bool {
        match self.account_value.checked_add(delta) {
            Some(next) if validate_account_value(next).is_ok() => {
                self.account_value = next;
                true
            }
            _ => false,
        }
    }
}

fn validate_account_value(value: Decimal) -> SizingResult<()> {
    if value <= Decimal::ZERO {
        return Err(SizingError::InvalidAccountValue(value));
    }
    if value > ACCOUNT_VALUE_MAX {
        return Err(SizingError::AccountValueTooLarge {
            value,
            max: ACCOUNT_VALUE_MAX,
        });
    }
    Ok(())
}

fn validate_risk_percent(value: Decimal) -> SizingResult<()> {
    if value < RISK_PERCENT_MIN || value > RISK_PERCENT_MAX {
        return Err(SizingError::RiskPercentOutOfRange {
            value,
            min: RISK_PERCENT_MIN,
            max: RISK_PERCENT_MAX,
        });
    }
    if !(value % RISK_PERCENT_STEP).is_zero() {
        return Err(SizingError::RiskPercentStep {
            value,
            step: RISK_PERCENT_STEP,
        });
    }
    Ok(())
}
