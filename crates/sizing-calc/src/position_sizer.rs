//! Position sizing by trade grade.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sizing_core::{Grade, MultiplierTable, SizingError, SizingMethod, SizingResult};
use tracing::trace;

use crate::CalculatorState;

/// Recommended risk for one calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub method: SizingMethod,
    pub grade: Grade,
    /// Money risked on a D-grade trade
    pub base_risk: Decimal,
    /// Grade multiplier applied to the base risk
    pub multiplier: Decimal,
    /// Recommended money at risk
    pub risk_amount: Decimal,
    /// Recommended risk as a percentage of the account
    pub pct_of_account: Decimal,
}

/// Position sizer scales a base risk by a grade multiplier.
#[derive(Debug, Clone, Default)]
pub struct PositionSizer {
    multipliers: MultiplierTable,
}

impl PositionSizer {
    /// Create a new position sizer.
    pub fn new(multipliers: MultiplierTable) -> Self {
        Self { multipliers }
    }

    pub fn multipliers(&self) -> &MultiplierTable {
        &self.multipliers
    }

    /// Money risked on the unit (D-grade) trade.
    pub fn base_risk(&self, account_value: Decimal, risk_percent: Decimal) -> SizingResult<Decimal> {
        account_value
            .checked_mul(risk_percent)
            .and_then(|v| v.checked_div(dec!(100)))
            .ok_or(SizingError::Overflow("base risk"))
    }

    /// Recommended money at risk for a trade.
    ///
    /// `account_value * risk_percent / 100 * multiplier[method][grade]`.
    /// Linear in both `account_value` and `risk_percent`. Fails with
    /// `SizingError::Overflow` instead of exceeding the `Decimal` range.
    pub fn compute_size(
        &self,
        account_value: Decimal,
        risk_percent: Decimal,
        method: SizingMethod,
        grade: Grade,
    ) -> SizingResult<Decimal> {
        let base = self.base_risk(account_value, risk_percent)?;
        let size = base
            .checked_mul(self.multipliers.multiplier(method, grade))
            .ok_or(SizingError::Overflow("position size"))?;
        trace!(%account_value, %risk_percent, %method, %grade, %size, "computed size");
        Ok(size)
    }

    /// Full recommendation for the current calculator input.
    pub fn recommend(&self, state: &CalculatorState) -> SizingResult<Recommendation> {
        let account = state.account_value();
        let risk_percent = state.risk_percent();
        let risk_amount = self.compute_size(account, risk_percent, state.method(), state.grade())?;
        let pct_of_account = risk_amount
            .checked_div(account)
            .and_then(|v| v.checked_mul(dec!(100)))
            .ok_or(SizingError::Overflow("share of account"))?;

        Ok(Recommendation {
            method: state.method(),
            grade: state.grade(),
            base_risk: self.base_risk(account, risk_percent)?,
            multiplier: self.multipliers.multiplier(state.method(), state.grade()),
            risk_amount,
            pct_of_account,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_is_flat_across_grades() {
        let sizer = PositionSizer::default();

        for grade in Grade::all() {
            let size = sizer.compute_size(dec!(100000), dec!(1), SizingMethod::Equal, *grade).unwrap();
            assert_eq!(size, dec!(1000));
        }
    }

    #[test]
    fn test_exponential_a_trade() {
        let sizer = PositionSizer::default();

        let size = sizer.compute_size(dec!(100000), dec!(1), SizingMethod::Exponential, Grade::A).unwrap();
        assert_eq!(size, dec!(8000));
    }

    #[test]
    fn test_wild_extremes() {
        let sizer = PositionSizer::default();

        assert_eq!(
            sizer.compute_size(dec!(100000), dec!(1), SizingMethod::Wild, Grade::A).unwrap(),
            dec!(27000)
        );
        assert_eq!(
            sizer.compute_size(dec!(100000), dec!(1), SizingMethod::Wild, Grade::D).unwrap(),
            dec!(1000)
        );
    }

    #[test]
    fn test_linear_in_account_and_risk() {
        let sizer = PositionSizer::default();

        for method in SizingMethod::all() {
            for grade in Grade::all() {
                let base = sizer.compute_size(dec!(37500), dec!(0.75), *method, *grade).unwrap();
                let double_account =
                    sizer.compute_size(dec!(75000), dec!(0.75), *method, *grade).unwrap();
                let double_risk = sizer.compute_size(dec!(37500), dec!(1.5), *method, *grade).unwrap();

                assert_eq!(double_account, base * dec!(2));
                assert_eq!(double_risk, base * dec!(2));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let sizer = PositionSizer::default();

        let first = sizer.compute_size(dec!(52340.17), dec!(2.25), SizingMethod::Linear, Grade::B).unwrap();
        let second = sizer.compute_size(dec!(52340.17), dec!(2.25), SizingMethod::Linear, Grade::B).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_multipliers() {
        let mut table = MultiplierTable::default();
        table.0.linear.a = dec!(1.5);
        let sizer = PositionSizer::new(table);

        let size = sizer.compute_size(dec!(10000), dec!(2), SizingMethod::Linear, Grade::A).unwrap();
        // base 200 * 1.5
        assert_eq!(size, dec!(300));
    }

    #[test]
    fn test_recommendation() {
        let sizer = PositionSizer::default();
        let state = CalculatorState::default();

        let rec = sizer.recommend(&state).unwrap();
        assert_eq!(rec.method, SizingMethod::Exponential);
        assert_eq!(rec.grade, Grade::A);
        assert_eq!(rec.base_risk, dec!(1000));
        assert_eq!(rec.multiplier, dec!(8));
        assert_eq!(rec.risk_amount, dec!(8000));
        assert_eq!(rec.pct_of_account, dec!(8));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let sizer = PositionSizer::default();

        assert_eq!(
            sizer.compute_size(Decimal::MAX, dec!(3), SizingMethod::Wild, Grade::A),
            Err(SizingError::Overflow("base risk"))
        );

        // base fits, the multiplier pushes it over
        let mut table = MultiplierTable::default();
        table.0.wild.a = dec!(1000000);
        let sizer = PositionSizer::new(table);
        let result =
            sizer.compute_size(dec!(10000000000000000000000000), dec!(1), SizingMethod::Wild, Grade::A);
        assert_eq!(result, Err(SizingError::Overflow("position size")));
    }
}
