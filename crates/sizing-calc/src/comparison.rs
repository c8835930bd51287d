//! Sizing method comparison over a fixed trade distribution.
//!
//! Each method's total P&L is the sum over grades of
//! `size(method, grade) * ev(grade) * count(grade)`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sizing_core::{
    Grade, GradeTable, PerGrade, PerMethod, SizingError, SizingMethod, SizingResult,
    TradeDistribution,
};
use tracing::debug;

use crate::PositionSizer;

/// Aggregate outcome of one sizing method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodOutcome {
    pub method: SizingMethod,
    /// Total expected P&L over the distribution
    pub total_pl: Decimal,
    /// Total P&L as a percentage of the account
    pub performance_pct: Decimal,
    /// Expected P&L contributed by each grade
    pub contributions: PerGrade<Decimal>,
}

impl MethodOutcome {
    pub fn is_profitable(&self) -> bool {
        self.total_pl > Decimal::ZERO
    }

    /// Percentage of the total P&L produced by a grade.
    ///
    /// `None` unless the method is profitable overall and the share is
    /// representable.
    pub fn share_of_pl(&self, grade: Grade) -> Option<Decimal> {
        if !self.is_profitable() {
            return None;
        }
        self.contributions
            .get(grade)
            .checked_div(self.total_pl)
            .and_then(|share| share.checked_mul(dec!(100)))
    }
}

/// Outcomes of all sizing methods for one account/risk input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub account_value: Decimal,
    pub risk_percent: Decimal,
    pub distribution: TradeDistribution,
    pub outcomes: PerMethod<MethodOutcome>,
}

impl Comparison {
    /// Total P&L of a method.
    pub fn total_pl(&self, method: SizingMethod) -> Decimal {
        self.outcomes.get(method).total_pl
    }

    /// Total P&L per method.
    pub fn totals(&self) -> PerMethod<Decimal> {
        PerMethod::from_fn(|m| self.total_pl(m))
    }

    pub fn outcome(&self, method: SizingMethod) -> &MethodOutcome {
        self.outcomes.get(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodOutcome> {
        self.outcomes.iter().map(|(_, outcome)| outcome)
    }

    /// Method with the highest total P&L.
    pub fn best(&self) -> SizingMethod {
        self.iter()
            .fold(None::<&MethodOutcome>, |best, o| match best {
                Some(b) if b.total_pl >= o.total_pl => Some(b),
                _ => Some(o),
            })
            .map(|o| o.method)
            .unwrap_or_default()
    }
}

/// Applies every sizing method to the trade distribution.
#[derive(Debug, Clone, Default)]
pub struct ComparisonAggregator {
    sizer: PositionSizer,
    grades: GradeTable,
    distribution: TradeDistribution,
}

impl ComparisonAggregator {
    /// Create a new aggregator.
    pub fn new(sizer: PositionSizer, grades: GradeTable, distribution: TradeDistribution) -> Self {
        Self {
            sizer,
            grades,
            distribution,
        }
    }

    pub fn sizer(&self) -> &PositionSizer {
        &self.sizer
    }

    pub fn grades(&self) -> &GradeTable {
        &self.grades
    }

    pub fn distribution(&self) -> &TradeDistribution {
        &self.distribution
    }

    /// Compare all sizing methods.
    pub fn compute(&self, account_value: Decimal, risk_percent: Decimal) -> SizingResult<Comparison> {
        let outcomes = PerMethod {
            equal: self.outcome(account_value, risk_percent, SizingMethod::Equal)?,
            linear: self.outcome(account_value, risk_percent, SizingMethod::Linear)?,
            exponential: self.outcome(account_value, risk_percent, SizingMethod::Exponential)?,
            wild: self.outcome(account_value, risk_percent, SizingMethod::Wild)?,
        };

        let comparison = Comparison {
            account_value,
            risk_percent,
            distribution: self.distribution.clone(),
            outcomes,
        };

        debug!(
            %account_value,
            %risk_percent,
            best = %comparison.best(),
            "compared sizing methods"
        );

        Ok(comparison)
    }

    fn outcome(
        &self,
        account_value: Decimal,
        risk_percent: Decimal,
        method: SizingMethod,
    ) -> SizingResult<MethodOutcome> {
        let mut contributions = PerGrade::from_fn(|_| Decimal::ZERO);
        let mut total_pl = Decimal::ZERO;

        for grade in Grade::all() {
            let size = self.sizer.compute_size(account_value, risk_percent, method, *grade)?;
            let pl = size
                .checked_mul(self.grades.ev(*grade))
                .and_then(|v| v.checked_mul(Decimal::from(self.distribution.count(*grade))))
                .ok_or(SizingError::Overflow("grade contribution"))?;
            total_pl = total_pl
                .checked_add(pl)
                .ok_or(SizingError::Overflow("total P&L"))?;
            *contributions.get_mut(*grade) = pl;
        }

        let performance_pct = if account_value.is_zero() {
            Decimal::ZERO
        } else {
            total_pl
                .checked_div(account_value)
                .and_then(|v| v.checked_mul(dec!(100)))
                .ok_or(SizingError::Overflow("performance"))?
        };

        Ok(MethodOutcome {
            method,
            total_pl,
            performance_pct,
            contributions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_total() {
        let aggregator = ComparisonAggregator::default();

        let comparison = aggregator.compute(dec!(100000), dec!(1)).unwrap();
        // 1000 * (3.5*2 + 1.1*8 + 0.1*24 - 0.2*66)
        assert_eq!(comparison.total_pl(SizingMethod::Equal), dec!(5000));
    }

    #[test]
    fn test_all_method_totals() {
        let aggregator = ComparisonAggregator::default();

        let totals = aggregator.compute(dec!(100000), dec!(1)).unwrap().totals();
        assert_eq!(totals.equal, dec!(5000));
        assert_eq!(totals.linear, dec!(46000));
        assert_eq!(totals.exponential, dec!(82800));
        assert_eq!(totals.wild, dec!(262200));
    }

    #[test]
    fn test_contributions_and_performance() {
        let aggregator = ComparisonAggregator::default();

        let comparison = aggregator.compute(dec!(100000), dec!(1)).unwrap();
        let equal = comparison.outcome(SizingMethod::Equal);

        assert_eq!(equal.contributions.a, dec!(7000));
        assert_eq!(equal.contributions.b, dec!(8800));
        assert_eq!(equal.contributions.c, dec!(2400));
        assert_eq!(equal.contributions.d, dec!(-13200));
        assert_eq!(equal.performance_pct, dec!(5));
        assert!(equal.is_profitable());

        let wild = comparison.outcome(SizingMethod::Wild);
        assert_eq!(wild.performance_pct, dec!(262.2));
    }

    #[test]
    fn test_a_trades_dominate_wild_sizing() {
        let aggregator = ComparisonAggregator::default();

        let comparison = aggregator.compute(dec!(100000), dec!(1)).unwrap();
        let share = comparison
            .outcome(SizingMethod::Wild)
            .share_of_pl(Grade::A)
            .unwrap();

        // 189000 / 262200
        assert!(share > dec!(72) && share < dec!(73));
        assert_eq!(comparison.best(), SizingMethod::Wild);
    }

    #[test]
    fn test_unprofitable_method_has_no_share() {
        let mut grades = GradeTable::default();
        grades.0.a.ev = dec!(-1);
        grades.0.b.ev = dec!(-1);
        grades.0.c.ev = dec!(-1);
        let aggregator = ComparisonAggregator::new(
            PositionSizer::default(),
            grades,
            TradeDistribution::default(),
        );

        let comparison = aggregator.compute(dec!(50000), dec!(0.5)).unwrap();
        let equal = comparison.outcome(SizingMethod::Equal);
        assert!(!equal.is_profitable());
        assert_eq!(equal.share_of_pl(Grade::A), None);
    }

    #[test]
    fn test_scales_linearly() {
        let aggregator = ComparisonAggregator::default();

        let base = aggregator.compute(dec!(100000), dec!(1)).unwrap().totals();
        let doubled = aggregator.compute(dec!(200000), dec!(1)).unwrap().totals();
        let double_risk = aggregator.compute(dec!(100000), dec!(2)).unwrap().totals();

        for method in SizingMethod::all() {
            assert_eq!(*doubled.get(*method), *base.get(*method) * dec!(2));
            assert_eq!(*double_risk.get(*method), *base.get(*method) * dec!(2));
        }
    }

    #[test]
    fn test_idempotent() {
        let aggregator = ComparisonAggregator::default();

        let first = aggregator.compute(dec!(73250), dec!(1.75)).unwrap();
        let second = aggregator.compute(dec!(73250), dec!(1.75)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let aggregator = ComparisonAggregator::default();

        assert_eq!(
            aggregator.compute(Decimal::MAX, dec!(3)),
            Err(SizingError::Overflow("base risk"))
        );

        let mut grades = GradeTable::default();
        grades.0.a.ev = dec!(100000000000000000000000);
        let aggregator =
            ComparisonAggregator::new(PositionSizer::default(), grades, TradeDistribution::default());
        assert_eq!(
            aggregator.compute(dec!(100000000), dec!(1)),
            Err(SizingError::Overflow("grade contribution"))
        );
    }
}
