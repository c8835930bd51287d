//! Fixed lookup tables keyed by grade and sizing method.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{Grade, SizingMethod};
use crate::{SizingError, SizingResult};

/// One value per trade grade.
///
/// Keys are lowercase so the table survives the `config` crate's key
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerGrade<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T> PerGrade<T> {
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Value for a grade.
    pub fn get(&self, grade: Grade) -> &T {
        match grade {
            Grade::A => &self.a,
            Grade::B => &self.b,
            Grade::C => &self.c,
            Grade::D => &self.d,
        }
    }

    pub fn get_mut(&mut self, grade: Grade) -> &mut T {
        match grade {
            Grade::A => &mut self.a,
            Grade::B => &mut self.b,
            Grade::C => &mut self.c,
            Grade::D => &mut self.d,
        }
    }

    /// Iterate `(grade, value)` pairs, best grade first.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, &T)> {
        Grade::all().iter().map(move |g| (*g, self.get(*g)))
    }

    /// Build a table by evaluating `f` for each grade.
    pub fn from_fn(mut f: impl FnMut(Grade) -> T) -> Self {
        Self {
            a: f(Grade::A),
            b: f(Grade::B),
            c: f(Grade::C),
            d: f(Grade::D),
        }
    }
}

/// One value per sizing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerMethod<T> {
    pub equal: T,
    pub linear: T,
    pub exponential: T,
    pub wild: T,
}

impl<T> PerMethod<T> {
    /// Value for a method.
    pub fn get(&self, method: SizingMethod) -> &T {
        match method {
            SizingMethod::Equal => &self.equal,
            SizingMethod::Linear => &self.linear,
            SizingMethod::Exponential => &self.exponential,
            SizingMethod::Wild => &self.wild,
        }
    }

    /// Iterate `(method, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SizingMethod, &T)> {
        SizingMethod::all().iter().map(move |m| (*m, self.get(*m)))
    }

    /// Build a table by evaluating `f` for each method.
    pub fn from_fn(mut f: impl FnMut(SizingMethod) -> T) -> Self {
        Self {
            equal: f(SizingMethod::Equal),
            linear: f(SizingMethod::Linear),
            exponential: f(SizingMethod::Exponential),
            wild: f(SizingMethod::Wild),
        }
    }
}

/// Position-size multiplier for every (method, grade) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiplierTable(pub PerMethod<PerGrade<Decimal>>);

impl MultiplierTable {
    /// Multiplier applied to the base risk.
    pub fn multiplier(&self, method: SizingMethod, grade: Grade) -> Decimal {
        *self.0.get(method).get(grade)
    }

    /// Multipliers for one method.
    pub fn row(&self, method: SizingMethod) -> &PerGrade<Decimal> {
        self.0.get(method)
    }

    /// Every multiplier must be strictly positive.
    pub fn validate(&self) -> SizingResult<()> {
        for (method, row) in self.0.iter() {
            for (grade, value) in row.iter() {
                if *value <= Decimal::ZERO {
                    return Err(SizingError::InvalidTable {
                        field: format!("multipliers.{}.{}", method, grade.as_str().to_lowercase()),
                        reason: format!("multiplier must be positive, got {}", value),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self(PerMethod {
            equal: PerGrade::new(dec!(1), dec!(1), dec!(1), dec!(1)),
            linear: PerGrade::new(dec!(4), dec!(3), dec!(2), dec!(1)),
            exponential: PerGrade::new(dec!(8), dec!(4), dec!(2), dec!(1)),
            wild: PerGrade::new(dec!(27), dec!(9), dec!(3), dec!(1)),
        })
    }
}

/// Hypothetical number of trades per grade over a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeDistribution(pub PerGrade<u32>);

impl TradeDistribution {
    /// Number of trades of a grade.
    pub fn count(&self, grade: Grade) -> u32 {
        *self.0.get(grade)
    }

    /// Total number of trades. Four `u32` counts always fit in a `u64`.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    /// Share of all trades with the given grade, in percent.
    pub fn share_pct(&self, grade: Grade) -> Decimal {
        let total = self.total();
        if total == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.count(grade)) * dec!(100) / Decimal::from(total)
    }

    pub fn validate(&self) -> SizingResult<()> {
        if self.total() == 0 {
            return Err(SizingError::InvalidTable {
                field: "distribution".to_string(),
                reason: "at least one trade is required".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TradeDistribution {
    fn default() -> Self {
        Self(PerGrade::new(2, 8, 24, 66))
    }
}
