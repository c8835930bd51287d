//! Grade profiles: the assumed statistics behind each trade grade.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{Grade, PerGrade};
use crate::{SizingError, SizingResult};

/// Descriptive and statistical attributes of a trade grade.
///
/// The numbers are illustrative, taken from a sample case study rather
/// than from the user's own journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeProfile {
    /// Display name
    pub name: String,
    /// Display color as a hex string
    pub color: String,
    /// Win rate percentage (0-100)
    pub win_rate: Decimal,
    /// Reward in units of risk
    pub reward: Decimal,
    /// Risk unit
    pub risk: Decimal,
    /// Expected value per unit of risk
    pub ev: Decimal,
    /// How often the setup occurs
    pub frequency: String,
    /// What the grade means
    pub description: String,
    /// Example setups
    pub examples: String,
}

impl GradeProfile {
    /// EV implied by the win rate and reward/risk profile.
    pub fn implied_ev(&self) -> Decimal {
        let p = self.win_rate / dec!(100);
        p * self.reward - (Decimal::ONE - p) * self.risk
    }

    /// Reward-to-risk ratio, formatted as `risk:reward`.
    pub fn risk_reward(&self) -> String {
        format!("{}:{}", self.risk.normalize(), self.reward.normalize())
    }

    pub fn validate(&self, grade: Grade) -> SizingResult<()> {
        let field = |name: &str| format!("grades.{}.{}", grade.as_str().to_lowercase(), name);

        if self.win_rate < Decimal::ZERO || self.win_rate > dec!(100) {
            return Err(SizingError::InvalidTable {
                field: field("win_rate"),
                reason: format!("win rate must be within 0..=100, got {}", self.win_rate),
            });
        }
        if self.risk <= Decimal::ZERO {
            return Err(SizingError::InvalidTable {
                field: field("risk"),
                reason: format!("risk must be positive, got {}", self.risk),
            });
        }
        if self.reward < Decimal::ZERO {
            return Err(SizingError::InvalidTable {
                field: field("reward"),
                reason: format!("reward must not be negative, got {}", self.reward),
            });
        }
        Ok(())
    }
}

/// Profiles for all four grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeTable(pub PerGrade<GradeProfile>);

impl GradeTable {
    /// Profile for a grade.
    pub fn profile(&self, grade: Grade) -> &GradeProfile {
        self.0.get(grade)
    }

    /// Expected value per unit of risk for a grade.
    pub fn ev(&self, grade: Grade) -> Decimal {
        self.profile(grade).ev
    }

    pub fn iter(&self) -> impl Iterator<Item = (Grade, &GradeProfile)> {
        self.0.iter()
    }

    pub fn validate(&self) -> SizingResult<()> {
        for (grade, profile) in self.iter() {
            profile.validate(grade)?;
        }
        Ok(())
    }
}

impl Default for GradeTable {
    fn default() -> Self {
        Self(PerGrade {
            a: GradeProfile {
                name: "A-Trade".to_string(),
                color: "#38a169".to_string(),
                win_rate: dec!(90),
                reward: dec!(4),
                risk: dec!(1),
                ev: dec!(3.50),
                frequency: "2-3x per month".to_string(),
                description: "The absolute highlight trades of the year. Pocket aces. \
                              Everything lines up perfectly."
                    .to_string(),
                examples: "QXO entry at $13.90, CELH breakout, SMCI stage 2 setup".to_string(),
            },
            b: GradeProfile {
                name: "B-Trade".to_string(),
                color: "#d69e2e".to_string(),
                win_rate: dec!(70),
                reward: dec!(2),
                risk: dec!(1),
                ev: dec!(1.10),
                frequency: "Several times per week".to_string(),
                description: "Solid setups with good risk/reward. The \"singles\" of trading."
                    .to_string(),
                examples: "Stage 2 continuation, breakout over resistance, momentum plays"
                    .to_string(),
            },
            c: GradeProfile {
                name: "C-Trade".to_string(),
                color: "#f4e97b".to_string(),
                win_rate: dec!(55),
                reward: dec!(1),
                risk: dec!(1),
                ev: dec!(0.10),
                frequency: "Daily".to_string(),
                description: "Average trades. Slight edge, but nothing special.".to_string(),
                examples: "Small scalps, range trades, routine setups".to_string(),
            },
            d: GradeProfile {
                name: "D-Trade".to_string(),
                color: "#e53e3e".to_string(),
                win_rate: dec!(40),
                reward: dec!(1),
                risk: dec!(1),
                ev: dec!(-0.20),
                frequency: "Always available".to_string(),
                description: "Mediocre 50/50 trades or negative expected value. Avoid!"
                    .to_string(),
                examples: "FOMO trades, breaking news without a setup, overtrading".to_string(),
            },
        })
    }
}
