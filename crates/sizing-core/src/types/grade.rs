//! Trade grade definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SizingError;

/// Trade quality category, from A (best) to D (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Grade {
    /// Highlight trades, a handful per month
    #[serde(rename = "A", alias = "a")]
    #[default]
    A,
    /// Solid setups with good risk/reward
    #[serde(rename = "B", alias = "b")]
    B,
    /// Average trades with a slight edge
    #[serde(rename = "C", alias = "c")]
    C,
    /// Coin-flip or negative-EV trades
    #[serde(rename = "D", alias = "d")]
    D,
}

impl Grade {
    /// All grades, best first.
    pub fn all() -> &'static [Grade] {
        &[Grade::A, Grade::B, Grade::C, Grade::D]
    }

    /// Next grade in A -> B -> C -> D -> A order.
    pub fn next(self) -> Grade {
        match self {
            Grade::A => Grade::B,
            Grade::B => Grade::C,
            Grade::C => Grade::D,
            Grade::D => Grade::A,
        }
    }

    /// Single-letter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" | "A-TRADE" => Ok(Grade::A),
            "B" | "B-TRADE" => Ok(Grade::B),
            "C" | "C-TRADE" => Ok(Grade::C),
            "D" | "D-TRADE" => Ok(Grade::D),
            _ => Err(SizingError::UnknownGrade(s.to_string())),
        }
    }
}
