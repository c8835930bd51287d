//! Sizing method definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SizingError;

/// Strategy mapping a trade grade to a position-size multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizingMethod {
    /// Same size for every grade (1x, 1x, 1x, 1x)
    Equal,
    /// Linear scaling (1x, 2x, 3x, 4x)
    Linear,
    /// Doubling per grade (1x, 2x, 4x, 8x)
    #[default]
    Exponential,
    /// Tripling per grade (1x, 3x, 9x, 27x)
    Wild,
}

impl SizingMethod {
    /// All methods, most conservative first.
    pub fn all() -> &'static [SizingMethod] {
        &[
            SizingMethod::Equal,
            SizingMethod::Linear,
            SizingMethod::Exponential,
            SizingMethod::Wild,
        ]
    }

    /// Next method in display order, wrapping around.
    pub fn next(self) -> SizingMethod {
        match self {
            SizingMethod::Equal => SizingMethod::Linear,
            SizingMethod::Linear => SizingMethod::Exponential,
            SizingMethod::Exponential => SizingMethod::Wild,
            SizingMethod::Wild => SizingMethod::Equal,
        }
    }

    /// Machine name, as used in config and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizingMethod::Equal => "equal",
            SizingMethod::Linear => "linear",
            SizingMethod::Exponential => "exponential",
            SizingMethod::Wild => "wild",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SizingMethod::Equal => "Equal sizing",
            SizingMethod::Linear => "Linear sizing",
            SizingMethod::Exponential => "Exponential sizing",
            SizingMethod::Wild => "Exponential wild",
        }
    }

    /// Who the method is meant for.
    pub fn audience(&self) -> &'static str {
        match self {
            SizingMethod::Equal => "For beginners - learn your system first",
            SizingMethod::Linear => "For beginners with first journal data",
            SizingMethod::Exponential => "For traders with 4+ years of experience and robust data",
            SizingMethod::Wild => "For elite traders with 8+ years of experience and tons of data",
        }
    }
}

impl fmt::Display for SizingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SizingMethod {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal" | "flat" => Ok(SizingMethod::Equal),
            "linear" => Ok(SizingMethod::Linear),
            "exponential" | "exp" => Ok(SizingMethod::Exponential),
            "wild" | "exponential_wild" | "exponential-wild" => Ok(SizingMethod::Wild),
            _ => Err(SizingError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(SizingMethod::from_str("equal").unwrap(), SizingMethod::Equal);
        assert_eq!(SizingMethod::from_str("EXP").unwrap(), SizingMethod::Exponential);
        assert_eq!(
            SizingMethod::from_str("exponential-wild").unwrap(),
            SizingMethod::Wild
        );
        assert!(matches!(
            SizingMethod::from_str("kelly"),
            Err(SizingError::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_method_display_roundtrips_through_parse() {
        for method in SizingMethod::all() {
            assert_eq!(SizingMethod::from_str(&method.to_string()).unwrap(), *method);
        }
    }

    #[test]
    fn test_method_cycle_visits_all() {
        let mut method = SizingMethod::Equal;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(method);
            method = method.next();
        }
        assert_eq!(seen, SizingMethod::all());
        assert_eq!(method, SizingMethod::Equal);
    }
}
