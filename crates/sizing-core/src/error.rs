//! Error types for the position sizing calculator.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level sizing error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("Account value must be positive, got {0}")]
    InvalidAccountValue(Decimal),

    #[error("Account value {value} exceeds the maximum of {max}")]
    AccountValueTooLarge { value: Decimal, max: Decimal },

    #[error("Risk percent {value} outside allowed range {min}..={max}")]
    RiskPercentOutOfRange {
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Risk percent {value} is not a multiple of {step}")]
    RiskPercentStep { value: Decimal, step: Decimal },

    #[error("Unknown grade: {0} (expected A, B, C or D)")]
    UnknownGrade(String),

    #[error("Unknown sizing method: {0} (expected equal, linear, exponential or wild)")]
    UnknownMethod(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Invalid table value for {field}: {reason}")]
    InvalidTable { field: String, reason: String },

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

/// Result type alias for sizing operations.
pub type SizingResult<T> = Result<T, SizingError>;
