//! Grade-based position sizing.
//!
//! Provides the position sizer, the sizing-method comparison, the
//! calculator input state, and text/JSON/CSV reports.

mod comparison;
mod position_sizer;
mod report;
mod state;

pub use comparison::{Comparison, ComparisonAggregator, MethodOutcome};
pub use position_sizer::{PositionSizer, Recommendation};
pub use report::{ComparisonReport, GradeReport, SizeReport};
pub use state::{
    CalculatorState, ACCOUNT_VALUE_MAX, RISK_PERCENT_MAX, RISK_PERCENT_MIN, RISK_PERCENT_STEP,
};
