//! Core data types for the position sizing calculator.

mod grade;
mod method;
mod profile;
mod table;

pub use grade::Grade;
pub use method::SizingMethod;
pub use profile::{GradeProfile, GradeTable};
pub use table::{MultiplierTable, PerGrade, PerMethod, TradeDistribution};
