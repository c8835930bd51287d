//! Core types for the position sizing calculator.
//!
//! This crate provides the foundational building blocks including:
//! - Trade grades (A-D) and their profiles
//! - Sizing methods and their multiplier tables
//! - Per-grade / per-method lookup tables
//! - Locale formatting of money and percentages

pub mod error;
pub mod format;
pub mod types;

pub use error::{SizingError, SizingResult};
pub use types::*;
