//! CLI command implementations.

pub mod compare;
pub mod grades;
pub mod guide;
pub mod size;
pub mod tui;
pub mod validate;
