//! Logging, educational content and the interactive calculator TUI.

pub mod content;
mod dashboard;
mod logging;
mod tabs;

pub use dashboard::{Dashboard, DashboardState};
pub use logging::setup_logging;
pub use tabs::Tab;
