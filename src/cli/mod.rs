//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use sizing_core::{Grade, SizingMethod};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sizing")]
#[command(author, version, about = "Grade-based position sizing calculator")]
pub struct Cli {
    /// Configuration file path (built-in defaults when omitted)
    #[arg(short, long, env = "SIZING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend the risk amount for one trade
    Size(SizeArgs),
    /// Compare all sizing methods over a year of trades
    Compare(CompareArgs),
    /// Show the trade grade reference
    Grades(GradesArgs),
    /// Read the beginner guide or the poker analogy
    Guide(GuideArgs),
    /// Start the interactive calculator
    Tui,
    /// Validate configuration
    ValidateConfig(ValidateArgs),
}

impl Commands {
    /// Whether the command draws a full-screen UI.
    pub fn owns_terminal(&self) -> bool {
        matches!(self, Commands::Tui)
    }

    /// Whether the command validates and reports configuration itself.
    pub fn reports_validation(&self) -> bool {
        matches!(self, Commands::ValidateConfig(_))
    }
}

/// Output format for single reports.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Output format for the comparison.
#[derive(Clone, Copy, ValueEnum)]
pub enum CompareFormat {
    Text,
    Json,
    Csv,
}

#[derive(clap::Args)]
pub struct SizeArgs {
    /// Account value
    #[arg(short, long)]
    pub account: Option<Decimal>,

    /// Base risk per D-trade in percent (0.25-3.0, 0.25 steps)
    #[arg(short, long)]
    pub risk: Option<Decimal>,

    /// Sizing method (equal, linear, exponential, wild)
    #[arg(short, long)]
    pub method: Option<SizingMethod>,

    /// Trade grade (A, B, C, D)
    #[arg(short, long)]
    pub grade: Option<Grade>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: ReportFormat,
}

#[derive(clap::Args)]
pub struct CompareArgs {
    /// Account value
    #[arg(short, long)]
    pub account: Option<Decimal>,

    /// Base risk per D-trade in percent (0.25-3.0, 0.25 steps)
    #[arg(short, long)]
    pub risk: Option<Decimal>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: CompareFormat,

    /// Save results to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct GradesArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GuideTopic {
    /// Prerequisites, roadmap and journal checklist
    Beginner,
    /// Why grades are like poker hands
    Poker,
}

#[derive(clap::Args)]
pub struct GuideArgs {
    /// Topic to show
    #[arg(default_value = "beginner")]
    pub topic: GuideTopic,
}

#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Print the effective configuration as TOML
    #[arg(long)]
    pub show: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_tui_owns_terminal() {
        let tui = Cli::parse_from(["sizing", "tui"]);
        assert!(tui.command.owns_terminal());

        let size = Cli::parse_from(["sizing", "size", "--grade", "b"]);
        assert!(!size.command.owns_terminal());
    }

    #[test]
    fn test_sizing_commands_require_validated_config() {
        for args in [
            vec!["sizing", "size"],
            vec!["sizing", "compare"],
            vec!["sizing", "tui"],
        ] {
            assert!(!Cli::parse_from(args).command.reports_validation());
        }
        let validate = Cli::parse_from(["sizing", "validate-config", "--show"]);
        assert!(validate.command.reports_validation());
    }
}
