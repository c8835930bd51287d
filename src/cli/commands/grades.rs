//! Grade reference command.

use anyhow::Result;
use sizing_calc::GradeReport;
use sizing_config::AppConfig;

use crate::cli::{GradesArgs, ReportFormat};

pub fn run(args: GradesArgs, config: &AppConfig) -> Result<()> {
    let report = GradeReport::new(
        config.grades.clone(),
        config.multipliers.clone(),
        config.distribution.clone(),
    );

    match args.output {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => println!("{}", report.summary()),
    }

    Ok(())
}
