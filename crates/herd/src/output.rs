//! Output formatting functions.

use herd_core::unicorn::Unicorn;

use crate::cli::OutputFormat;
use crate::scenario::{Outcome, StepReport};

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format walkthrough reports, one line per step.
pub fn format_reports(reports: &[StepReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&reports),
        OutputFormat::Pretty => reports
            .iter()
            .map(format_report)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Format a single walkthrough step for display.
pub fn format_report(report: &StepReport) -> String {
    match &report.outcome {
        Outcome::Ok {
            unicorn: Some(unicorn),
        } => format!("{} Unicorn: {}", report.step.done(), unicorn),
        Outcome::Ok { unicorn: None } => {
            format!("Unicorn {} successfully.", report.step.done().to_lowercase())
        }
        Outcome::Failed { error } => {
            format!("Error {} Unicorn: {}", report.step.doing(), error)
        }
    }
}

/// Format unicorns for display.
pub fn format_unicorns(unicorns: &[Unicorn], format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return format_json(&unicorns);
    }
    if unicorns.is_empty() {
        return "No unicorns found.".to_string();
    }
    let mut output = format!("UNICORNS ({})\n", unicorns.len());
    output.push_str(&"-".repeat(40));
    for unicorn in unicorns {
        output.push_str(&format!("\n{}", unicorn));
    }
    output
}
