//! Report generation for inspection results.
//!
//! This module provides multiple output formats:
//! - JSON: Structured data for programmatic integration
//! - Summary: Compact shell-friendly output, one line per file
//! - Table: Aligned tabular terminal output

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::ReportFormat;

use crate::pipeline::FileReport;
use crate::signatures::Registry;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for inspected files
    fn generate_files_report(&self, reports: &[FileReport]) -> Result<String, ReportError>;

    /// Generate a listing of the registry's formats and signatures
    fn generate_formats_report(&self, registry: &Registry) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a reporter for a concrete format.
///
/// `Auto` must be resolved by the caller first; it falls back to summary.
/// Color is dropped when `NO_COLOR` is set.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    let colored = colored && std::env::var_os("NO_COLOR").is_none();
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Table => {
            let reporter = TableReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Summary | ReportFormat::Auto => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Json, false).format(), ReportFormat::Json);
        assert_eq!(create_reporter(ReportFormat::Table, false).format(), ReportFormat::Table);
        assert_eq!(create_reporter(ReportFormat::Summary, true).format(), ReportFormat::Summary);
        assert_eq!(create_reporter(ReportFormat::Auto, true).format(), ReportFormat::Summary);
    }

    #[test]
    fn test_empty_files_report() {
        let out = create_reporter(ReportFormat::Summary, false)
            .generate_files_report(&[])
            .expect("generate report");
        assert_eq!(out, "No files inspected");
    }
}
