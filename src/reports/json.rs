//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::FileReport;
use crate::signatures::Registry;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct FilesReport<'a> {
    summary: FilesSummary,
    files: &'a [FileReport],
}

#[derive(Serialize)]
struct FilesSummary {
    total: usize,
    identified: usize,
    unknown: usize,
    mismatched: usize,
    errors: usize,
}

impl FilesSummary {
    fn from_reports(reports: &[FileReport]) -> Self {
        let errors = reports.iter().filter(|r| r.is_error()).count();
        let identified = reports.iter().filter(|r| r.is_identified()).count();
        Self {
            total: reports.len(),
            identified,
            unknown: reports.len() - identified - errors,
            mismatched: reports.iter().filter(|r| r.is_mismatch()).count(),
            errors,
        }
    }
}

#[derive(Serialize)]
struct FormatEntry {
    order: usize,
    name: &'static str,
    aliases: Vec<&'static str>,
    mime_type: &'static str,
    all_of: Vec<String>,
    any_of: Vec<String>,
}

impl ReportGenerator for JsonReporter {
    fn generate_files_report(&self, reports: &[FileReport]) -> Result<String, ReportError> {
        self.to_json(&FilesReport {
            summary: FilesSummary::from_reports(reports),
            files: reports,
        })
    }

    fn generate_formats_report(&self, registry: &Registry) -> Result<String, ReportError> {
        let entries: Vec<FormatEntry> = registry
            .testers()
            .iter()
            .enumerate()
            .map(|(i, tester)| FormatEntry {
                order: i + 1,
                name: tester.format.name(),
                aliases: tester.format.aliases().iter().collect(),
                mime_type: tester.format.mime_type(),
                all_of: tester.all_of.iter().map(ToString::to_string).collect(),
                any_of: tester.any_of.iter().map(ToString::to_string).collect(),
            })
            .collect();
        self.to_json(&entries)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::ImageFormat;
    use std::path::PathBuf;

    fn report(format: Option<ImageFormat>, matches: Option<bool>) -> FileReport {
        FileReport {
            path: PathBuf::from("upload.png"),
            format,
            aliases: format.map(|f| f.aliases()),
            mime_type: format.map(|f| f.mime_type()),
            claimed_extension: matches.map(|_| "png".to_string()),
            extension_matches: matches,
            error: None,
        }
    }

    #[test]
    fn test_files_report_summary() {
        let reports = vec![
            report(Some(ImageFormat::Png), Some(true)),
            report(Some(ImageFormat::Bmp), Some(false)),
            report(None, None),
        ];
        let json = JsonReporter::new()
            .generate_files_report(&reports)
            .expect("generate report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["summary"]["total"], 3);
        assert_eq!(value["summary"]["identified"], 2);
        assert_eq!(value["summary"]["unknown"], 1);
        assert_eq!(value["summary"]["mismatched"], 1);
        assert_eq!(value["files"][0]["format"], "png");
        assert_eq!(value["files"][0]["mime_type"], "image/png");
        assert_eq!(value["files"][1]["extension_matches"], false);
        assert!(value["files"][2].get("format").is_none());
    }

    #[test]
    fn test_formats_report() {
        let json = JsonReporter::new()
            .pretty(false)
            .generate_formats_report(Registry::builtin())
            .expect("generate report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        let entries = value.as_array().expect("array of formats");
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[1]["name"], "JPEG");
        assert_eq!(entries[1]["aliases"], serde_json::json!(["jpg", "jpeg"]));
        assert_eq!(entries[5]["all_of"], serde_json::json!(["@0: 52 49 46 46", "@8: 57 45 42 50"]));
    }
}
