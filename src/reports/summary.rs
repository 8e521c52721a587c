//! Summary and table report generators for shell output.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::FileReport;
use crate::signatures::Registry;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Status label and its color for one report.
fn status_of(report: &FileReport) -> (&'static str, &'static str) {
    if report.is_error() {
        ("ERROR", "red")
    } else if report.is_mismatch() {
        ("MISMATCH", "red")
    } else if !report.is_identified() {
        ("UNKNOWN", "yellow")
    } else if report.extension_matches == Some(true) {
        ("OK", "green")
    } else {
        ("FOUND", "cyan")
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_files_report(&self, reports: &[FileReport]) -> Result<String, ReportError> {
        if reports.is_empty() {
            return Ok(self.color("No files inspected", "dim"));
        }

        let lines: Vec<String> = reports
            .iter()
            .map(|report| {
                let (status, color) = status_of(report);
                let detail = match (&report.error, report.format) {
                    (Some(error), _) => error.clone(),
                    (None, Some(format)) => match (&report.claimed_extension, report.is_mismatch()) {
                        (Some(ext), true) => format!("{} (claimed .{ext})", format.aliases()),
                        _ => format.aliases().to_string(),
                    },
                    (None, None) => match &report.claimed_extension {
                        Some(ext) => format!("unknown (claimed .{ext})"),
                        None => "unknown".to_string(),
                    },
                };
                format!(
                    "{}: {} {}",
                    report.path.display(),
                    self.color(status, color),
                    detail
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn generate_formats_report(&self, registry: &Registry) -> Result<String, ReportError> {
        let lines: Vec<String> = registry
            .testers()
            .iter()
            .map(|tester| {
                format!(
                    "{}: {}",
                    self.color(tester.format.name(), "bold"),
                    tester.format.aliases()
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_files_report(&self, reports: &[FileReport]) -> Result<String, ReportError> {
        let path_width = reports
            .iter()
            .map(|r| r.path.display().to_string().chars().count())
            .max()
            .unwrap_or(0)
            .clamp(4, 60);

        let mut lines = Vec::new();
        lines.push(self.color(
            &format!(
                "{:<10} {:<path_width$} {:<8} {:<12} {}",
                "STATUS", "FILE", "FORMAT", "MIME", "CLAIMED"
            ),
            "bold",
        ));
        lines.push("─".repeat(10 + path_width + 8 + 12 + 12));

        for report in reports {
            let (status, color) = status_of(report);
            let path = truncate(&report.path.display().to_string(), path_width);
            let format = report.format.map_or("-", |f| f.name());
            let mime = report.mime_type.unwrap_or("-");
            let claimed = report.claimed_extension.as_deref().unwrap_or("-");
            lines.push(format!(
                "{} {:<path_width$} {:<8} {:<12} {}",
                self.color(&format!("{status:<10}"), color),
                path,
                format,
                mime,
                claimed
            ));
        }

        let identified = reports.iter().filter(|r| r.is_identified()).count();
        lines.push(String::new());
        lines.push(format!(
            "{} of {} files identified",
            identified,
            reports.len()
        ));

        Ok(lines.join("\n"))
    }

    fn generate_formats_report(&self, registry: &Registry) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color(
            &format!(
                "{:<3} {:<6} {:<10} {:<12} {}",
                "#", "FORMAT", "ALIASES", "MIME", "SIGNATURES"
            ),
            "bold",
        ));
        lines.push("─".repeat(72));

        for (i, tester) in registry.testers().iter().enumerate() {
            let mut rule: Vec<String> = tester.all_of.iter().map(ToString::to_string).collect();
            if !tester.any_of.is_empty() {
                let alternatives: Vec<String> =
                    tester.any_of.iter().map(ToString::to_string).collect();
                rule.push(format!("({})", alternatives.join(" | ")));
            }
            lines.push(format!(
                "{:<3} {:<6} {:<10} {:<12} {}",
                i + 1,
                tester.format.name(),
                tester.format.aliases().as_slice().join(","),
                tester.format.mime_type(),
                rule.join(" & ")
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::ImageFormat;
    use std::path::PathBuf;

    fn identified(path: &str, format: ImageFormat, claimed: Option<&str>) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            format: Some(format),
            aliases: Some(format.aliases()),
            mime_type: Some(format.mime_type()),
            claimed_extension: claimed.map(str::to_string),
            extension_matches: claimed.map(|ext| format.aliases().contains(ext)),
            error: None,
        }
    }

    #[test]
    fn test_summary_lines() {
        let reports = vec![
            identified("a.jpeg", ImageFormat::Jpeg, Some("jpeg")),
            identified("b.png", ImageFormat::Bmp, Some("png")),
            identified("c", ImageFormat::Gif, None),
        ];
        let out = SummaryReporter::new()
            .no_color()
            .generate_files_report(&reports)
            .expect("generate summary");

        assert_eq!(
            out,
            "a.jpeg: OK jpg, jpeg\nb.png: MISMATCH bmp (claimed .png)\nc: FOUND gif"
        );
    }

    #[test]
    fn test_summary_unknown_and_error() {
        let unknown = FileReport {
            path: PathBuf::from("blob.bin"),
            format: None,
            aliases: None,
            mime_type: None,
            claimed_extension: None,
            extension_matches: None,
            error: None,
        };
        let failed = FileReport {
            path: PathBuf::from("gone.png"),
            error: Some("No such file or directory (os error 2)".to_string()),
            ..unknown.clone()
        };
        let out = SummaryReporter::new()
            .no_color()
            .generate_files_report(&[unknown, failed])
            .expect("generate summary");

        assert_eq!(
            out,
            "blob.bin: UNKNOWN unknown\ngone.png: ERROR No such file or directory (os error 2)"
        );
    }

    #[test]
    fn test_summary_colored_status() {
        let out = SummaryReporter::new()
            .generate_files_report(&[identified("a.gif", ImageFormat::Gif, Some("gif"))])
            .expect("generate summary");
        assert!(out.contains("\x1b[32mOK\x1b[0m"));
    }

    #[test]
    fn test_table_footer() {
        let reports = vec![identified("photo.webp", ImageFormat::Webp, Some("webp"))];
        let out = TableReporter::new()
            .no_color()
            .generate_files_report(&reports)
            .expect("generate table");

        assert!(out.starts_with("STATUS"));
        assert!(out.contains("image/webp"));
        assert!(out.ends_with("1 of 1 files identified"));
    }

    #[test]
    fn test_table_formats_listing() {
        let out = TableReporter::new()
            .no_color()
            .generate_formats_report(Registry::builtin())
            .expect("generate formats");

        assert!(out.contains("jpg,jpeg"));
        assert!(out.contains("@0: FF D8 FF & (@6: 4A 46 49 46 | @6: 45 78 69 66)"));
        assert_eq!(out.lines().count(), 2 + 6);
    }

    #[test]
    fn test_summary_formats_listing() {
        let out = SummaryReporter::new()
            .no_color()
            .generate_formats_report(Registry::builtin())
            .expect("generate formats");
        assert_eq!(out.lines().next(), Some("PNG: png"));
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-file-name.png", 10), "a-very-...");
    }
}
