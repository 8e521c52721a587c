//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod check;
mod formats;
mod identify;

pub use check::run_check;
pub use formats::run_formats;
pub use identify::run_identify;

// Re-export config types used by handlers
pub use crate::config::AppConfig;

use crate::config::{OutputConfig, Validatable};
use crate::error::{ImgSigError, Result};
use crate::reports::{create_reporter, ReportFormat, ReportGenerator};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Reject an invalid effective configuration before doing any work.
fn ensure_valid(config: &AppConfig) -> Result<()> {
    match config.validate().first() {
        Some(first) => Err(ImgSigError::config(first.to_string())),
        None => Ok(()),
    }
}

/// Where a command's report goes and how it is rendered.
struct ReportSink {
    file: Option<PathBuf>,
    format: ReportFormat,
    colored: bool,
}

impl ReportSink {
    fn new(output: &OutputConfig) -> Self {
        let interactive = output.file.is_none() && std::io::stdout().is_terminal();
        Self {
            file: output.file.clone(),
            format: output.format.resolve(interactive),
            colored: interactive && !output.no_color,
        }
    }

    fn reporter(&self) -> Box<dyn ReportGenerator> {
        create_reporter(self.format, self.colored)
    }

    fn write(&self, content: &str) -> Result<()> {
        match &self.file {
            Some(path) => {
                std::fs::write(path, content)
                    .map_err(|e| ImgSigError::write(path.display(), e))?;
                tracing::info!("Report written to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{content}").map_err(|e| ImgSigError::write("stdout", e))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_is_never_interactive() {
        let output = OutputConfig {
            format: ReportFormat::Auto,
            file: Some(PathBuf::from("/tmp/report.txt")),
            no_color: false,
        };
        let sink = ReportSink::new(&output);
        assert_eq!(sink.format, ReportFormat::Summary);
        assert!(!sink.colored);
    }

    #[test]
    fn test_sink_writes_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.txt");
        let output = OutputConfig {
            format: ReportFormat::Json,
            file: Some(path.clone()),
            no_color: true,
        };
        ReportSink::new(&output).write("hello").expect("write output");
        assert_eq!(std::fs::read_to_string(path).expect("read back"), "hello");
    }

    #[test]
    fn test_sink_write_into_directory_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = OutputConfig {
            format: ReportFormat::Json,
            file: Some(dir.path().to_path_buf()),
            no_color: true,
        };
        let err = ReportSink::new(&output).write("hello").expect_err("directory target");
        assert!(matches!(err, ImgSigError::Io { .. }));
    }

    #[test]
    fn test_ensure_valid_rejects_zero_jobs() {
        let config = AppConfig::builder().jobs(Some(0)).build();
        let err = ensure_valid(&config).expect_err("zero jobs");
        assert_eq!(err.to_string(), "Invalid configuration: scan.jobs: Worker count must be at least 1");
    }
}
