//! Identify command handler.
//!
//! Implements the `identify` subcommand: detect the format of one or more files,
//! optionally checking each against its own extension.

use super::{ensure_valid, ReportSink};
use crate::config::AppConfig;
use crate::error::Result;
use crate::pipeline::{exit_code_for, inspect_files, InspectOptions};
use std::path::PathBuf;

/// Run the identify command, returning the process exit code
///
/// Unreadable files are reported alongside the rest and yield the error exit
/// code. With `check_extensions`, a file without an extension is a mismatch.
#[allow(clippy::needless_pass_by_value)]
pub fn run_identify(paths: Vec<PathBuf>, check_extensions: bool, config: &AppConfig) -> Result<i32> {
    ensure_valid(config)?;
    tracing::info!("Identifying {} file(s)", paths.len());

    let options = InspectOptions {
        check_extension: check_extensions,
        claimed_extension: None,
        normalize: config.check.normalize_extensions,
        jobs: config.scan.jobs,
    };
    let reports = inspect_files(&paths, &options);

    let sink = ReportSink::new(&config.output);
    let content = sink.reporter().generate_files_report(&reports)?;
    sink.write(&content)?;

    Ok(exit_code_for(&reports, config.check.fail_on_unknown))
}
