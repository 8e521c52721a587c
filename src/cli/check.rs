//! Check command handler.
//!
//! Implements the `check` subcommand: does a file's content match the
//! extension claimed for it?

use super::{ensure_valid, ReportSink};
use crate::config::AppConfig;
use crate::error::{ImgSigError, OptionContext, Result};
use crate::pipeline::{
    exit_code_for, extension_of, inspect_buffer, normalize_extension, InspectOptions,
};
use std::path::PathBuf;

/// Run the check command, returning the process exit code
///
/// The claimed extension defaults to the file's own extension. Unlike
/// `identify`, a missing extension or an unreadable file is an error here.
#[allow(clippy::needless_pass_by_value)]
pub fn run_check(path: PathBuf, ext: Option<String>, config: &AppConfig) -> Result<i32> {
    ensure_valid(config)?;

    let claimed = ext
        .or_else(|| extension_of(&path))
        .with_context_none(|| format!("{} has no extension; pass --ext", path.display()))?;

    let normalized = if config.check.normalize_extensions {
        normalize_extension(&claimed)
    } else {
        claimed
    };
    if normalized.is_empty() {
        return Err(ImgSigError::validation("Claimed extension must not be empty"));
    }

    let buf = std::fs::read(&path).map_err(|e| ImgSigError::read(&path, e))?;
    let options = InspectOptions::check(Some(normalized), false);
    let reports = [inspect_buffer(&path, &buf, &options)];

    let sink = ReportSink::new(&config.output);
    let content = sink.reporter().generate_files_report(&reports)?;
    sink.write(&content)?;

    Ok(exit_code_for(&reports, config.check.fail_on_unknown))
}
