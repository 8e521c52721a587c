//! Pipeline orchestration for file inspection.
//!
//! Shared read → identify → check logic and exit codes used by the CLI
//! command handlers.

mod inspect;

pub use inspect::{
    extension_of, inspect_buffer, inspect_file, inspect_files, normalize_extension, FileReport,
    InspectOptions,
};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - every file identified and matched its extension
    pub const SUCCESS: i32 = 0;
    /// A file did not match its claimed extension (or was unknown with `--fail-on-unknown`)
    pub const MISMATCH: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Compute the process exit code for a set of reports.
///
/// Read errors take precedence over mismatches.
#[must_use]
pub fn exit_code_for(reports: &[FileReport], fail_on_unknown: bool) -> i32 {
    if reports.iter().any(FileReport::is_error) {
        exit_codes::ERROR
    } else if reports
        .iter()
        .any(|r| r.is_mismatch() || (fail_on_unknown && !r.is_identified()))
    {
        exit_codes::MISMATCH
    } else {
        exit_codes::SUCCESS
    }
}
