//! File inspection: read a file, identify it and check its claimed extension.

use crate::signatures::{self, Aliases, ImageFormat};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options controlling how files are inspected
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Check each file against its own extension
    pub check_extension: bool,
    /// Explicit claimed extension, overrides the file's own
    pub claimed_extension: Option<String>,
    /// Normalize claimed extensions (case, leading dot) before matching
    pub normalize: bool,
    /// Worker threads for multi-file inspection (rayon default when unset)
    pub jobs: Option<usize>,
}

impl InspectOptions {
    /// Options that only identify files
    #[must_use]
    pub fn identify_only() -> Self {
        Self {
            normalize: true,
            ..Self::default()
        }
    }

    /// Options that check every file against a claimed extension
    #[must_use]
    pub fn check(claimed_extension: Option<String>, normalize: bool) -> Self {
        Self {
            check_extension: true,
            claimed_extension,
            normalize,
            jobs: None,
        }
    }

    fn wants_check(&self) -> bool {
        self.check_extension || self.claimed_extension.is_some()
    }
}

/// Outcome of inspecting one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Inspected path
    pub path: PathBuf,
    /// Detected format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    /// Extension aliases of the detected format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Aliases>,
    /// MIME type of the detected format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<&'static str>,
    /// Extension the file was checked against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_extension: Option<String>,
    /// Result of the extension check, when one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_matches: Option<bool>,
    /// Read failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            format: None,
            aliases: None,
            mime_type: None,
            claimed_extension: None,
            extension_matches: None,
            error: None,
        }
    }

    /// Whether a format was detected
    #[must_use]
    pub const fn is_identified(&self) -> bool {
        self.format.is_some()
    }

    /// Whether an extension check ran and failed
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        self.extension_matches == Some(false)
    }

    /// Whether the file could not be read
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Normalize an extension the way users write them.
///
/// Trims whitespace, strips one leading dot and lowercases ASCII letters.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    trimmed
        .strip_prefix('.')
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}

/// The extension of a path, without the dot.
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
}

/// Inspect a single file.
///
/// Read failures are recorded in the report rather than returned.
pub fn inspect_file(path: &Path, options: &InspectOptions) -> FileReport {
    match std::fs::read(path) {
        Ok(buf) => inspect_buffer(path, &buf, options),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            FileReport {
                error: Some(e.to_string()),
                ..FileReport::new(path)
            }
        }
    }
}

/// Inspect the already-read contents of `path`.
///
/// When a check is requested and there is neither an explicit claim nor a
/// file extension, the file counts as a mismatch.
pub fn inspect_buffer(path: &Path, buf: &[u8], options: &InspectOptions) -> FileReport {
    let mut report = FileReport::new(path);
    report.format = signatures::identify_format(buf);
    report.aliases = report.format.map(|f| f.aliases());
    report.mime_type = report.format.map(|f| f.mime_type());

    if options.wants_check() {
        let claimed = options
            .claimed_extension
            .clone()
            .or_else(|| extension_of(path))
            .map(|ext| {
                if options.normalize {
                    normalize_extension(&ext)
                } else {
                    ext
                }
            });

        report.extension_matches = Some(
            claimed
                .as_deref()
                .is_some_and(|ext| signatures::matches_extension(buf, ext)),
        );
        report.claimed_extension = claimed;
    }

    tracing::debug!(
        "{}: {} ({} bytes)",
        path.display(),
        report.format.map_or("unknown", |f| f.name()),
        buf.len()
    );

    report
}

/// Inspect many files in parallel, returning reports in input order.
pub fn inspect_files(paths: &[PathBuf], options: &InspectOptions) -> Vec<FileReport> {
    let run = || {
        paths
            .par_iter()
            .map(|path| inspect_file(path, options))
            .collect::<Vec<_>>()
    };

    match options.jobs {
        Some(jobs) => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                tracing::warn!("Failed to build {jobs}-thread pool, using default: {e}");
                run()
            }
        },
        None => run(),
    }
}
