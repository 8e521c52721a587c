//! Configuration types for imgsig operations.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override file settings (see [`AppConfig::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Extension checking behavior
    pub check: CheckConfig,
    /// Multi-file scanning behavior
    pub scan: ScanConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Normalize claimed extensions before matching.
    pub const fn normalize_extensions(mut self, normalize: bool) -> Self {
        self.config.check.normalize_extensions = normalize;
        self
    }

    /// Treat unidentified files as failures.
    pub const fn fail_on_unknown(mut self, fail: bool) -> Self {
        self.config.check.fail_on_unknown = fail;
        self
    }

    /// Set the number of worker threads.
    pub const fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.config.scan.jobs = jobs;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Extension checking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CheckConfig {
    /// Lowercase and strip a leading dot from claimed extensions
    pub normalize_extensions: bool,
    /// Exit with a failure code when a file's format is not recognized
    pub fail_on_unknown: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            normalize_extensions: true,
            fail_on_unknown: false,
        }
    }
}

/// Multi-file scanning configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScanConfig {
    /// Worker threads (defaults to the number of CPUs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.output.format, ReportFormat::Auto);
        assert!(config.check.normalize_extensions);
        assert!(!config.check.fail_on_unknown);
        assert_eq!(config.scan.jobs, None);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .no_color(true)
            .normalize_extensions(false)
            .fail_on_unknown(true)
            .jobs(Some(4))
            .build();

        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(!config.check.normalize_extensions);
        assert!(config.check.fail_on_unknown);
        assert_eq!(config.scan.jobs, Some(4));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("check:\n  fail_on_unknown: true\n").expect("parse yaml");
        assert!(config.check.fail_on_unknown);
        assert!(config.check.normalize_extensions);
        assert_eq!(config.output, OutputConfig::default());
    }
}
