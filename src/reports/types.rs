//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: table if TTY, summary otherwise
    #[default]
    Auto,
    /// One line per file, shell-friendly
    Summary,
    /// Aligned columns for terminal
    Table,
    /// Structured JSON output
    Json,
}

impl ReportFormat {
    /// Resolve `Auto` against the destination: table for an interactive
    /// terminal, summary otherwise.
    #[must_use]
    pub const fn resolve(self, interactive: bool) -> Self {
        match self {
            Self::Auto if interactive => Self::Table,
            Self::Auto => Self::Summary,
            other => other,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
