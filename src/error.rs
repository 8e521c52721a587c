//! Error type for the imgsig command layer.
//!
//! Signature matching itself never fails and never returns these. They cover
//! what happens around it: reading files, loading configuration and rendering
//! reports.

use crate::config::ConfigFileError;
use crate::reports::ReportError;
use std::path::Path;
use thiserror::Error;

/// Errors raised by command handlers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ImgSigError {
    /// A file could not be read or written
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested config file could not be loaded
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),

    /// The effective configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid input from the caller
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A report could not be rendered
    #[error("Report generation failed")]
    Report(#[from] ReportError),
}

/// Convenient Result type for imgsig operations
pub type Result<T> = std::result::Result<T, ImgSigError>;

impl ImgSigError {
    /// A read failure on `path`.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            context: format!("Failed to read {}", path.display()),
            source,
        }
    }

    /// A write failure on `target`.
    pub fn write(target: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            context: format!("Failed to write output to {target}"),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| ImgSigError::Validation(f().into()))
    }
}
