//! Configuration module for imgsig.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.imgsig.yaml` file in your project root or `~/.config/imgsig/`:
//!
//! ```yaml
//! output:
//!   format: json
//! check:
//!   fail_on_unknown: true
//! ```

use crate::reports::ReportError;

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, CheckConfig, OutputConfig, ScanConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.imgsig.yaml` files.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    let json = serde_json::to_string_pretty(&schema).map_err(ReportError::from)?;
    Ok(json)
}
