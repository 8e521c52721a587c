//! Formats command handler.
//!
//! Lists the builtin registry in priority order.

use super::{ensure_valid, ReportSink};
use crate::config::AppConfig;
use crate::error::Result;
use crate::signatures::Registry;

/// Run the formats command
pub fn run_formats(config: &AppConfig) -> Result<()> {
    ensure_valid(config)?;

    let sink = ReportSink::new(&config.output);
    let content = sink.reporter().generate_formats_report(Registry::builtin())?;
    sink.write(&content)
}
