// Copyright (c) 2024 The Fuego Developers

//! Output writers for detection results.
//!
//! This module provides different ways to print detection results:
//! - Text (key/value lines)
//! - JSON (single line or pretty-printed)

mod json;
mod text;

pub use json::JsonWriter;
pub use text::TextWriter;

use crate::config::OutputMode;
use fuego_burn_core::{BurnReport, ScanError};
use std::io::Write;

/// Message printed when a tx_extra carries no decodable commitment.
pub const NOT_A_BURN: &str = "not a burn transaction";

/// Trait for detection result writers.
pub trait ReportWriter {
    /// Write a detected burn.
    fn write_report(&self, out: &mut dyn Write, report: &BurnReport) -> anyhow::Result<()>;

    /// Write a negative result, with the scan failure when diagnostics were
    /// requested.
    fn write_not_found(&self, out: &mut dyn Write, reason: Option<&ScanError>)
        -> anyhow::Result<()>;

    /// Write an extracted destination address, or its absence.
    fn write_address(&self, out: &mut dyn Write, address: Option<&str>) -> anyhow::Result<()>;
}

/// Create a report writer for the configured output mode.
pub fn create_writer(output_mode: OutputMode) -> Box<dyn ReportWriter> {
    match output_mode {
        OutputMode::Text => Box::new(TextWriter),
        OutputMode::Json => Box::new(JsonWriter::new()),
        OutputMode::JsonPretty => Box::new(JsonWriter::pretty()),
    }
}
