// Copyright (c) 2024 The Fuego Developers

//! JSON writer.
//!
//! Outputs results as JSON objects, suitable for piping to other tools.

use super::ReportWriter;
use fuego_burn_core::{BurnReport, ScanError};
use serde_json::json;
use std::io::Write;

/// Writer that prints results as JSON.
pub struct JsonWriter {
    /// Whether to use pretty printing
    pretty: bool,
}

impl JsonWriter {
    /// Create a new single-line JSON writer.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a new JSON writer with pretty printing.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn emit(&self, out: &mut dyn Write, value: &serde_json::Value) -> anyhow::Result<()> {
        let output = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        writeln!(out, "{}", output)?;
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for JsonWriter {
    fn write_report(&self, out: &mut dyn Write, report: &BurnReport) -> anyhow::Result<()> {
        self.emit(out, &serde_json::to_value(report)?)
    }

    fn write_not_found(
        &self,
        out: &mut dyn Write,
        reason: Option<&ScanError>,
    ) -> anyhow::Result<()> {
        let value = match reason {
            Some(reason) => json!({ "is_burn": false, "reason": reason.to_string() }),
            None => json!({ "is_burn": false }),
        };
        self.emit(out, &value)
    }

    fn write_address(&self, out: &mut dyn Write, address: Option<&str>) -> anyhow::Result<()> {
        self.emit(out, &json!({ "destination_address": address }))
    }
}
