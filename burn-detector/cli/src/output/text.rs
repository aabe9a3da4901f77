// Copyright (c) 2024 The Fuego Developers

//! Plain text writer.

use super::{ReportWriter, NOT_A_BURN};
use fuego_burn_core::{BurnReport, ScanError};
use std::io::Write;

/// Writer that prints reports as aligned key/value lines.
pub struct TextWriter;

impl ReportWriter for TextWriter {
    fn write_report(&self, out: &mut dyn Write, report: &BurnReport) -> anyhow::Result<()> {
        writeln!(out, "Burn transaction detected")?;
        writeln!(out, "  Type:            {}", report.kind)?;
        writeln!(out, "  Commitment hash: {}", report.commitment_hash)?;
        writeln!(out, "  Amount:          {} atomic units", report.amount)?;
        writeln!(out, "  Metadata size:   {}", report.metadata_size)?;
        if !report.metadata.is_empty() {
            writeln!(out, "  Metadata:        {}", report.metadata)?;
        }
        if let Some(address) = &report.destination_address {
            writeln!(out, "  Destination:     {}", address)?;
        }
        Ok(())
    }

    fn write_not_found(
        &self,
        out: &mut dyn Write,
        reason: Option<&ScanError>,
    ) -> anyhow::Result<()> {
        match reason {
            Some(reason) => writeln!(out, "{} ({})", NOT_A_BURN, reason)?,
            None => writeln!(out, "{}", NOT_A_BURN)?,
        }
        Ok(())
    }

    fn write_address(&self, out: &mut dyn Write, address: Option<&str>) -> anyhow::Result<()> {
        match address {
            Some(address) => writeln!(out, "{}", address)?,
            None => writeln!(out, "no destination address found")?,
        }
        Ok(())
    }
}
