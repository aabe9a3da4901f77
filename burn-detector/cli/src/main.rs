// Copyright (c) 2024 The Fuego Developers

//! Fuego burn detector CLI
//!
//! Detects HEAT burn commitments in raw `tx_extra` data.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fuego_burn_core::{extract_destination_address, scan_detailed, BurnReport, CommitmentRecord};

mod config;
mod output;

use config::DetectorConfig;
use output::create_writer;

#[derive(Parser)]
#[command(name = "fuego-burn")]
#[command(about = "Burn transaction detector for Fuego tx_extra data")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "burn-detector.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Where the bytes to inspect come from.
#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["hex", "file"])))]
struct InputArgs {
    /// Hex-encoded bytes (an optional 0x prefix is ignored)
    #[arg(long)]
    hex: Option<String>,

    /// File containing hex-encoded bytes
    #[arg(long)]
    file: Option<PathBuf>,

    /// Treat --file as raw binary instead of hex text
    #[arg(long, requires = "file")]
    raw: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a tx_extra buffer for a HEAT burn commitment
    Detect {
        #[command(flatten)]
        input: InputArgs,

        /// Report why a buffer is not a burn
        #[arg(long)]
        diagnose: bool,
    },

    /// Look for an Ethereum destination address in commitment metadata
    ExtractAddress {
        /// Hex-encoded metadata bytes
        #[arg(long, conflicts_with = "text", required_unless_present = "text")]
        hex: Option<String>,

        /// Metadata as plain text
        #[arg(long)]
        text: Option<String>,
    },

    /// Encode a HEAT commitment record as tx_extra hex
    Encode {
        /// Commitment hash (64 hex characters)
        #[arg(long)]
        hash: String,

        /// Burned amount in atomic units
        #[arg(long)]
        amount: u64,

        /// Metadata text, at most 255 bytes
        #[arg(long, default_value = "")]
        metadata: String,
    },

    /// Validate configuration file
    ValidateConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli.log_level)?;

    let config = match DetectorConfig::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            if matches!(cli.command, Commands::ValidateConfig) {
                eprintln!("Configuration validation failed: {}", e);
                std::process::exit(1);
            }
            anyhow::bail!("Failed to load config from {:?}: {}", cli.config, e);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Detect { input, diagnose } => detect(&config, &input, diagnose, &mut out),
        Commands::ExtractAddress { hex, text } => {
            let metadata = match (hex, text) {
                (Some(hex), _) => decode_hex(&hex)?,
                (None, Some(text)) => text.into_bytes(),
                (None, None) => anyhow::bail!("either --hex or --text is required"),
            };
            create_writer(config.output_mode)
                .write_address(&mut out, extract_destination_address(&metadata).as_deref())
        }
        Commands::Encode {
            hash,
            amount,
            metadata,
        } => encode(&hash, amount, &metadata, &mut out),
        Commands::ValidateConfig => {
            writeln!(out, "Configuration is valid.")?;
            writeln!(out, "  Output mode: {:?}", config.output_mode)?;
            writeln!(out, "  Extract address: {}", config.extract_address)?;
            writeln!(out, "  Max tx_extra bytes: {}", config.max_extra_bytes)?;
            Ok(())
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}

fn detect(
    config: &DetectorConfig,
    input: &InputArgs,
    diagnose: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let extra = read_input(input)?;
    if extra.len() > config.max_extra_bytes {
        anyhow::bail!(
            "tx_extra is {} bytes, limit is {} (max_extra_bytes)",
            extra.len(),
            config.max_extra_bytes
        );
    }
    tracing::debug!("Scanning {} bytes of tx_extra", extra.len());

    let writer = create_writer(config.output_mode);
    match scan_detailed(&extra) {
        Ok(record) => {
            let report = BurnReport::for_record(&record, config.extract_address);
            tracing::info!(
                "Found HEAT commitment {} for {} atomic units",
                report.commitment_hash,
                report.amount
            );
            writer.write_report(out, &report)
        }
        Err(reason) => {
            tracing::debug!("No burn detected: {}", reason);
            writer.write_not_found(out, diagnose.then_some(&reason))
        }
    }
}

fn encode(hash: &str, amount: u64, metadata: &str, out: &mut dyn Write) -> Result<()> {
    let commitment_hash: [u8; 32] = decode_hex(hash)?
        .try_into()
        .map_err(|_| anyhow::anyhow!("commitment hash must be 32 bytes"))?;

    let record = CommitmentRecord::new(commitment_hash, amount, metadata.as_bytes().to_vec())?;
    writeln!(out, "{}", hex::encode(record.to_extra_bytes()?))?;
    Ok(())
}

fn read_input(input: &InputArgs) -> Result<Vec<u8>> {
    match (&input.hex, &input.file) {
        (Some(hex), _) => decode_hex(hex),
        (None, Some(path)) if input.raw => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))
        }
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            decode_hex(&content)
        }
        (None, None) => anyhow::bail!("either --hex or --file is required"),
    }
}

fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| anyhow::anyhow!("invalid hex input: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex(" 0a0b\n").unwrap(), vec![0x0a, 0x0b]);
        assert!(decode_hex("0xzz").is_err());
    }

    #[test]
    fn test_encode_then_detect() {
        let mut encoded = Vec::new();
        encode(&"11".repeat(32), 1_000_000, "hi", &mut encoded).unwrap();
        let encoded_hex = String::from_utf8(encoded).unwrap();

        let input = InputArgs {
            hex: Some(encoded_hex.trim().to_string()),
            file: None,
            raw: false,
        };
        let config = DetectorConfig {
            output_mode: config::OutputMode::Json,
            ..Default::default()
        };
        let mut out = Vec::new();
        detect(&config, &input, false, &mut out).unwrap();

        let report: BurnReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.amount, 1_000_000);
        assert_eq!(report.metadata, hex::encode("hi"));
    }

    #[test]
    fn test_encode_rejects_short_hash() {
        let mut out = Vec::new();
        assert!(encode("abcd", 1, "", &mut out).is_err());
    }

    #[test]
    fn test_detect_enforces_size_limit() {
        let input = InputArgs {
            hex: Some("00".repeat(16)),
            file: None,
            raw: false,
        };
        let config = DetectorConfig {
            max_extra_bytes: 8,
            ..Default::default()
        };
        let mut out = Vec::new();
        assert!(detect(&config, &input, false, &mut out).is_err());
    }
}
