//! SnipGuard CLI
//!
//! Command-line front-end over the scanning engine: scan text for
//! secrets, mask it, or print remediation advice.

use anyhow::Result;
use clap::{Parser, Subcommand};
use snipguard_core::MaskConfig;
use snipguard_engine::{recommendations, stats, SecretScanner};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snipguard")]
#[command(about = "SnipGuard - Secret detection and masking for code snippets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Custom pattern as name=regex; may be repeated
    #[arg(long = "pattern", global = true, value_name = "NAME=REGEX")]
    patterns: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect secrets and print a report
    Scan {
        /// File to scan; reads stdin when omitted
        file: Option<PathBuf>,

        /// Emit detections and stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a masked copy of the input
    Mask {
        /// File to mask; reads stdin when omitted
        file: Option<PathBuf>,

        /// Character used to fill masked spans
        #[arg(long, default_value = "*")]
        mask_char: char,

        /// Leading characters left visible
        #[arg(long, default_value = "4")]
        show_first: usize,

        /// Trailing characters left visible
        #[arg(long, default_value = "4")]
        show_last: usize,

        /// Replace values with fixed-width fillers instead of
        /// length-preserving masks
        #[arg(long)]
        no_preserve_length: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut scanner = SecretScanner::new();
    for spec in &cli.patterns {
        let (name, pattern) = spec
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("pattern must be NAME=REGEX, got '{spec}'"))?;
        scanner.register_pattern(name, pattern)?;
    }

    match cli.command {
        Commands::Scan { file, json } => {
            let content = read_input(file.as_deref())?;
            let result = scanner.detect(&content);
            let stats = stats(&result.detections);

            if json {
                let report = serde_json::json!({
                    "detections": result.detections,
                    "diagnostics": result.diagnostics,
                    "stats": stats,
                    "recommendations": recommendations(&result.detections),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for d in &result.detections {
                    println!(
                        "{:>6}  {:<24} confidence {:.2}",
                        d.position,
                        d.kind.name(),
                        d.confidence
                    );
                }
                println!(
                    "\n{} detection(s): {} high / {} medium / {} low",
                    stats.total,
                    stats.high_confidence,
                    stats.medium_confidence,
                    stats.low_confidence
                );
                for advice in recommendations(&result.detections) {
                    println!("  - {advice}");
                }
                for diag in &result.diagnostics {
                    eprintln!("warning: {} skipped: {}", diag.pattern, diag.reason);
                }
            }
        }
        Commands::Mask {
            file,
            mask_char,
            show_first,
            show_last,
            no_preserve_length,
        } => {
            let content = read_input(file.as_deref())?;
            let config = MaskConfig {
                mask_char,
                preserve_length: !no_preserve_length,
                show_first,
                show_last,
            };
            let outcome = scanner.mask(&content, &config);
            tracing::info!(masked = outcome.masked_count, "masking complete");
            print!("{}", outcome.content);
        }
    }

    Ok(())
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
