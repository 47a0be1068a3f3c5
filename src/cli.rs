//! CLI argument parsing for Cordura

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for classification results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "cordura")]
#[command(version)]
#[command(about = "Healthcare scorecard sanity classifier", long_about = None)]
pub struct Cli {
    /// Scorecard CSV to analyze (columns: pavilion, metric, abbrev, period, value)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Only analyze metrics tracked at this pavilion
    #[arg(short = 'p', long = "pavilion", value_name = "NAME")]
    pub pavilion: Option<String>,

    /// Only analyze this metric
    #[arg(short = 'm', long = "metric", value_name = "NAME")]
    pub metric: Option<String>,

    /// Enable debug tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
