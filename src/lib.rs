#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{
    CappedSegmentation, ConditionOutcome, any_divergence, any_divergence_reported,
    check_divergence, classify, evaluate_conditions, find_local_extremes, segment, segment_capped,
};
pub use config::{ANALYSIS, MacdPreset};
pub use data::SeriesFile;
pub use domain::{Candle, PairInterval};
pub use error::{DivergenceError, Result};
pub use models::{Direction, DivergenceFlags, MacdTimeSeries, RegionSummary, RegionTable};

// CLI argument parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "MACD divergence detection over precomputed series", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the two-timeframe, two-preset check and print true/false
    Any {
        /// Series file for the higher timeframe (.json or .bin)
        #[arg(long)]
        primary: PathBuf,
        /// Series file for the lower timeframe
        #[arg(long)]
        secondary: PathBuf,
        #[arg(long, value_enum)]
        direction: Direction,
    },
    /// Classify one series with one preset and print the label
    Check {
        #[arg(long)]
        series: PathBuf,
        #[arg(long, value_enum)]
        direction: Direction,
        /// One of low2, low1, def, high
        #[arg(long, default_value = "def")]
        preset: MacdPreset,
        #[arg(long, default_value_t = ANALYSIS.segmentation.default_zone_limit)]
        zone_limit: usize,
    },
    /// Print the region summary table
    Ranges {
        #[arg(long)]
        series: PathBuf,
        #[arg(long, default_value = "def")]
        preset: MacdPreset,
        #[arg(long, default_value_t = ANALYSIS.segmentation.default_zone_limit)]
        zone_limit: usize,
    },
    /// Segment with a length cap and print the extreme points of capped regions
    Extremes {
        #[arg(long)]
        series: PathBuf,
        #[arg(long, default_value = "def")]
        preset: MacdPreset,
        #[arg(long, default_value_t = ANALYSIS.segmentation.default_zone_limit)]
        zone_limit: usize,
        #[arg(long, default_value_t = ANALYSIS.capped.max_span)]
        max_span: usize,
    },
}
