//! Configuration module for the divergence analysis.

pub mod analysis;
pub mod debug; // Call sites use crate::config::debug::PRINT_* so the flag is obvious where it is read
pub mod oscillator;
pub mod persistence;

// Re-export commonly used items
pub use analysis::{
    ANALYSIS, AggregatorSettings, AnalysisConfig, CappedSettings, ClassifierSettings,
    SegmentationSettings,
};
pub use oscillator::{MacdColumns, MacdPreset};
pub use persistence::{SERIES_PATH, SERIES_VERSION, series_file_name};
