//! File persistence and serialization configuration

/// Directory path for storing series files
pub const SERIES_PATH: &str = "series_data";

/// Current version of the series file format
pub const SERIES_VERSION: f64 = 1.0;

use crate::utils::TimeUtils;

/// Generate a pair- and interval-specific series filename
/// Example: "BTCUSDT_4h_v1.json" or "BTCUSDT_1h_v1.bin"
pub fn series_file_name(pair_name: &str, interval_ms: i64, extension: &str) -> String {
    let interval_str = TimeUtils::interval_ms_to_string(interval_ms);
    format!(
        "{}_{}_v{}.{}",
        pair_name, interval_str, SERIES_VERSION, extension
    )
}
