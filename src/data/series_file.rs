use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SERDE;
use crate::config::{SERIES_PATH, SERIES_VERSION, series_file_name};
use crate::domain::PairInterval;
use crate::models::MacdTimeSeries;

/// On-disk container for one MACD series.
/// `.json` files go through serde_json, anything else through bincode.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeriesFile {
    pub version: f64,
    pub created_ms: i64,
    pub series: MacdTimeSeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Bincode,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Bincode,
        }
    }
}

impl SeriesFile {
    pub fn new(series: MacdTimeSeries) -> Self {
        Self {
            version: SERIES_VERSION,
            created_ms: Utc::now().timestamp_millis(),
            series,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open series file: {:?}", path))?;
        let reader = BufReader::new(file);

        let loaded: SeriesFile = match Format::of(path) {
            Format::Json => serde_json::from_reader(reader)
                .context(format!("Failed to parse JSON series: {:?}", path))?,
            Format::Bincode => bincode::deserialize_from(reader)
                .context(format!("Failed to deserialize series: {:?}", path))?,
        };

        if loaded.version != SERIES_VERSION {
            bail!(
                "Series file version mismatch: file v{} vs required v{}",
                loaded.version,
                SERIES_VERSION
            );
        }
        loaded
            .series
            .validate()
            .context(format!("Series in {:?} is malformed", path))?;

        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!(
                "Loaded {} ({} rows, {} oscillator columns) from {:?}",
                loaded.series.pair_interval.short_label(),
                loaded.series.klines(),
                loaded.series.oscillators.len(),
                path
            );
        }

        Ok(loaded)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        match Format::of(path) {
            Format::Json => serde_json::to_writer_pretty(&mut writer, self)
                .context(format!("Failed to write JSON series to: {}", path.display()))?,
            Format::Bincode => bincode::serialize_into(&mut writer, self)
                .context(format!("Failed to serialize series to: {}", path.display()))?,
        }

        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!("Wrote {} to {}", self.series.pair_interval.short_label(), path.display());
        }

        Ok(())
    }

    pub fn default_path(pair_interval: &PairInterval, extension: &str) -> PathBuf {
        PathBuf::from(SERIES_PATH).join(series_file_name(
            pair_interval.name(),
            pair_interval.interval_ms,
            extension,
        ))
    }
}
