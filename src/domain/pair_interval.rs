use serde::{Deserialize, Serialize};

use crate::utils::TimeUtils;

/// Symbol plus timeframe a series was sampled at, e.g. EURUSD on 4h candles.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
pub struct PairInterval {
    pub name: String,
    pub interval_ms: i64,
}

impl PairInterval {
    pub fn new(name: impl Into<String>, interval_ms: i64) -> Self {
        Self {
            name: name.into(),
            interval_ms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short label used in logs and reports, e.g. "EURUSD@4h"
    pub fn short_label(&self) -> String {
        format!(
            "{}@{}",
            self.name,
            TimeUtils::interval_ms_to_string(self.interval_ms)
        )
    }
}

impl std::fmt::Display for PairInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}, Interval: {}ms (or {})",
            self.name(),
            self.interval_ms,
            TimeUtils::interval_ms_to_string(self.interval_ms)
        )
    }
}
