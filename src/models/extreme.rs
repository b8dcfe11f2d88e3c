use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ExtremeKind {
    #[strum(to_string = "peak")]
    Peak,
    #[strum(to_string = "trough")]
    Trough,
}

/// A local oscillator peak or trough inside an over-long region.
/// Columns: `time, oscillator_extreme, price_extreme, kind`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremePoint {
    pub time_ms: i64,
    pub oscillator_extreme: f64,
    pub price_extreme: f64,
    pub kind: ExtremeKind,
}
