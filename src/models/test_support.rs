//! Fixture builders shared by the unit tests.

use crate::config::MacdPreset;
use crate::domain::{Candle, PairInterval};
use crate::models::{MacdTimeSeries, RegionSummary};
use crate::utils::TimeUtils;

/// 2024-10-11 00:00 UTC
pub(crate) const T0: i64 = 1_728_604_800_000;

pub(crate) fn ts(row: usize) -> i64 {
    T0 + row as i64 * TimeUtils::MS_IN_H
}

/// Hourly series with explicit highs/lows and the `def` preset columns.
pub(crate) fn series_from(oscillator: &[f64], highs: &[f64], lows: &[f64]) -> MacdTimeSeries {
    assert_eq!(oscillator.len(), highs.len());
    assert_eq!(oscillator.len(), lows.len());

    let candles: Vec<Candle> = highs
        .iter()
        .zip(lows)
        .enumerate()
        .map(|(i, (&high, &low))| Candle::new(ts(i), low, high, low, high))
        .collect();

    let series = MacdTimeSeries::from_candles(
        PairInterval::new("EURUSD", TimeUtils::MS_IN_H),
        &candles,
    );
    with_preset(series, MacdPreset::Def, oscillator)
}

/// Highs climb by one per row, lows sit ten below.
pub(crate) fn series_with_oscillator(oscillator: &[f64]) -> MacdTimeSeries {
    let highs: Vec<f64> = (0..oscillator.len()).map(|i| 100.0 + i as f64).collect();
    let lows: Vec<f64> = highs.iter().map(|h| h - 10.0).collect();
    series_from(oscillator, &highs, &lows)
}

/// Adds the line and a zeroed signal column for `preset`.
pub(crate) fn with_preset(
    series: MacdTimeSeries,
    preset: MacdPreset,
    oscillator: &[f64],
) -> MacdTimeSeries {
    let columns = preset.columns();
    series
        .with_oscillator(columns.line, oscillator.to_vec())
        .with_oscillator(columns.signal, vec![0.0; oscillator.len()])
}

/// Hand-built region summaries, given chronologically (oldest first) as (price, oscillator).
pub(crate) fn summaries(rows: &[(f64, f64)]) -> Vec<RegionSummary> {
    let count = rows.len();
    rows.iter()
        .enumerate()
        .map(|(i, &(price, osc))| RegionSummary {
            range_extreme: price,
            oscillator_extreme: osc,
            region_index: count - i,
            extreme_time_ms: ts(i),
        })
        .collect()
}
