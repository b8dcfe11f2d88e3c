use crate::error::Result;
use crate::models::{ExtremeKind, ExtremePoint, MacdTimeSeries};

/// Finds local oscillator peaks/troughs inside the row span `[start, end)`.
///
/// A row is a peak when its oscillator value is strictly above the values
/// exactly `min_candles` rows before and after it, a trough when strictly
/// below both. Rows without `min_candles` neighbours on each side inside the
/// span are never reported. Points come back in row order.
pub fn find_local_extremes(
    series: &MacdTimeSeries,
    (start, end): (usize, usize),
    oscillator_col: &str,
    price_col: &str,
    min_candles: usize,
) -> Result<Vec<ExtremePoint>> {
    let oscillator = &series.column(oscillator_col)?[start..end];
    let prices = &series.column(price_col)?[start..end];
    let times = &series.timestamps[start..end];

    let mut extremes = Vec::new();
    let len = oscillator.len();

    for i in min_candles..len.saturating_sub(min_candles) {
        let value = oscillator[i];
        let before = oscillator[i - min_candles];
        let after = oscillator[i + min_candles];

        let kind = if value > before && value > after {
            ExtremeKind::Peak
        } else if value < before && value < after {
            ExtremeKind::Trough
        } else {
            continue;
        };

        extremes.push(ExtremePoint {
            time_ms: times[i],
            oscillator_extreme: value,
            price_extreme: prices[i],
            kind,
        });
    }

    Ok(extremes)
}
