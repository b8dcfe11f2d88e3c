//! Length-capped variant of the range segmenter.
//!
//! Long one-sided MACD runs hide the swings inside them. Here a region is also
//! force-closed every `max_span` rows, and each region that hit the cap is
//! scanned for local peaks/troughs so those swings are not lost.

use serde::Serialize;

use crate::analysis::local_extrema::find_local_extremes;
use crate::analysis::range_segmenter::scan_regions;
use crate::config::{ANALYSIS, MacdPreset};
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_CAPPED_EXTREMES;
use crate::error::{DivergenceError, Result};
use crate::models::{ExtremePoint, MacdTimeSeries, RegionTable};

/// Output of [`segment_capped`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CappedSegmentation {
    /// Every region of the series. Not trimmed to a zone limit.
    pub regions: RegionTable,
    /// Extreme points of all cap-closed regions, most recent region first.
    pub extremes: Vec<ExtremePoint>,
}

/// Segments on oscillator sign and on `max_span`, then collects local extremes
/// from the regions that were closed by the cap.
///
/// `zone_limit` is accepted for symmetry with [`segment`](super::segment) but
/// is not applied; trimming the table is left to the caller.
pub fn segment_capped(
    series: &MacdTimeSeries,
    preset: MacdPreset,
    zone_limit: usize,
    max_span: usize,
) -> Result<CappedSegmentation> {
    if max_span == 0 {
        return Err(DivergenceError::InvalidParameter(
            "max_span must be at least 1".to_string(),
        ));
    }
    series.validate()?;
    let columns = series.oscillator_pair(preset)?.columns;
    let oscillator = series.column(columns.line)?;

    let regions = scan_regions(series, oscillator, Some(max_span));

    let mut extremes = Vec::new();
    for region in regions.iter().filter(|region| region.capped) {
        let found = find_local_extremes(
            series,
            (region.start_idx, region.end_idx),
            columns.line,
            region.sign.price_column().name(),
            ANALYSIS.capped.min_candles,
        )?;

        #[cfg(debug_assertions)]
        if PRINT_CAPPED_EXTREMES {
            log::info!(
                "{} [{}]: capped region {} rows [{}, {}) gave {} extreme points",
                series.pair_interval.short_label(),
                preset,
                region.region_index,
                region.start_idx,
                region.end_idx,
                found.len()
            );
        }

        extremes.extend(found);
    }

    log::debug!(
        "Capped segmentation: {} regions, {} extremes (zone_limit {} left to caller)",
        regions.len(),
        extremes.len(),
        zone_limit
    );

    Ok(CappedSegmentation {
        regions: RegionTable::new(regions),
        extremes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{series_from, series_with_oscillator, ts};
    use crate::models::{ExtremeKind, Sign};

    #[test]
    fn test_long_run_is_cut_at_max_span() {
        // 120 positive rows that wobble, so the oscillator has local swings
        let osc: Vec<f64> = (0..120)
            .map(|i| 2.0 + ((i as f64) * 0.9).sin())
            .collect();
        let series = series_with_oscillator(&osc);
        let capped = segment_capped(&series, MacdPreset::Def, 7, 50).unwrap();

        let spans: Vec<(usize, usize, bool)> = capped
            .regions
            .regions()
            .iter()
            .map(|r| (r.start_idx, r.end_idx, r.capped))
            .collect();
        assert_eq!(spans, vec![(70, 120, true), (20, 70, true), (0, 20, false)]);
        assert!(
            capped.regions.regions().iter().all(|r| r.sign == Sign::Positive),
            "no sign change anywhere"
        );

        assert!(!capped.extremes.is_empty());
        // Region 1's points come first and all of them lie inside rows 70..120
        let first = capped.extremes[0];
        assert!(first.time_ms >= ts(70));
        // Nothing from the uncapped oldest region
        assert!(capped.extremes.iter().all(|p| p.time_ms >= ts(20)));
    }

    #[test]
    fn test_negative_capped_regions_use_lows() {
        let osc = [-1.0, -2.0, -3.0, -2.0, -1.0, -1.0, -2.0, -3.0, -2.0, -1.0];
        let highs: Vec<f64> = (0..10).map(|i| 30.0 + i as f64).collect();
        let lows: Vec<f64> = (0..10).map(|i| 10.0 + i as f64).collect();
        let series = series_from(&osc, &highs, &lows);

        let capped = segment_capped(&series, MacdPreset::Def, 7, 5).unwrap();
        assert_eq!(capped.regions.len(), 2);
        assert!(capped.regions.regions().iter().all(|r| r.capped && r.len() == 5));

        let points: Vec<(i64, f64, ExtremeKind)> = capped
            .extremes
            .iter()
            .map(|p| (p.time_ms, p.price_extreme, p.kind))
            .collect();
        assert_eq!(
            points,
            vec![
                (ts(7), 17.0, ExtremeKind::Trough),
                (ts(2), 12.0, ExtremeKind::Trough),
            ]
        );
    }

    #[test]
    fn test_no_cap_hit_gives_empty_extremes() {
        let osc = [1.0, 2.0, -1.0, -2.0, 1.0, 0.5];
        let series = series_with_oscillator(&osc);
        let capped = segment_capped(&series, MacdPreset::Def, 7, 50).unwrap();

        assert_eq!(capped.regions.len(), 3);
        assert!(capped.regions.regions().iter().all(|r| !r.capped));
        assert!(capped.extremes.is_empty());
    }

    #[test]
    fn test_zone_limit_not_applied() {
        let osc: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let series = series_with_oscillator(&osc);
        let capped = segment_capped(&series, MacdPreset::Def, 7, 50).unwrap();
        assert_eq!(capped.regions.len(), 20);
        assert_eq!(capped.regions.rows().len(), 20);
    }

    #[test]
    fn test_sign_flip_on_cap_step_counts_as_capped() {
        // Scanning back from row 6, the fifth step lands on row 1: the cap is hit
        // and the sign flips there at the same time.
        let osc = [-1.0, -1.0, 1.0, 0.5, 3.0, 0.5, 1.0];
        let series = series_with_oscillator(&osc);
        let capped = segment_capped(&series, MacdPreset::Def, 7, 5).unwrap();

        let spans: Vec<(usize, usize, Sign, bool)> = capped
            .regions
            .regions()
            .iter()
            .map(|r| (r.start_idx, r.end_idx, r.sign, r.capped))
            .collect();
        assert_eq!(
            spans,
            vec![(2, 7, Sign::Positive, true), (0, 2, Sign::Negative, false)]
        );

        // Row 4 beats rows 2 and 6 by the two-row offset; highs are 100 + row
        let points: Vec<(i64, f64, ExtremeKind)> = capped
            .extremes
            .iter()
            .map(|p| (p.time_ms, p.price_extreme, p.kind))
            .collect();
        assert_eq!(points, vec![(ts(4), 104.0, ExtremeKind::Peak)]);
    }

    #[test]
    fn test_zero_max_span_rejected() {
        let series = series_with_oscillator(&[1.0, 2.0]);
        assert!(matches!(
            segment_capped(&series, MacdPreset::Def, 7, 0),
            Err(DivergenceError::InvalidParameter(_))
        ));
    }
}
