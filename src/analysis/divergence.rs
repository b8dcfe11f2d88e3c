//! Regular / hidden divergence classification over recent region extremes.

use std::cmp::Ordering;

use crate::analysis::range_segmenter::segment;
use crate::config::{ANALYSIS, MacdPreset};
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_CLASSIFICATION;
use crate::error::Result;
use crate::models::{
    Direction, DivergenceFlags, DivergenceKind, MacdTimeSeries, RecentExtremes, RegionSummary,
};

/// Side of the zero line both compared extremes must sit on (strictly).
#[derive(Debug, Clone, Copy)]
enum ZeroSide {
    Above,
    Below,
}

impl ZeroSide {
    fn holds(self, value: f64) -> bool {
        match self {
            ZeroSide::Above => value > 0.0,
            ZeroSide::Below => value < 0.0,
        }
    }
}

/// One geometric test between a nearer and a farther region extreme.
struct PairRule {
    side: ZeroSide,
    /// Required ordering of nearer price vs farther price
    price: Ordering,
    /// Required ordering of nearer oscillator vs farther oscillator
    oscillator: Ordering,
}

impl PairRule {
    fn matches(&self, recent: &RecentExtremes, near: usize, far: usize) -> bool {
        let (Some(n), Some(f)) = (recent.lag(near), recent.lag(far)) else {
            return false;
        };
        self.side.holds(n.oscillator_extreme)
            && self.side.holds(f.oscillator_extreme)
            && n.range_extreme.partial_cmp(&f.range_extreme) == Some(self.price)
            && n.oscillator_extreme.partial_cmp(&f.oscillator_extreme) == Some(self.oscillator)
    }
}

// Higher price peak, lower MACD peak
const BEARISH_REGULAR: PairRule = PairRule {
    side: ZeroSide::Above,
    price: Ordering::Greater,
    oscillator: Ordering::Less,
};

// Lower price trough, higher MACD trough
const BULLISH_REGULAR: PairRule = PairRule {
    side: ZeroSide::Below,
    price: Ordering::Less,
    oscillator: Ordering::Greater,
};

// Higher price trough, lower MACD trough
const BULLISH_HIDDEN: PairRule = PairRule {
    side: ZeroSide::Below,
    price: Ordering::Greater,
    oscillator: Ordering::Less,
};

// Lower price peak, higher MACD peak
const BEARISH_HIDDEN: PairRule = PairRule {
    side: ZeroSide::Above,
    price: Ordering::Less,
    oscillator: Ordering::Greater,
};

/// Classifies a region summary table (as returned by
/// [`RegionTable::summaries`](crate::models::RegionTable::summaries)).
///
/// Fewer than six regions is not enough history and yields no flags.
pub fn classify(rows: &[RegionSummary], direction: Direction) -> DivergenceFlags {
    let mut flags = DivergenceFlags::default();
    if rows.len() < ANALYSIS.classifier.min_regions {
        return flags;
    }

    let mut recent = RecentExtremes::from_summaries(rows);

    // An extreme on the wrong side of zero for this setup has not formed yet
    let newest = recent.lag(1).map_or(0.0, |r| r.oscillator_extreme);
    let wrong_polarity = match direction {
        Direction::Bearish => newest < 0.0,
        Direction::Bullish => newest > 0.0,
    };
    if wrong_polarity {
        recent.drop_most_recent();
    }

    flags.set(
        DivergenceKind::BearishRegular,
        BEARISH_REGULAR.matches(&recent, 1, 3),
    );
    flags.set(
        DivergenceKind::BullishRegular,
        BULLISH_REGULAR.matches(&recent, 1, 3),
    );

    if recent.len() >= ANALYSIS.classifier.min_regions {
        flags.set(
            DivergenceKind::BullishHidden,
            BULLISH_HIDDEN.matches(&recent, 2, 4) || BULLISH_HIDDEN.matches(&recent, 2, 6),
        );
        flags.set(
            DivergenceKind::BearishHidden,
            BEARISH_HIDDEN.matches(&recent, 2, 4) || BEARISH_HIDDEN.matches(&recent, 2, 6),
        );
    }

    #[cfg(debug_assertions)]
    if PRINT_CLASSIFICATION {
        log::info!(
            "classify {}: {} regions ({} after conditioning) -> {}",
            direction,
            rows.len(),
            recent.len(),
            flags
        );
    }

    flags
}

/// Segment one series with one preset and classify it.
pub fn check_divergence(
    series: &MacdTimeSeries,
    direction: Direction,
    preset: MacdPreset,
    zone_limit: usize,
) -> Result<DivergenceFlags> {
    let table = segment(series, preset, zone_limit)?;
    Ok(classify(&table.summaries(), direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{series_from, summaries};

    const NA: f64 = f64::NAN;

    #[test]
    fn test_bearish_regular_scenario() {
        // lag 1 = (110, +3), lag 3 = (100, +5); everything else neutral
        let rows = summaries(&[(NA, NA), (NA, NA), (NA, NA), (100.0, 5.0), (NA, NA), (110.0, 3.0)]);
        let flags = classify(&rows, Direction::Bearish);
        assert_eq!(flags.to_string(), "Bearish Regular Divergence");
    }

    #[test]
    fn test_five_rows_is_never_enough() {
        let rows = summaries(&[(100.0, 3.0), (90.0, -1.0), (100.0, 3.0), (NA, NA), (110.0, 5.0)]);
        assert!(classify(&rows, Direction::Bearish).is_none());
        assert!(classify(&rows, Direction::Bullish).is_none());
        assert_eq!(classify(&rows, Direction::Bearish).to_string(), "No Divergence");
    }

    #[test]
    fn test_bullish_regular() {
        // Troughs: lag 3 = (50, -4), lag 1 = (45, -2)
        let rows = summaries(&[
            (70.0, 1.0),
            (52.0, -1.0),
            (65.0, 2.0),
            (50.0, -4.0),
            (60.0, 1.0),
            (45.0, -2.0),
        ]);
        let flags = classify(&rows, Direction::Bullish);
        assert_eq!(
            flags,
            DivergenceFlags::of(&[DivergenceKind::BullishRegular])
        );
    }

    #[test]
    fn test_bearish_drops_unformed_negative_extreme() {
        // Newest region is negative, so lags shift by one before testing
        let rows = summaries(&[
            (NA, NA),
            (NA, NA),
            (100.0, 5.0),
            (NA, NA),
            (110.0, 3.0),
            (90.0, -2.0),
        ]);
        assert_eq!(
            classify(&rows, Direction::Bearish).to_string(),
            "Bearish Regular Divergence"
        );
        // Bullish keeps the negative extreme as lag 1 and finds nothing
        assert!(classify(&rows, Direction::Bullish).is_none());
    }

    #[test]
    fn test_hidden_needs_six_after_conditioning() {
        // Bearish hidden on (2, 4): lag 2 = (95, +6), lag 4 = (100, +4)
        let six = summaries(&[
            (NA, NA),
            (NA, NA),
            (100.0, 4.0),
            (NA, NA),
            (95.0, 6.0),
            (NA, NA),
        ]);
        assert!(classify(&six, Direction::Bearish).bearish_hidden);

        // Same pattern, but a positive newest region is dropped for bullish,
        // leaving only five regions: hidden tests are skipped
        let mut trimmed = six.clone();
        trimmed.remove(0);
        trimmed.push(RegionSummary {
            range_extreme: 120.0,
            oscillator_extreme: 1.0,
            region_index: 0,
            extreme_time_ms: 0,
        });
        for (i, row) in trimmed.iter_mut().enumerate() {
            row.region_index = 6 - i;
        }
        let flags = classify(&trimmed, Direction::Bullish);
        assert!(!flags.bearish_hidden && !flags.bullish_hidden);
    }

    #[test]
    fn test_hidden_uses_lag_six_pair() {
        // Bullish hidden via (2, 6): lag 2 = (80, -5), lag 6 = (70, -3)
        let rows = summaries(&[
            (70.0, -3.0),
            (NA, NA),
            (NA, NA),
            (NA, NA),
            (80.0, -5.0),
            (NA, NA),
        ]);
        let flags = classify(&rows, Direction::Bearish);
        assert_eq!(flags, DivergenceFlags::of(&[DivergenceKind::BullishHidden]));
    }

    #[test]
    fn test_regular_and_opposite_hidden_together() {
        // lag1 (110,+5) lag3 (100,+7): bearish regular
        // lag2 (60,-5)  lag4 (55,-3):  bullish hidden
        let rows = summaries(&[
            (NA, NA),
            (NA, NA),
            (55.0, -3.0),
            (100.0, 7.0),
            (60.0, -5.0),
            (110.0, 5.0),
        ]);
        assert_eq!(
            classify(&rows, Direction::Bearish).to_string(),
            "Bearish Regular Divergence and Bullish Hidden Divergence"
        );
    }

    #[test]
    fn test_zero_oscillator_never_counts() {
        let rows = summaries(&[
            (NA, NA),
            (NA, NA),
            (NA, NA),
            (100.0, 0.0),
            (NA, NA),
            (110.0, 5.0),
        ]);
        assert!(classify(&rows, Direction::Bearish).is_none());
    }

    #[test]
    fn test_classify_is_deterministic() {
        let rows = summaries(&[
            (70.0, 1.0),
            (52.0, -1.0),
            (65.0, 2.0),
            (50.0, -4.0),
            (60.0, 1.0),
            (45.0, -2.0),
        ]);
        let first = classify(&rows, Direction::Bullish);
        for _ in 0..5 {
            assert_eq!(classify(&rows, Direction::Bullish), first);
        }
    }

    #[test]
    fn test_check_divergence_end_to_end() {
        // Six alternating regions of two rows each. Newest region is negative and
        // gets dropped; the peaks before it go high 100 then 110 while MACD goes
        // 3 then 2.
        let osc = [1.0, 1.0, -1.0, -1.0, 3.0, 2.0, -1.5, -1.0, 1.0, 2.0, -0.5, -0.5];
        let highs = [
            90.0, 91.0, 85.0, 85.0, 100.0, 99.0, 88.0, 87.0, 105.0, 110.0, 95.0, 95.0,
        ];
        let lows = [
            80.0, 81.0, 75.0, 76.0, 90.0, 90.0, 78.0, 77.0, 95.0, 100.0, 85.0, 86.0,
        ];
        let series = series_from(&osc, &highs, &lows);

        let flags = check_divergence(&series, Direction::Bearish, MacdPreset::Def, 7).unwrap();
        assert!(flags.bearish_regular, "got {}", flags);
    }
}
