//! Sign-based segmentation of a series into MACD regions.
//!
//! The series is walked backward from the most recent row. Consecutive rows
//! sharing an oscillator sign form a region; each region records its extreme
//! price (max high when positive, min low when negative), its extreme
//! oscillator value, and when the price extreme happened. Region 1 is always
//! the most recent one.

use crate::config::MacdPreset;
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_REGION_SCAN;
use crate::error::Result;
use crate::models::{MacdTimeSeries, Region, RegionTable, Sign};
use crate::utils::{arg_extreme, get_max, get_min};

/// Segments `series` on the sign of the `preset` oscillator and keeps the
/// `zone_limit` most recent regions.
pub fn segment(series: &MacdTimeSeries, preset: MacdPreset, zone_limit: usize) -> Result<RegionTable> {
    series.validate()?;
    let oscillator = series.oscillator_pair(preset)?.line;

    let regions = scan_regions(series, oscillator, None);

    #[cfg(debug_assertions)]
    if PRINT_REGION_SCAN {
        log::info!(
            "{} [{}]: {} regions over {} rows, keeping {}",
            series.pair_interval.short_label(),
            preset,
            regions.len(),
            series.klines(),
            zone_limit.min(regions.len())
        );
    }

    Ok(RegionTable::new(regions).limit_zones(zone_limit))
}

/// Single backward pass. With `max_span`, a region is also closed once the
/// step counter reaches the cap; the counter resets on every close.
/// Regions come back most recent first.
pub(crate) fn scan_regions(
    series: &MacdTimeSeries,
    oscillator: &[f64],
    max_span: Option<usize>,
) -> Vec<Region> {
    let mut regions = Vec::new();
    let Some(&last) = oscillator.last() else {
        return regions;
    };

    let mut current_sign = Sign::of(last);
    let mut end = oscillator.len(); // exclusive end of the open region
    let mut span_count = 0;

    for i in (0..oscillator.len() - 1).rev() {
        span_count += 1;
        let sign = Sign::of(oscillator[i]);
        let hit_cap = max_span.is_some_and(|cap| span_count >= cap);

        if sign != current_sign || hit_cap {
            let region_index = regions.len() + 1;
            regions.push(close_region(
                series,
                oscillator,
                (i + 1, end),
                current_sign,
                region_index,
                hit_cap,
            ));
            current_sign = sign;
            end = i + 1;
            span_count = 0;
        }
    }

    // Oldest region runs from row 0
    let final_capped = max_span.is_some_and(|cap| end >= cap);
    let region_index = regions.len() + 1;
    regions.push(close_region(
        series,
        oscillator,
        (0, end),
        current_sign,
        region_index,
        final_capped,
    ));

    regions
}

fn close_region(
    series: &MacdTimeSeries,
    oscillator: &[f64],
    (start, end): (usize, usize),
    sign: Sign,
    region_index: usize,
    capped: bool,
) -> Region {
    let prices = &series.price_column(sign.price_column())[start..end];
    let osc = &oscillator[start..end];

    let price_idx = arg_extreme(prices, sign.seeks_max());
    let oscillator_extreme = if sign.seeks_max() {
        get_max(osc)
    } else {
        get_min(osc)
    };

    let region = Region {
        region_index,
        start_idx: start,
        end_idx: end,
        sign,
        range_extreme: prices[price_idx],
        oscillator_extreme,
        extreme_time_ms: series.timestamps[start + price_idx],
        capped,
    };

    #[cfg(debug_assertions)]
    if PRINT_REGION_SCAN {
        log::debug!(
            "   region {} rows [{}, {}) {:?}{}: price {:.5} macd {:.5}",
            region.region_index,
            region.start_idx,
            region.end_idx,
            region.sign,
            if region.capped { " (capped)" } else { "" },
            region.range_extreme,
            region.oscillator_extreme
        );
    }

    region
}
