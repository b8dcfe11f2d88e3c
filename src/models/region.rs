use serde::{Deserialize, Serialize};

use crate::models::PriceColumn;

/// Oscillator sign of a row. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// Price column whose extreme describes a region of this sign.
    pub fn price_column(self) -> PriceColumn {
        match self {
            Sign::Positive => PriceColumn::High,
            Sign::Negative => PriceColumn::Low,
        }
    }

    /// Positive regions look for maxima, negative ones for minima.
    pub fn seeks_max(self) -> bool {
        matches!(self, Sign::Positive)
    }
}

/// One contiguous run of rows sharing an oscillator sign (or cut by the length cap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// 1 = most recent region, counting up going back in time
    pub region_index: usize,
    /// First row of the region (inclusive)
    pub start_idx: usize,
    /// Row after the last row of the region (exclusive)
    pub end_idx: usize,
    pub sign: Sign,
    pub range_extreme: f64,
    pub oscillator_extreme: f64,
    /// Timestamp of the row holding `range_extreme` (earliest on ties)
    pub extreme_time_ms: i64,
    /// Closed by the length cap rather than only by a sign flip
    pub capped: bool,
}

impl Region {
    pub fn len(&self) -> usize {
        self.end_idx - self.start_idx
    }

    pub fn is_empty(&self) -> bool {
        self.start_idx == self.end_idx
    }

    pub fn summary(&self) -> RegionSummary {
        RegionSummary {
            range_extreme: self.range_extreme,
            oscillator_extreme: self.oscillator_extreme,
            region_index: self.region_index,
            extreme_time_ms: self.extreme_time_ms,
        }
    }
}

/// The four output columns: `range_extreme, oscillator_extreme, region_index, extreme_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub range_extreme: f64,
    pub oscillator_extreme: f64,
    pub region_index: usize,
    pub extreme_time_ms: i64,
}

/// Regions of one series, stored most recent first (`regions[0].region_index == 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl RegionTable {
    pub fn new(regions: Vec<Region>) -> Self {
        debug_assert!(
            regions
                .iter()
                .enumerate()
                .all(|(pos, region)| region.region_index == pos + 1),
            "regions must be ordered by region_index starting at 1"
        );
        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn most_recent(&self) -> Option<&Region> {
        self.regions.first()
    }

    /// Keeps only regions with `region_index <= zone_limit`.
    pub fn limit_zones(mut self, zone_limit: usize) -> Self {
        self.regions.truncate(zone_limit);
        self
    }

    /// Per-row view: every covered input row carries its region's values, chronological.
    pub fn rows(&self) -> Vec<RegionSummary> {
        self.regions
            .iter()
            .rev()
            .flat_map(|region| std::iter::repeat_n(region.summary(), region.len()))
            .collect()
    }

    /// One row per region, chronological (oldest first, region 1 last).
    pub fn summaries(&self) -> Vec<RegionSummary> {
        self.regions.iter().rev().map(Region::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(region_index: usize, start_idx: usize, end_idx: usize, osc: f64) -> Region {
        Region {
            region_index,
            start_idx,
            end_idx,
            sign: Sign::of(osc),
            range_extreme: 100.0 + region_index as f64,
            oscillator_extreme: osc,
            extreme_time_ms: start_idx as i64,
            capped: false,
        }
    }

    fn table() -> RegionTable {
        RegionTable::new(vec![
            region(1, 5, 8, 2.0),
            region(2, 2, 5, -1.0),
            region(3, 0, 2, 0.5),
        ])
    }

    #[test]
    fn test_zero_is_positive() {
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert_eq!(Sign::of(-0.0001), Sign::Negative);
        assert_eq!(Sign::Positive.price_column(), PriceColumn::High);
        assert_eq!(Sign::Negative.price_column(), PriceColumn::Low);
    }

    #[test]
    fn test_rows_broadcast_each_region() {
        let rows = table().rows();
        assert_eq!(rows.len(), 8);
        let indices: Vec<usize> = rows.iter().map(|r| r.region_index).collect();
        assert_eq!(indices, vec![3, 3, 2, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_summaries_are_chronological() {
        let summaries = table().summaries();
        let indices: Vec<usize> = summaries.iter().map(|r| r.region_index).collect();
        assert_eq!(indices, vec![3, 2, 1]);
    }

    #[test]
    fn test_limit_zones_keeps_most_recent() {
        let limited = table().limit_zones(2);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited.rows().len(), 6, "rows of dropped regions disappear");
        assert_eq!(limited.most_recent().map(|r| r.start_idx), Some(5));
        assert!(
            limited.regions().iter().all(|r| r.start_idx >= 2),
            "oldest region must be gone"
        );
    }
}
