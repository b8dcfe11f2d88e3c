use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::models::RegionSummary;

pub const NO_DIVERGENCE: &str = "No Divergence";
pub const LABEL_SEPARATOR: &str = " and ";

/// Which setup the caller is looking for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum, strum_macros::Display,
)]
pub enum Direction {
    Bearish,
    Bullish,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Bearish => Direction::Bullish,
            Direction::Bullish => Direction::Bearish,
        }
    }
}

/// The four patterns, in the fixed order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DivergenceKind {
    BearishRegular,
    BullishRegular,
    BullishHidden,
    BearishHidden,
}

impl DivergenceKind {
    pub fn regular(direction: Direction) -> Self {
        match direction {
            Direction::Bearish => Self::BearishRegular,
            Direction::Bullish => Self::BullishRegular,
        }
    }

    pub fn hidden(direction: Direction) -> Self {
        match direction {
            Direction::Bearish => Self::BearishHidden,
            Direction::Bullish => Self::BullishHidden,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BearishRegular => "Bearish Regular Divergence",
            Self::BullishRegular => "Bullish Regular Divergence",
            Self::BullishHidden => "Bullish Hidden Divergence",
            Self::BearishHidden => "Bearish Hidden Divergence",
        }
    }
}

/// Set of patterns that fired for one classification. Several can fire together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DivergenceFlags {
    pub bearish_regular: bool,
    pub bullish_regular: bool,
    pub bullish_hidden: bool,
    pub bearish_hidden: bool,
}

impl DivergenceFlags {
    pub fn of(kinds: &[DivergenceKind]) -> Self {
        let mut flags = Self::default();
        for &kind in kinds {
            flags.set(kind, true);
        }
        flags
    }

    pub fn contains(&self, kind: DivergenceKind) -> bool {
        match kind {
            DivergenceKind::BearishRegular => self.bearish_regular,
            DivergenceKind::BullishRegular => self.bullish_regular,
            DivergenceKind::BullishHidden => self.bullish_hidden,
            DivergenceKind::BearishHidden => self.bearish_hidden,
        }
    }

    pub fn set(&mut self, kind: DivergenceKind, fired: bool) {
        let slot = match kind {
            DivergenceKind::BearishRegular => &mut self.bearish_regular,
            DivergenceKind::BullishRegular => &mut self.bullish_regular,
            DivergenceKind::BullishHidden => &mut self.bullish_hidden,
            DivergenceKind::BearishHidden => &mut self.bearish_hidden,
        };
        *slot = fired;
    }

    pub fn is_none(&self) -> bool {
        *self == Self::default()
    }

    /// Fired patterns in reporting order.
    pub fn kinds(&self) -> Vec<DivergenceKind> {
        DivergenceKind::iter().filter(|&k| self.contains(k)).collect()
    }

    /// Joined text label, or "No Divergence".
    pub fn label(&self) -> String {
        if self.is_none() {
            return NO_DIVERGENCE.to_string();
        }
        self.kinds()
            .into_iter()
            .map(DivergenceKind::label)
            .join(LABEL_SEPARATOR)
    }
}

impl fmt::Display for DivergenceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Region summaries ordered most recent first, addressed by 1-based lag
/// (lag 1 = most recent region, lag 3 = two regions before it, ...).
#[derive(Debug, Clone)]
pub struct RecentExtremes {
    points: Vec<RegionSummary>,
}

impl RecentExtremes {
    /// Orders by `region_index` rather than trusting table position.
    pub fn from_summaries(rows: &[RegionSummary]) -> Self {
        let mut points = rows.to_vec();
        points.sort_by_key(|row| row.region_index);
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn lag(&self, lag: usize) -> Option<&RegionSummary> {
        lag.checked_sub(1).and_then(|pos| self.points.get(pos))
    }

    /// Treat the newest extreme as not yet formed.
    pub fn drop_most_recent(&mut self) {
        if !self.is_empty() {
            self.points.remove(0);
        }
    }
}
