// Domain models for divergence analysis
// These modules contain pure data types independent of I/O

pub mod divergence;
pub mod extreme;
pub mod region;
#[cfg(test)]
pub(crate) mod test_support;
pub mod timeseries;

// Re-export key types for convenience
pub use divergence::{
    Direction, DivergenceFlags, DivergenceKind, LABEL_SEPARATOR, NO_DIVERGENCE, RecentExtremes,
};
pub use extreme::{ExtremeKind, ExtremePoint};
pub use region::{Region, RegionSummary, RegionTable, Sign};
pub use timeseries::{MacdTimeSeries, OscillatorPair, PriceColumn};
