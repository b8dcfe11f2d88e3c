//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is further gated by `cfg(debug_assertions)`
//! at the call site.

/// Emit one line per closed region while scanning a series backward.
pub const PRINT_REGION_SCAN: bool = false;

/// Emit the cap-closed regions and how many extreme points each produced.
pub const PRINT_CAPPED_EXTREMES: bool = false;

/// Emit the lag window and the flags produced by every classification.
pub const PRINT_CLASSIFICATION: bool = false;

/// Emit the outcome of each (series, preset) combination in the aggregator.
pub const PRINT_AGGREGATOR_CONDITIONS: bool = false;

/// Emit detailed serialization/deserialization logs.
pub const PRINT_SERDE: bool = false;
