//! Analysis and computation configuration

use crate::config::MacdPreset;

/// Settings for the sign-based range segmenter
pub struct SegmentationSettings {
    // Number of most recent regions kept for classification (7 or more recommended)
    pub default_zone_limit: usize,
}

/// Settings for the length-capped segmenter and its local extrema scan
pub struct CappedSettings {
    // A region is force-closed after this many rows even without a sign change
    pub max_span: usize,
    // Look-around distance on each side when testing for a local peak/trough
    pub min_candles: usize,
}

/// Settings for the divergence classifier
pub struct ClassifierSettings {
    // Below this many region rows there is nothing to compare against (lags reach back 6)
    pub min_regions: usize,
}

/// Settings for the multi-timeframe / multi-preset aggregator
pub struct AggregatorSettings {
    pub zone_limit: usize,
    // Evaluated in this order for each timeframe
    pub presets: [MacdPreset; 2],
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub segmentation: SegmentationSettings,
    pub capped: CappedSettings,
    pub classifier: ClassifierSettings,
    pub aggregator: AggregatorSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    segmentation: SegmentationSettings {
        default_zone_limit: 7,
    },

    capped: CappedSettings {
        max_span: 50,
        min_candles: 2,
    },

    classifier: ClassifierSettings { min_regions: 6 },

    aggregator: AggregatorSettings {
        zone_limit: 7,
        presets: [MacdPreset::Def, MacdPreset::Low1],
    },
};
