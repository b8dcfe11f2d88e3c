// Segmentation, extrema and divergence classification
pub mod capped_segmenter;
pub mod divergence;
pub mod local_extrema;
pub mod multi_condition;
pub mod range_segmenter;

// Re-export commonly used types
pub use capped_segmenter::{CappedSegmentation, segment_capped};
pub use divergence::{check_divergence, classify};
pub use local_extrema::find_local_extremes;
pub use multi_condition::{
    ConditionOutcome, acceptable_outcomes, any_divergence, any_divergence_reported,
    evaluate_conditions,
};
pub use range_segmenter::segment;
