pub mod maths_utils;
pub mod time_utils;

pub use maths_utils::{arg_extreme, get_max, get_min};
pub use time_utils::{TimeUtils, epoch_ms_to_utc};
