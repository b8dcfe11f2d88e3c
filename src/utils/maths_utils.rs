use argminmax::ArgMinMax;

#[inline]
pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

#[inline]
pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Index of the max (`maximize == true`) or min value of a non-empty slice.
/// Ties resolve to the first occurrence, so callers get the earliest row.
#[inline]
pub fn arg_extreme(vec: &[f64], maximize: bool) -> usize {
    debug_assert!(!vec.is_empty(), "arg_extreme needs at least one value");
    if maximize { vec.argmax() } else { vec.argmin() }
}
