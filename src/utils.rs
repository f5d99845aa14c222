/// Most frequent value in a slice of labels.
///
/// Ties resolve to the smallest value, so repeated fits over the same data
/// stay deterministic. Returns `None` for an empty slice.
pub fn mode(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_owned();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let mut best = sorted[0];
    let mut best_count = 0;
    let mut run_value = sorted[0];
    let mut run_count = 0;
    for &v in &sorted {
        if v == run_value {
            run_count += 1;
        } else {
            if run_count > best_count {
                best = run_value;
                best_count = run_count;
            }
            run_value = v;
            run_count = 1;
        }
    }
    if run_count > best_count {
        best = run_value;
    }
    Some(best)
}

/// The distinct values of a slice, sorted ascending.
pub fn distinct(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_owned();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted
}

/// Round to a fixed number of decimal places.
///
/// Gains are compared after rounding so that floating point noise cannot
/// flip the outcome of a split selection between runs.
pub fn round_places(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Smallest and largest value of a slice, `None` when empty.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
