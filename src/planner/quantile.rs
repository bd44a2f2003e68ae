use crate::error::{RecommendError, Result};

/// Percentile of `values` at fraction `q` in [0, 1].
///
/// Uses linear interpolation between the two closest ranks: the position is
/// `q * (n - 1)` over the sorted values. NaN values are ignored.
pub fn quantile(values: &[f64], q: f64) -> Result<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return Err(RecommendError::EmptyCatalog(
            "cannot compute a percentile over an empty set".to_string(),
        ));
    }
    sorted.sort_by(f64::total_cmp);

    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Percentile of one attribute over a set of records.
pub fn quantile_of<T>(items: &[&T], q: f64, attr: impl Fn(&T) -> f64) -> Result<f64> {
    let values: Vec<f64> = items.iter().map(|item| attr(*item)).collect();
    quantile(&values, q)
}
