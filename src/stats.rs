//! Ensemble statistics.

use ndarray::{Array2, ArrayView2};

use crate::error::ProjectionError;

/// Quantile probabilities summarising an ensemble as its 90% credible
/// interval bounds and median.
pub const DEFAULT_QUANTILES: [f64; 3] = [0.05, 0.5, 0.95];

/// Compute per-timestep quantiles across the ensemble axis.
///
/// For each row (time step) of `values` independently, computes the requested
/// quantiles over the columns (ensemble members) with linear interpolation
/// between order statistics, the convention used by the R and NumPy defaults.
/// Probabilities are clamped into `[0, 1]`. NaN members sort last and
/// propagate into any quantile that touches them.
///
/// Returns an array of shape `(time, probs.len())` with columns in `probs`
/// order.
///
/// # Arguments
///
/// * `values`: A `(time, ensemble)` array, e.g. a scenario slice from
///   [ProbabilisticDataset::extract](crate::models::ProbabilisticDataset::extract)
/// * `probs`: Quantile probabilities
#[tracing::instrument(level = "DEBUG", skip(values))]
pub fn ensemble_quantiles(
    values: ArrayView2<'_, f64>,
    probs: &[f64],
) -> Result<Array2<f64>, ProjectionError> {
    if values.ncols() == 0 {
        return Err(ProjectionError::EmptyEnsemble {
            operation: "quantiles",
        });
    }
    let mut result = Array2::zeros((values.nrows(), probs.len()));
    // Sort each row once, then interpolate every requested quantile from it.
    let mut members = Vec::with_capacity(values.ncols());
    for (step, row) in values.rows().into_iter().enumerate() {
        members.clear();
        members.extend(row.iter().copied());
        members.sort_unstable_by(f64::total_cmp);
        for (column, &prob) in probs.iter().enumerate() {
            result[[step, column]] = sorted_quantile(&members, prob);
        }
    }
    Ok(result)
}

/// Interpolate a quantile from a sorted, non-empty slice.
fn sorted_quantile(sorted: &[f64], prob: f64) -> f64 {
    let rank = prob.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    if below == above {
        sorted[below]
    } else {
        let weight = rank - below as f64;
        sorted[below] * (1.0 - weight) + sorted[above] * weight
    }
}
