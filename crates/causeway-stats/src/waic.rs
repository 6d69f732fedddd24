//! Widely applicable information criterion, pointwise.

use causeway_core::errors::{CausewayResult, SummaryError};
use tracing::debug;

use crate::math;

/// Pointwise WAIC on the deviance scale.
///
/// `log_lik[s][i]` is the log-likelihood of data point `i` under posterior
/// draw `s`. For each point, `lppd = log(mean_s(exp(log_lik)))` computed
/// around the column maximum, and the penalty is the sample variance of the
/// column. Returns `-2 * (lppd - penalty)` per point.
pub fn waic(log_lik: &[Vec<f64>]) -> CausewayResult<Vec<f64>> {
    let draws = log_lik.len();
    if draws < 2 {
        return Err(SummaryError::InsufficientSamples {
            needed: 2,
            available: draws,
        }
        .into());
    }
    let points = log_lik[0].len();
    if let Some(row) = log_lik.iter().find(|row| row.len() != points) {
        return Err(SummaryError::ShapeMismatch {
            expected: points,
            actual: row.len(),
        }
        .into());
    }

    let mut column = vec![0.0; draws];
    let out = (0..points)
        .map(|i| {
            for (slot, row) in column.iter_mut().zip(log_lik) {
                *slot = row[i];
            }
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean_lik = column.iter().map(|p| (p - max).exp()).sum::<f64>() / draws as f64;
            let lppd = max + mean_lik.ln();
            let penalty = math::variance(&column, 1);
            -2.0 * (lppd - penalty)
        })
        .collect();
    debug!(draws, points, "waic computed");
    Ok(out)
}
