//! Credible intervals over one-dimensional posterior samples.

use causeway_core::errors::{CausewayResult, SummaryError};
use tracing::trace;

/// Site label used when a bare sample slice is empty.
pub const UNNAMED_SITE: &str = "<samples>";

fn sorted(samples: &[f64]) -> CausewayResult<Vec<f64>> {
    if samples.is_empty() {
        return Err(SummaryError::EmptySamples {
            site: UNNAMED_SITE.to_string(),
        }
        .into());
    }
    let mut out = samples.to_vec();
    out.sort_by(f64::total_cmp);
    Ok(out)
}

fn check_prob(prob: f64) -> CausewayResult<()> {
    if prob > 0.0 && prob <= 1.0 {
        Ok(())
    } else {
        Err(SummaryError::InvalidProbability { prob }.into())
    }
}

/// Highest posterior density interval holding `prob` of the mass.
///
/// Slides a window of `round(N * prob)` sorted samples (ties to even) and
/// keeps the narrowest one; the first narrowest window wins. The window is
/// clamped to `N - 1` so that `prob = 1` spans the full sample range.
pub fn hpdi(samples: &[f64], prob: f64) -> CausewayResult<(f64, f64)> {
    check_prob(prob)?;
    let sorted = sorted(samples)?;
    let n = sorted.len();
    let width = ((n as f64 * prob).round_ties_even() as usize).min(n - 1);

    let mut best = f64::INFINITY;
    let mut bounds = (0, width);
    for i in 0..n - width {
        let span = sorted[i + width] - sorted[i];
        if span < best {
            best = span;
            bounds = (i, i + width);
        }
    }
    trace!(n, width, lower = bounds.0, upper = bounds.1, "hpdi window");
    Ok((sorted[bounds.0], sorted[bounds.1]))
}

/// The `q`-quantile, interpolating linearly between order statistics.
pub fn quantile(samples: &[f64], q: f64) -> CausewayResult<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(SummaryError::InvalidProbability { prob: q }.into());
    }
    let sorted = sorted(samples)?;
    Ok(quantile_sorted(&sorted, q))
}

/// `quantile` over samples already sorted ascending.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
