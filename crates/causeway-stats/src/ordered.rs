//! Ordered vectors and the ordered-categorical (cumulative logit) likelihood.

use causeway_core::errors::{CausewayError, CausewayResult, SummaryError};

use crate::math::{log_cumsum_exp, sigmoid};

/// Bijection from `R^n` onto strictly increasing vectors.
///
/// `y = cumsum([x0, exp(x1), ..., exp(x_{n-1})])`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedTransform;

impl OrderedTransform {
    pub fn forward(&self, x: &[f64]) -> Vec<f64> {
        let mut acc = 0.0;
        x.iter()
            .enumerate()
            .map(|(i, &v)| {
                acc += if i == 0 { v } else { v.exp() };
                acc
            })
            .collect()
    }

    /// Inverse of [`forward`](Self::forward). `y` must be strictly
    /// increasing; a non-increasing step maps to `NaN` or `-inf`.
    pub fn inverse(&self, y: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(y.len());
        out.extend(y.first().copied());
        out.extend(y.windows(2).map(|w| (w[1] - w[0]).ln()));
        out
    }

    /// `log|det dy/dx| = sum(x[1..])`.
    pub fn log_abs_det_jacobian(&self, x: &[f64]) -> f64 {
        x.iter().skip(1).sum()
    }
}

/// Categorical distribution over `K = cutpoints.len() + 1` ordered levels,
/// one distribution per linear-model term `phi[n]`.
///
/// Cutpoints are first mapped through `log(cumsum(exp(c)))`, which makes them
/// strictly increasing whatever their input order. Then
/// `q[n][k] = sigmoid(c[k] - phi[n])` is the cumulative probability of level
/// `k`, and level masses are its successive differences.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCategorical {
    cutpoints: Vec<f64>,
    cumulative: Vec<Vec<f64>>,
    probs: Vec<Vec<f64>>,
}

impl OrderedCategorical {
    pub fn new(phi: &[f64], cutpoints: &[f64]) -> CausewayResult<Self> {
        if phi.is_empty() {
            return Err(SummaryError::EmptySamples { site: "phi".to_string() }.into());
        }
        if cutpoints.is_empty() {
            return Err(SummaryError::EmptySamples {
                site: "cutpoints".to_string(),
            }
            .into());
        }
        let cutpoints = log_cumsum_exp(cutpoints);

        let cumulative: Vec<Vec<f64>> = phi
            .iter()
            .map(|&p| cutpoints.iter().map(|&c| sigmoid(c - p)).collect())
            .collect();
        let probs = cumulative
            .iter()
            .map(|q| {
                let mut mass = Vec::with_capacity(q.len() + 1);
                let mut prev = 0.0;
                for &qk in q {
                    mass.push(qk - prev);
                    prev = qk;
                }
                mass.push(1.0 - prev);
                mass
            })
            .collect();

        Ok(Self {
            cutpoints,
            cumulative,
            probs,
        })
    }

    /// Number of levels.
    pub fn num_categories(&self) -> usize {
        self.cutpoints.len() + 1
    }

    /// Normalised (strictly increasing) cutpoints.
    pub fn cutpoints(&self) -> &[f64] {
        &self.cutpoints
    }

    /// `[n][k]`: probability that observation `n` falls at or below level `k`.
    pub fn cumulative_probs(&self) -> &[Vec<f64>] {
        &self.cumulative
    }

    /// `[n][k]`: probability mass of level `k` for observation `n`.
    pub fn probs(&self) -> &[Vec<f64>] {
        &self.probs
    }

    /// Log mass of each observed level, one per `phi` term.
    pub fn log_prob(&self, values: &[usize]) -> CausewayResult<Vec<f64>> {
        if values.len() != self.probs.len() {
            return Err(SummaryError::ShapeMismatch {
                expected: self.probs.len(),
                actual: values.len(),
            }
            .into());
        }
        let support = self.num_categories();
        values
            .iter()
            .zip(&self.probs)
            .map(|(&v, p)| {
                p.get(v)
                    .map(|mass| mass.ln())
                    .ok_or_else(|| {
                        CausewayError::from(SummaryError::OutOfSupport { value: v, support })
                    })
            })
            .collect()
    }
}
