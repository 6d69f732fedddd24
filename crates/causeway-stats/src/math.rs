//! Numerically stable scalar helpers.

/// Stable sigmoid: `1 / (1 + exp(-x))`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    let e = (-x.abs()).exp();
    let recip = 1.0 / (1.0 + e);
    if x >= 0.0 { recip } else { e * recip }
}

/// Stable `log(exp(a) + exp(b))`.
#[inline]
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY {
        return b;
    }
    if b == f64::NEG_INFINITY {
        return a;
    }
    let hi = a.max(b);
    hi + (-(a - b).abs()).exp().ln_1p()
}

/// Running `log(cumsum(exp(xs)))`.
pub fn log_cumsum_exp(xs: &[f64]) -> Vec<f64> {
    let mut acc = f64::NEG_INFINITY;
    xs.iter()
        .map(|&x| {
            acc = log_add_exp(acc, x);
            acc
        })
        .collect()
}

pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Variance with `ddof` degrees of freedom removed from the divisor.
pub fn variance(xs: &[f64], ddof: usize) -> f64 {
    let m = mean(xs);
    xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (xs.len() - ddof) as f64
}
