//! Per-site summary tables: mean, standard deviation and a central interval.

use std::collections::BTreeMap;
use std::fmt;

use causeway_core::config::SummaryConfig;
use causeway_core::errors::{CausewayResult, SummaryError};
use causeway_core::summary_span;
use serde::Serialize;
use tracing::debug;

use crate::interval::quantile_sorted;
use crate::math;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisRow {
    pub site: String,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

/// One row per sample site, in site-name order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Precis {
    /// Percentile label of the lower bound, e.g. `"5.5%"`.
    pub lower_label: String,
    pub upper_label: String,
    pub rows: Vec<PrecisRow>,
}

impl Precis {
    pub fn row(&self, site: &str) -> Option<&PrecisRow> {
        self.rows.iter().find(|r| r.site == site)
    }
}

/// Summarise every site with a central `prob` interval.
pub fn precis(samples: &BTreeMap<String, Vec<f64>>, prob: f64) -> CausewayResult<Precis> {
    precis_with(samples, Some(prob), &SummaryConfig::default())
}

/// Like [`precis`], with label precision from `config`. A `None` probability
/// falls back to `config.default_prob`.
pub fn precis_with(
    samples: &BTreeMap<String, Vec<f64>>,
    prob: Option<f64>,
    config: &SummaryConfig,
) -> CausewayResult<Precis> {
    let _span = summary_span!(samples.len()).entered();
    let prob = prob.unwrap_or(config.default_prob);
    if !(prob > 0.0 && prob <= 1.0) {
        return Err(SummaryError::InvalidProbability { prob }.into());
    }
    let p_lo = (1.0 - prob) / 2.0;
    let p_hi = 1.0 - p_lo;

    let mut rows = Vec::with_capacity(samples.len());
    for (site, values) in samples {
        if values.is_empty() {
            return Err(SummaryError::EmptySamples { site: site.clone() }.into());
        }
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        rows.push(PrecisRow {
            site: site.clone(),
            mean: math::mean(values),
            std_dev: math::variance(values, 0).sqrt(),
            lower: quantile_sorted(&sorted, p_lo),
            upper: quantile_sorted(&sorted, p_hi),
        });
    }
    debug!(sites = rows.len(), prob, "precis computed");

    let decimals = config.interval_decimals;
    Ok(Precis {
        lower_label: format!("{:.*}%", decimals, 100.0 * p_lo),
        upper_label: format!("{:.*}%", decimals, 100.0 * p_hi),
        rows,
    })
}

impl fmt::Display for Precis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let site_w = self
            .rows
            .iter()
            .map(|r| r.site.len())
            .max()
            .unwrap_or(0)
            .max(4);
        writeln!(
            f,
            "{:<site_w$} {:>10} {:>10} {:>10} {:>10}",
            "site", "mean", "stddev", self.lower_label, self.upper_label
        )?;
        for r in &self.rows {
            writeln!(
                f,
                "{:<site_w$} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                r.site, r.mean, r.std_dev, r.lower, r.upper
            )?;
        }
        Ok(())
    }
}
