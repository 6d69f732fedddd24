//! Integration tests for causeway-stats.

use std::collections::BTreeMap;

use proptest::prelude::*;

use causeway_core::config::CausewayConfig;
use causeway_core::errors::{CausewayError, SummaryError};
use causeway_stats::{hpdi, precis, precis_with, quantile, waic, OrderedCategorical};

// =============================================================================
// Intervals
// =============================================================================
proptest! {
    #[test]
    fn hpdi_bounds_are_samples_and_ordered(
        samples in prop::collection::vec(-1e6_f64..1e6, 1..200),
        prob in 0.05_f64..1.0,
    ) {
        let (lo, hi) = hpdi(&samples, prob).unwrap();
        prop_assert!(lo <= hi);
        prop_assert!(samples.contains(&lo));
        prop_assert!(samples.contains(&hi));
    }

    #[test]
    fn hpdi_never_wider_than_full_range(
        samples in prop::collection::vec(-1e3_f64..1e3, 2..100),
        prob in 0.05_f64..1.0,
    ) {
        let (lo, hi) = hpdi(&samples, prob).unwrap();
        let (full_lo, full_hi) = hpdi(&samples, 1.0).unwrap();
        prop_assert!(hi - lo <= full_hi - full_lo);
    }

    #[test]
    fn quantiles_are_monotone(
        samples in prop::collection::vec(-1e3_f64..1e3, 1..100),
        a in 0.0_f64..=1.0,
        b in 0.0_f64..=1.0,
    ) {
        let (q_lo, q_hi) = (a.min(b), a.max(b));
        prop_assert!(quantile(&samples, q_lo).unwrap() <= quantile(&samples, q_hi).unwrap());
    }
}

// =============================================================================
// Precis
// =============================================================================
#[test]
fn precis_reads_prob_and_decimals_from_config() {
    let config =
        CausewayConfig::from_toml("[summary]\ndefault_prob = 0.9\ninterval_decimals = 0\n")
            .unwrap();
    let samples = BTreeMap::from([("mu".to_string(), vec![0.0, 1.0, 2.0, 3.0])]);
    let p = precis_with(&samples, None, &config.summary).unwrap();
    assert_eq!(p.lower_label, "5%");
    assert_eq!(p.upper_label, "95%");
    assert!((p.row("mu").unwrap().lower - 0.15).abs() < 1e-12);
}

#[test]
fn precis_interval_brackets_mean_for_symmetric_samples() {
    let values: Vec<f64> = (-50..=50).map(f64::from).collect();
    let samples = BTreeMap::from([("beta".to_string(), values)]);
    let row = precis(&samples, 0.89).unwrap().rows.remove(0);
    assert_eq!(row.mean, 0.0);
    assert!(row.lower < 0.0 && row.upper > 0.0);
    assert!((row.lower + row.upper).abs() < 1e-9);
}

#[test]
fn precis_serializes_rows() {
    let samples = BTreeMap::from([("sigma".to_string(), vec![1.0, 1.0])]);
    let json = serde_json::to_value(precis(&samples, 0.5).unwrap()).unwrap();
    assert_eq!(json["rows"][0]["site"], "sigma");
    assert_eq!(json["rows"][0]["std_dev"], 0.0);
}

// =============================================================================
// WAIC and ordered categorical
// =============================================================================
#[test]
fn waic_needs_two_draws() {
    let err = waic(&[vec![-1.0, -2.0]]).unwrap_err();
    assert!(matches!(
        err,
        CausewayError::Summary(SummaryError::InsufficientSamples { needed: 2, available: 1 })
    ));
}

#[test]
fn ordered_log_prob_feeds_waic() {
    // Two posterior draws of phi, three observations.
    let observed = [0, 1, 2];
    let draws: Vec<Vec<f64>> = [0.0, 0.5]
        .iter()
        .map(|&shift| {
            let phi = vec![shift; observed.len()];
            OrderedCategorical::new(&phi, &[-1.0, 0.0])
                .unwrap()
                .log_prob(&observed)
                .unwrap()
        })
        .collect();
    let w = waic(&draws).unwrap();
    assert_eq!(w.len(), 3);
    assert!(w.iter().all(|v| v.is_finite() && *v > 0.0));
}

#[test]
fn out_of_support_level_is_reported() {
    let d = OrderedCategorical::new(&[0.0], &[0.0, 1.0]).unwrap();
    let err = d.log_prob(&[3]).unwrap_err();
    assert!(matches!(
        err,
        CausewayError::Summary(SummaryError::OutOfSupport { value: 3, support: 3 })
    ));
}
