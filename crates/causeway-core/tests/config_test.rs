use causeway_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CausewayConfig::from_toml("").unwrap();

    // Analysis defaults
    assert_eq!(config.analysis.error_policy, ErrorPolicy::Lenient);
    assert_eq!(config.analysis.iteration_budget, None);
    assert_eq!(config.analysis.ancestral_closure, AncestralClosure::Literal);

    // Summary defaults
    assert_eq!(config.summary.default_prob, 0.89);
    assert_eq!(config.summary.interval_decimals, 1);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[analysis]
error_policy = "strict"
iteration_budget = 5000
ancestral_closure = "standard"

[observability]
json = true
"#;
    let config = CausewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.analysis.error_policy, ErrorPolicy::Strict);
    assert_eq!(config.analysis.iteration_budget, Some(5000));
    assert_eq!(config.analysis.ancestral_closure, AncestralClosure::Standard);
    assert!(config.observability.json);
    // Non-overridden fields keep defaults
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.summary.default_prob, 0.89);
}

#[test]
fn config_serde_roundtrip() {
    let config = CausewayConfig {
        analysis: AnalysisConfig::strict()
            .with_budget(42)
            .with_closure(AncestralClosure::Standard),
        ..CausewayConfig::default()
    };
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = CausewayConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.analysis.error_policy, ErrorPolicy::Strict);
    assert_eq!(roundtripped.analysis.iteration_budget, Some(42));
    assert_eq!(roundtripped.analysis.ancestral_closure, AncestralClosure::Standard);
    assert_eq!(
        roundtripped.summary.default_prob,
        config.summary.default_prob
    );
}

#[test]
fn config_rejects_unknown_policy() {
    let err = CausewayConfig::from_toml("[analysis]\nerror_policy = \"sloppy\"\n").unwrap_err();
    assert!(err.to_string().contains("configuration error"));
}

#[test]
fn config_rejects_unknown_closure() {
    assert!(CausewayConfig::from_toml("[analysis]\nancestral_closure = \"moral\"\n").is_err());
}

#[test]
fn config_rejects_out_of_range_prob() {
    assert!(CausewayConfig::from_toml("[summary]\ndefault_prob = 1.5\n").is_err());
    assert!(CausewayConfig::from_toml("[summary]\ndefault_prob = 0.0\n").is_err());
}

#[test]
fn config_rejects_zero_budget() {
    assert!(CausewayConfig::from_toml("[analysis]\niteration_budget = 0\n").is_err());
}
