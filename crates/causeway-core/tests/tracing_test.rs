use causeway_core::config::ObservabilityConfig;
use causeway_core::tracing_setup::init_tracing;

#[test]
fn init_tracing_installs_once() {
    let config = ObservabilityConfig::default();
    let first = init_tracing(&config);
    let second = init_tracing(&config);
    // Only one global subscriber can exist per process.
    assert!(!(first && second));
    assert!(!second);
}
