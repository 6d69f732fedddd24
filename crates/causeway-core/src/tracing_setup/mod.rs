//! Subscriber installation and span helpers.

pub mod spans;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. Returns `false` when a subscriber
/// was already installed, which makes repeated calls from tests harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.with_target(true).try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.log_level, json = config.json, "tracing initialised");
    }
    installed
}
