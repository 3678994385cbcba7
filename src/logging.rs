//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` (falling back to `info` when the value
/// does not parse); `LOG_FORMAT=json` switches to newline-delimited JSON.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
