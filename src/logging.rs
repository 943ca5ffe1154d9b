//! Diagnostics via `tracing`, written to stderr so stdout only carries
//! passwords.

use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "PASSGEN_LOG";

/// Install the global subscriber. `PASSGEN_LOG` overrides the default level.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
