//! Process logging setup.
//!
//! Production emits JSON lines at `info`; every other environment emits
//! human-readable lines at `warn`. `RUST_LOG` overrides the level. All log
//! output goes to stderr so command results on stdout stay parseable.

use keystone_config::constants::DEFAULT_ENV_PREFIX;
use keystone_config::{AppEnv, env_var_or_none};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Reads `KEYSTONE_ENV`; unset or unrecognized values fall back to development.
pub fn app_env() -> AppEnv {
    env_var_or_none(&format!("{}_ENV", DEFAULT_ENV_PREFIX))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn default_directive(env: AppEnv) -> &'static str {
    if env.is_production() { "info" } else { "warn" }
}

pub fn init(env: AppEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));
    let registry = tracing_subscriber::registry().with(filter);

    if env.is_production() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!(env = %env, "Logging initialized");
}
