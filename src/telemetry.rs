//! Tracing setup for r53elb.
//!
//! Diagnostics go to stderr so stdout carries only the lookup report.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LookupConfig;

/// Install the global subscriber. `RUST_LOG` overrides the config's filter.
pub fn init(config: &LookupConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_directives()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(config.debug)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
