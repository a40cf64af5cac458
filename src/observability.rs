use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ObservabilityConfig};

fn use_json(config: &ObservabilityConfig, environment: Option<&str>) -> bool {
    config.log_format == LogFormat::Json || environment == Some("production")
}

/// Initialize structured logging
///
/// JSON output when `ENVIRONMENT=production` or `log_format = "json"`,
/// console output otherwise. `RUST_LOG` wins over the configured level.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    config: &ObservabilityConfig,
) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let environment = std::env::var("ENVIRONMENT").ok();

    // Logs go to stderr, stdout carries command output
    if use_json(config, environment.as_deref()) {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::debug!(
        service.name = service_name,
        service.version = service_version,
        "observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_selection() {
        let mut config = ObservabilityConfig::default();
        assert!(!use_json(&config, None));
        assert!(!use_json(&config, Some("development")));
        assert!(use_json(&config, Some("production")));

        config.log_format = LogFormat::Json;
        assert!(use_json(&config, None));
    }
}
