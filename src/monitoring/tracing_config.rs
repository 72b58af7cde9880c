//! Structured logging with tracing
//!
//! Sets up:
//! - Console logging on stderr
//! - Structured JSON lines (optional)
//! - Configurable log levels

use super::config::{LogFormat, MonitoringConfig};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(config: &MonitoringConfig) {
    if !config.enabled {
        return;
    }

    // Build env filter from RUST_LOG
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Text => {
            let console_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);
            let _ = registry.with(console_layer).try_init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json();
            let _ = registry.with(json_layer).try_init();
        }
    }
}

/// Log a rendered artifact with structured fields
#[macro_export]
macro_rules! log_render {
    ($artifact:expr, $bytes:expr) => {
        tracing::debug!(artifact = $artifact, bytes = $bytes, "Artifact rendered");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_initialization_is_idempotent() {
        let config = MonitoringConfig::default();
        init_tracing(&config);
        init_tracing(&config);
    }

    #[test]
    fn test_tracing_disabled() {
        let config = MonitoringConfig {
            enabled: false,
            ..MonitoringConfig::default()
        };
        init_tracing(&config);
    }
}
