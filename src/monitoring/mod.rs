//! Monitoring for the builder service
//!
//! Provides:
//! - Structured logging with tracing
//! - Prometheus metrics collection
//! - Health check endpoints
//! - Per-request trace spans

pub mod config;
pub mod handlers;
pub mod health;
pub mod metrics;
pub mod trace_middleware;
pub mod tracing_config;

pub use config::{LogFormat, MonitoringConfig};
pub use health::{HealthStatus, HealthTracker};
pub use trace_middleware::{RequestId, TraceMiddleware};

use std::sync::Arc;
use std::time::Instant;

/// Monitoring context shared across the application
#[derive(Clone)]
pub struct MonitoringContext {
    pub config: MonitoringConfig,
    pub health: Arc<HealthTracker>,
    pub startup_time: Instant,
}

impl MonitoringContext {
    /// Initialize tracing and health tracking. Call before starting the server.
    pub fn new(config: MonitoringConfig) -> Self {
        tracing_config::init_tracing(&config);

        tracing::info!(
            enabled = config.enabled,
            log_format = config.log_format.as_str(),
            "Monitoring system initialized"
        );

        Self {
            config,
            health: Arc::new(HealthTracker::new()),
            startup_time: Instant::now(),
        }
    }

    /// Record startup completion and mark the service ready
    pub fn startup_complete(&self) {
        self.health.mark_ready();
        tracing::info!(
            duration_ms = self.startup_time.elapsed().as_millis() as u64,
            "Application startup complete"
        );
    }

    pub fn health_status(&self) -> HealthStatus {
        self.health.get_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitoring_context_creation() {
        let ctx = MonitoringContext::new(MonitoringConfig::default());
        assert!(!ctx.health.is_ready());
        ctx.startup_complete();
        assert!(ctx.health.is_ready());
    }
}
