//! Health tracking for the monitoring endpoints
//!
//! - GET /monitoring/health - Full health status
//! - GET /monitoring/ready - 200 once the server is accepting connections

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum ComponentStatus {
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "starting")]
    Starting,
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentStatus::Healthy => write!(f, "healthy"),
            ComponentStatus::Starting => write!(f, "starting"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: ComponentStatus,
    pub timestamp: String,
    pub uptime_seconds: f64,
    pub version: String,
}

/// Tracks application health
pub struct HealthTracker {
    is_ready: AtomicBool,
    startup_time: std::time::Instant,
}

impl HealthTracker {
    pub fn new() -> Self {
        Self {
            is_ready: AtomicBool::new(false),
            startup_time: std::time::Instant::now(),
        }
    }

    /// Mark system as ready; /ready returns 200 afterwards
    pub fn mark_ready(&self) {
        self.is_ready.store(true, Ordering::SeqCst);
        tracing::info!("System marked as ready");
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready.load(Ordering::SeqCst)
    }

    pub fn get_status(&self) -> HealthStatus {
        let status = if self.is_ready() {
            ComponentStatus::Healthy
        } else {
            ComponentStatus::Starting
        };

        HealthStatus {
            status,
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: self.startup_time.elapsed().as_secs_f64(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}
