//! Aggregate report snapshots
//!
//! All reports are plain serializable records (version string, numeric
//! counters, nested per-entity summaries); no encoding is mandated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ServiceStatus, SystemStatus};

/// Per-service line in an [`IntegrationReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummary {
    #[serde(rename = "type")]
    pub service_type: String,
    pub status: ServiceStatus,
    pub messages: u64,
}

/// Snapshot of the router and its registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationReport {
    /// Crate version tag
    pub version: String,
    /// Seconds since the router was constructed
    pub uptime_seconds: f64,
    /// Current registry size
    pub services_registered: usize,
    /// Total messages in the processed log (delivered and error alike)
    pub messages_processed: usize,
    /// Messages still pending in the diagnostic queue. Always 0 under
    /// synchronous delivery; kept honest by counting rather than
    /// hardcoding.
    pub pending_messages: usize,
    /// Per-service summary keyed by service name
    pub services: BTreeMap<String, ServiceSummary>,
}

/// Cumulative snapshot of the health monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Crate version tag
    pub version: String,
    /// Current system-wide status
    pub status: SystemStatus,
    /// Seconds since the monitor was constructed
    pub uptime_seconds: f64,
    /// Total issues ever appended to the fault log
    pub faults_detected: usize,
    /// Total actions ever appended to the repair log
    pub repairs_executed: usize,
}
