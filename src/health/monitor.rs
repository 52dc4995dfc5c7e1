//! Health Monitor — degraded-state detection and unconditional repair
//!
//! The monitor runs a two-state machine over the whole system:
//! `healthy ⟷ degraded`. A check pass flags every non-active service
//! with a warning issue; a repair pass forces every non-active service
//! back to active. Repair is unconditional — it does not distinguish
//! why a service went inactive (crash, maintenance, deliberate flip).
//! A cause tag on inactivation is the natural extension point for
//! retry/escalate/quarantine policies.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, warn};

use crate::registry::ServiceRegistry;
use crate::types::{
    HealthIssue, HealthReport, HealthSummary, IssueKind, IssueSeverity, RepairAction, RepairKind,
    ServiceStatus, SystemStatus,
};

/// Crate version reported in summaries.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default interval between monitor-loop cycles.
pub(crate) const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(5);

/// Service-level health monitor with fault and repair logs.
pub struct HealthMonitor {
    status: SystemStatus,
    fault_log: Vec<HealthIssue>,
    repairs: Vec<RepairAction>,
    check_interval: Duration,
    started_at: Instant,
}

impl HealthMonitor {
    /// Monitor with the default check interval.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_CHECK_INTERVAL)
    }

    /// Monitor with an explicit interval (consumed by [`MonitorLoop`]).
    ///
    /// [`MonitorLoop`]: super::MonitorLoop
    pub fn with_interval(check_interval: Duration) -> Self {
        Self {
            status: SystemStatus::Healthy,
            fault_log: Vec::new(),
            repairs: Vec::new(),
            check_interval,
            started_at: Instant::now(),
        }
    }

    /// Check the health of every registered service.
    ///
    /// Emits one warning issue per non-active service, transitions the
    /// system status, and appends any issues to the fault log. The
    /// registry itself is only read — this pass never mutates records.
    pub fn check_health(&mut self, registry: &ServiceRegistry) -> HealthReport {
        let issues: Vec<HealthIssue> = registry
            .iter()
            .filter(|(_, record)| !record.is_active())
            .map(|(name, _)| HealthIssue {
                service: name.clone(),
                kind: IssueKind::Inactive,
                severity: IssueSeverity::Warning,
            })
            .collect();

        if issues.is_empty() {
            self.status = SystemStatus::Healthy;
        } else {
            self.status = SystemStatus::Degraded;
            warn!(issues = issues.len(), "Health check found inactive services");
            self.fault_log.extend(issues.iter().cloned());
        }

        HealthReport {
            status: self.status,
            issues,
            services_checked: registry.len(),
            timestamp: Utc::now(),
        }
    }

    /// Reactivate every non-active service.
    ///
    /// Mutates the registry directly and appends one repair action per
    /// reactivated service. If nothing remains non-active afterwards
    /// the system status returns to healthy.
    pub fn auto_repair(&mut self, registry: &mut ServiceRegistry) -> Vec<RepairAction> {
        let mut repairs = Vec::new();

        for name in registry.inactive_names() {
            registry.set_status(&name, ServiceStatus::Active);
            info!(service = %name, "Auto-repaired service");
            repairs.push(RepairAction {
                service: name,
                action: RepairKind::Reactivated,
                timestamp: Utc::now(),
            });
        }

        self.repairs.extend(repairs.iter().cloned());
        if registry.inactive_names().is_empty() {
            self.status = SystemStatus::Healthy;
        }
        repairs
    }

    /// Cumulative monitoring snapshot.
    pub fn report(&self) -> HealthSummary {
        HealthSummary {
            version: VERSION.to_string(),
            status: self.status,
            uptime_seconds: self.started_at.elapsed().as_secs_f64(),
            faults_detected: self.fault_log.len(),
            repairs_executed: self.repairs.len(),
        }
    }

    /// Current system-wide status.
    pub fn status(&self) -> SystemStatus {
        self.status
    }

    /// Interval the monitor loop should run at.
    pub fn check_interval(&self) -> Duration {
        self.check_interval
    }
}

impl Default for HealthMonitor {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
