//! Health monitoring types: issues, repairs, and system-wide status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// System-wide health state, aggregated over all registered services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    /// Every registered service is active
    Healthy,
    /// At least one registered service is not active
    Degraded,
}

impl std::fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemStatus::Healthy => write!(f, "healthy"),
            SystemStatus::Degraded => write!(f, "degraded"),
        }
    }
}

/// Kind of condition a health check can flag on a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Service status is not active
    Inactive,
}

/// Severity of a flagged issue.
///
/// Inactivity is a recorded condition, not a failure of the core, so it
/// carries warning severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Warning,
}

/// One condition flagged by a health check, appended to the fault log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthIssue {
    /// Affected service name
    pub service: String,
    /// What was flagged
    pub kind: IssueKind,
    /// How serious it is
    pub severity: IssueSeverity,
}

/// Repair performed by auto-repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairKind {
    /// Status forced back to active
    Reactivated,
}

impl std::fmt::Display for RepairKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepairKind::Reactivated => write!(f, "reactivated"),
        }
    }
}

/// One mutation performed by auto-repair, appended to the repair log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairAction {
    /// Repaired service name
    pub service: String,
    /// What was done
    pub action: RepairKind,
    /// When the repair was applied
    pub timestamp: DateTime<Utc>,
}

/// Result of one health check pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// System status after this pass
    pub status: SystemStatus,
    /// Issues found in this pass (empty when healthy)
    pub issues: Vec<HealthIssue>,
    /// How many registered services were examined
    pub services_checked: usize,
    /// When the pass ran
    pub timestamp: DateTime<Utc>,
}
