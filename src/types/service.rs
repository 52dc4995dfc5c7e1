//! Service registry entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque key→value configuration attached to a service at registration.
///
/// The core never interprets these values; they are carried through to
/// status reads and reports unchanged.
pub type ServiceConfig = Map<String, Value>;

/// Lifecycle status of a registered service.
///
/// `Inactive` is set by external callers (maintenance, deliberate
/// deactivation, observed failure); the health monitor reactivates
/// inactive services during auto-repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is available for message delivery
    Active,
    /// Service is not available; flagged by health checks
    Inactive,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Active => write!(f, "active"),
            ServiceStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// One registered service.
///
/// The service name is the registry key and is not duplicated here.
/// Records are created only by explicit registration — message delivery
/// never creates one implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Free-form classification ("processing", "monitoring", ...)
    pub service_type: String,
    /// Opaque endpoint string, may be empty
    pub endpoint: String,
    /// Opaque configuration mapping
    pub config: ServiceConfig,
    /// Current lifecycle status
    pub status: ServiceStatus,
    /// When the record was (last) registered
    pub registered_at: DateTime<Utc>,
    /// Successful deliveries to this service, monotonic
    pub message_count: u64,
}

impl ServiceRecord {
    /// Build a fresh record as `register` creates it: active, zero
    /// deliveries, registered now.
    pub fn new(service_type: impl Into<String>, endpoint: impl Into<String>, config: ServiceConfig) -> Self {
        Self {
            service_type: service_type.into(),
            endpoint: endpoint.into(),
            config,
            status: ServiceStatus::Active,
            registered_at: Utc::now(),
            message_count: 0,
        }
    }

    /// Whether this record is currently active.
    pub fn is_active(&self) -> bool {
        self.status == ServiceStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_active_with_zero_deliveries() {
        let record = ServiceRecord::new("processing", "local://compute", ServiceConfig::new());
        assert_eq!(record.status, ServiceStatus::Active);
        assert_eq!(record.message_count, 0);
        assert!(record.is_active());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ServiceStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
    }
}
