//! Service Registry — authoritative name → record mapping
//!
//! The registry exclusively owns all [`ServiceRecord`]s. The router and
//! the health monitor mutate records only through the narrow operations
//! here (status flips, counter increments), never by holding copies.
//!
//! Registration is permissive by design: re-registering a name
//! overwrites the record without error (last write wins), and status
//! mutation of an unknown name is a silent no-op. Callers that need to
//! distinguish "unknown" from "set" must check existence first.

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use tracing::info;

use crate::types::{ServiceConfig, ServiceRecord, ServiceStatus};

/// Name-keyed service store.
///
/// Iteration order is name order (`BTreeMap`), which keeps broadcast
/// fan-out and health sweeps deterministic. Order is not part of the
/// contract.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, ServiceRecord>,
}

impl ServiceRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for `name`.
    ///
    /// The new record is active with a zero message counter and a fresh
    /// registration timestamp, also on re-registration.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        service_type: impl Into<String>,
        endpoint: impl Into<String>,
        config: ServiceConfig,
    ) {
        let name = name.into();
        let record = ServiceRecord::new(service_type, endpoint, config);
        info!(service = %name, service_type = %record.service_type, "Registered service");
        self.services.insert(name, record);
    }

    /// Look up a record. Absence is a typed result, never a panic.
    pub fn get(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.get(name)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Set the status of `name` in place. No-op if `name` is unknown.
    pub fn set_status(&mut self, name: &str, status: ServiceStatus) {
        if let Some(record) = self.services.get_mut(name) {
            record.status = status;
        }
    }

    /// Bump the delivery counter of `name`. No-op if `name` is unknown.
    ///
    /// Only the router calls this, on successful delivery.
    pub fn increment_message_count(&mut self, name: &str) {
        if let Some(record) = self.services.get_mut(name) {
            record.message_count += 1;
        }
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no services are registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Iterate over `(name, record)` pairs in registry order.
    pub fn iter(&self) -> Iter<'_, String, ServiceRecord> {
        self.services.iter()
    }

    /// Names of all registered services, in registry order.
    pub fn names(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }

    /// Names of all services whose status is not active, in registry
    /// order. Used by health sweeps.
    pub fn inactive_names(&self) -> Vec<String> {
        self.services
            .iter()
            .filter(|(_, record)| !record.is_active())
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_with(key: &str, value: &str) -> ServiceConfig {
        let mut config = ServiceConfig::new();
        config.insert(key.to_string(), json!(value));
        config
    }

    #[test]
    fn register_then_get() {
        let mut registry = ServiceRegistry::new();
        registry.register("compute", "processing", "local://compute", ServiceConfig::new());

        let record = registry.get("compute").unwrap();
        assert_eq!(record.service_type, "processing");
        assert_eq!(record.status, ServiceStatus::Active);
        assert_eq!(record.message_count, 0);
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn reregistration_overwrites_without_duplicating() {
        let mut registry = ServiceRegistry::new();
        registry.register("compute", "processing", "v1", config_with("mode", "a"));
        registry.increment_message_count("compute");
        registry.set_status("compute", ServiceStatus::Inactive);

        registry.register("compute", "analytics", "v2", config_with("mode", "b"));

        assert_eq!(registry.len(), 1);
        let record = registry.get("compute").unwrap();
        assert_eq!(record.service_type, "analytics");
        assert_eq!(record.endpoint, "v2");
        assert_eq!(record.config.get("mode").unwrap(), "b");
        // Overwrite resets counters and status
        assert_eq!(record.message_count, 0);
        assert_eq!(record.status, ServiceStatus::Active);
    }

    #[test]
    fn set_status_on_unknown_name_is_a_noop() {
        let mut registry = ServiceRegistry::new();
        registry.set_status("ghost", ServiceStatus::Inactive);
        assert!(registry.is_empty());
    }

    #[test]
    fn increment_on_unknown_name_is_a_noop() {
        let mut registry = ServiceRegistry::new();
        registry.register("a", "t", "", ServiceConfig::new());
        registry.increment_message_count("ghost");
        assert_eq!(registry.get("a").unwrap().message_count, 0);
    }

    #[test]
    fn inactive_names_in_registry_order() {
        let mut registry = ServiceRegistry::new();
        registry.register("c", "t", "", ServiceConfig::new());
        registry.register("a", "t", "", ServiceConfig::new());
        registry.register("b", "t", "", ServiceConfig::new());
        registry.set_status("c", ServiceStatus::Inactive);
        registry.set_status("a", ServiceStatus::Inactive);

        assert_eq!(registry.inactive_names(), vec!["a", "c"]);
    }
}
