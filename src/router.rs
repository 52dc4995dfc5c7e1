//! Integration Router — message delivery and broadcast over the registry
//!
//! The router owns the [`ServiceRegistry`] and is the only component
//! that increments delivery counters. Every send attempt, delivered or
//! not, is recorded in the append-only processed log; a parallel
//! diagnostic queue holds the same messages and feeds the pending-count
//! metric in the integration report.
//!
//! ## Failure semantics
//!
//! Routing never raises an error for a missing target: the attempt
//! degrades to a recorded error-status [`Message`]. The source name is
//! advisory metadata and is never validated. There are no retries — an
//! error message is terminal and must be resent by the caller.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::IntegrationFault;
use crate::registry::ServiceRegistry;
use crate::types::{
    DeliveryStatus, IntegrationReport, Message, Payload, ServiceConfig, ServiceRecord,
    ServiceSummary,
};

/// Crate version reported in snapshots.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message router over an owned service registry.
pub struct Router {
    registry: ServiceRegistry,
    /// Diagnostic queue: every message, in send order. Pending entries
    /// would sit here if delivery were ever decoupled from send.
    message_queue: Vec<Message>,
    /// Append-only log of every send attempt.
    processed: Vec<Message>,
    started_at: Instant,
}

impl Router {
    /// Router with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: ServiceRegistry::new(),
            message_queue: Vec::new(),
            processed: Vec::new(),
            started_at: Instant::now(),
        }
    }

    /// Register a service for integration. Delegates to the owned
    /// registry; see [`ServiceRegistry::register`] for overwrite
    /// semantics.
    pub fn register_service(
        &mut self,
        name: impl Into<String>,
        service_type: impl Into<String>,
        endpoint: impl Into<String>,
        config: ServiceConfig,
    ) {
        self.registry.register(name, service_type, endpoint, config);
    }

    /// Send a message from `source` to `target`.
    ///
    /// The returned message carries the resolved delivery status:
    /// `Delivered` if the target is registered (its counter is bumped),
    /// `Error` with a detail string otherwise. Resolution is synchronous
    /// — no message is ever left pending after this returns.
    pub fn send_message(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        payload: Payload,
    ) -> Message {
        let source = source.into();
        let target = target.into();

        let mut message = Message {
            source,
            target,
            payload,
            timestamp: Utc::now(),
            status: DeliveryStatus::Pending,
            error: None,
        };

        if self.registry.contains(&message.target) {
            message.status = DeliveryStatus::Delivered;
            self.registry.increment_message_count(&message.target);
            debug!(source = %message.source, target = %message.target, "Message delivered");
        } else {
            message.status = DeliveryStatus::Error;
            message.error =
                Some(IntegrationFault::TargetNotRegistered(message.target.clone()).to_string());
            warn!(target = %message.target, "Message to unregistered service");
        }

        self.message_queue.push(message.clone());
        self.processed.push(message.clone());
        message
    }

    /// Broadcast a payload to every registered service except `source`.
    ///
    /// `source` itself need not be registered. Results come back in
    /// registry iteration order, one per target.
    pub fn broadcast(&mut self, source: impl Into<String>, payload: Payload) -> Vec<Message> {
        let source = source.into();
        let targets: Vec<String> = self
            .registry
            .names()
            .into_iter()
            .filter(|name| *name != source)
            .collect();

        targets
            .into_iter()
            .map(|target| self.send_message(source.clone(), target, payload.clone()))
            .collect()
    }

    /// Read-through status lookup for a registered service.
    pub fn service_status(&self, name: &str) -> Option<&ServiceRecord> {
        self.registry.get(name)
    }

    /// Aggregate integration snapshot.
    pub fn report(&self) -> IntegrationReport {
        let services = self
            .registry
            .iter()
            .map(|(name, record)| {
                (
                    name.clone(),
                    ServiceSummary {
                        service_type: record.service_type.clone(),
                        status: record.status,
                        messages: record.message_count,
                    },
                )
            })
            .collect();

        IntegrationReport {
            version: VERSION.to_string(),
            uptime_seconds: self.started_at.elapsed().as_secs_f64(),
            services_registered: self.registry.len(),
            messages_processed: self.processed.len(),
            pending_messages: self
                .message_queue
                .iter()
                .filter(|m| m.status == DeliveryStatus::Pending)
                .count(),
            services,
        }
    }

    /// The registry this router routes over. Health checks read through
    /// this handle.
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Mutable registry handle for health repair sweeps.
    pub fn registry_mut(&mut self) -> &mut ServiceRegistry {
        &mut self.registry
    }

    /// Full processed-message log, oldest first.
    pub fn processed_messages(&self) -> &[Message] {
        &self.processed
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServiceStatus;
    use serde_json::json;

    fn payload_with(key: &str, value: i64) -> Payload {
        let mut payload = Payload::new();
        payload.insert(key.to_string(), json!(value));
        payload
    }

    #[test]
    fn delivery_to_registered_target_increments_counter() {
        let mut router = Router::new();
        router.register_service("compute", "processing", "", ServiceConfig::new());

        let message = router.send_message("api", "compute", payload_with("job", 1));

        assert_eq!(message.status, DeliveryStatus::Delivered);
        assert!(message.error.is_none());
        assert_eq!(router.service_status("compute").unwrap().message_count, 1);
    }

    #[test]
    fn delivery_to_unregistered_target_records_error() {
        let mut router = Router::new();

        let message = router.send_message("x", "y", Payload::new());

        assert_eq!(message.status, DeliveryStatus::Error);
        assert_eq!(message.error.as_deref(), Some("Service y not registered"));
        // Attempt is still logged
        assert_eq!(router.processed_messages().len(), 1);
    }

    #[test]
    fn failed_delivery_leaves_counters_unchanged() {
        let mut router = Router::new();
        router.register_service("a", "t", "", ServiceConfig::new());

        router.send_message("a", "missing", Payload::new());

        assert_eq!(router.service_status("a").unwrap().message_count, 0);
    }

    #[test]
    fn source_is_never_validated() {
        let mut router = Router::new();
        router.register_service("target", "t", "", ServiceConfig::new());

        let message = router.send_message("never-registered", "target", Payload::new());
        assert_eq!(message.status, DeliveryStatus::Delivered);
    }

    #[test]
    fn broadcast_skips_source_and_reaches_everyone_else() {
        let mut router = Router::new();
        for name in ["a", "b", "c", "d"] {
            router.register_service(name, "t", "", ServiceConfig::new());
        }

        let results = router.broadcast("b", payload_with("tick", 7));

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(Message::is_delivered));
        assert!(results.iter().all(|m| m.target != "b"));
        assert_eq!(router.service_status("b").unwrap().message_count, 0);
        for name in ["a", "c", "d"] {
            assert_eq!(router.service_status(name).unwrap().message_count, 1);
        }
    }

    #[test]
    fn broadcast_from_unregistered_source_reaches_all() {
        let mut router = Router::new();
        router.register_service("a", "t", "", ServiceConfig::new());
        router.register_service("b", "t", "", ServiceConfig::new());

        let results = router.broadcast("outsider", Payload::new());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(Message::is_delivered));
    }

    #[test]
    fn report_counters_are_consistent() {
        let mut router = Router::new();
        router.register_service("a", "processing", "", ServiceConfig::new());
        router.register_service("b", "monitoring", "", ServiceConfig::new());

        router.send_message("a", "b", Payload::new());
        router.send_message("a", "missing", Payload::new());
        router.broadcast("a", Payload::new());

        let report = router.report();
        assert_eq!(report.services_registered, 2);
        // 2 direct sends + 1 broadcast target (b)
        assert_eq!(report.messages_processed, 3);
        assert_eq!(report.pending_messages, 0);
        assert_eq!(report.services.get("b").unwrap().messages, 2);
        assert_eq!(report.services.get("a").unwrap().messages, 0);
        assert_eq!(report.services.get("a").unwrap().status, ServiceStatus::Active);
    }

    #[test]
    fn messages_are_never_implicitly_registered() {
        let mut router = Router::new();
        router.send_message("x", "phantom", Payload::new());
        assert!(router.service_status("phantom").is_none());
        assert_eq!(router.report().services_registered, 0);
    }
}
