//! Intermesh: in-process service integration core
//!
//! A minimal orchestration layer for short-lived sessions: named
//! services register themselves, exchange point-to-point and broadcast
//! messages, and are monitored for liveness with automatic reactivation
//! of inactive entries.
//!
//! ## Architecture
//!
//! - **Registry**: authoritative service name → record mapping, owned
//!   by the router
//! - **Router**: target validation, delivery recording, broadcast
//!   fan-out, integration report
//! - **Health Monitor**: healthy⟷degraded state machine over the
//!   registry, with unconditional auto-repair and an optional
//!   timer-driven loop
//! - **Compute Engine**: payload-driven task stub (stochastic search,
//!   placeholder inference) invoked as an external collaborator
//!
//! All communication is local, synchronous, and in-memory; there is no
//! network transport, no persistence, and no retry built into the core.

pub mod compute;
pub mod config;
pub mod error;
pub mod health;
pub mod registry;
pub mod router;
pub mod types;

// Re-export the component entry points
pub use compute::ComputeEngine;
pub use config::MeshConfig;
pub use health::{HealthMonitor, MonitorLoop};
pub use registry::ServiceRegistry;
pub use router::Router;

// Re-export commonly used types
pub use types::{
    ComputeTask, DeliveryStatus, HealthReport, HealthSummary, IntegrationReport, Message,
    Payload, RepairAction, ServiceConfig, ServiceRecord, ServiceStatus, SystemStatus,
    TaskResult, TaskStatus,
};
