//! Shared data structures for the integration core
//!
//! This module defines the types that flow between the components:
//! - ServiceRecord / ServiceStatus (registry entries)
//! - Message / DeliveryStatus (point-to-point and broadcast routing)
//! - HealthIssue / RepairAction (health monitoring and auto-repair)
//! - ComputeTask / TaskResult (compute engine payload work)
//! - Report structs (plain serializable snapshots for all components)

mod service;
mod message;
mod health;
mod compute;
mod report;

pub use service::*;
pub use message::*;
pub use health::*;
pub use compute::*;
pub use report::*;
