//! Health monitoring and auto-repair
//!
//! [`HealthMonitor`] classifies registered services as healthy or
//! inactive, aggregates a system-wide status, and can reactivate
//! inactive entries. [`MonitorLoop`] drives it on a timer against a
//! shared router.

mod monitor;
mod monitor_loop;

pub use monitor::HealthMonitor;
pub use monitor_loop::MonitorLoop;
