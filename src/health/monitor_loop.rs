//! Monitor loop — timer-driven health check with automatic recovery
//!
//! Wraps a shared [`Router`] and re-invokes the monitor's check and
//! repair passes on an interval. The router write lock is held for one
//! whole check+repair cycle, so concurrent readers never observe a
//! partially repaired registry.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::router::Router;
use crate::types::SystemStatus;

use super::HealthMonitor;

/// Periodic health-check task over a shared router.
pub struct MonitorLoop {
    router: Arc<RwLock<Router>>,
    monitor: HealthMonitor,
    /// Reactivate inactive services after a degraded check. Disabled,
    /// the loop only observes and logs.
    auto_repair: bool,
}

impl MonitorLoop {
    pub fn new(router: Arc<RwLock<Router>>, monitor: HealthMonitor, auto_repair: bool) -> Self {
        Self {
            router,
            monitor,
            auto_repair,
        }
    }

    /// Run cycles until the token is cancelled, then return the monitor
    /// with its accumulated fault and repair logs.
    pub async fn run(mut self, cancel: CancellationToken) -> HealthMonitor {
        let interval = self.monitor.check_interval();
        info!(
            interval_secs = interval.as_secs_f64(),
            auto_repair = self.auto_repair,
            "Monitor loop started"
        );

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    info!("Monitor loop stopped");
                    return self.monitor;
                }
                () = tokio::time::sleep(interval) => {
                    self.run_cycle().await;
                }
            }
        }
    }

    /// One atomic check+repair cycle against the shared router.
    pub async fn run_cycle(&mut self) {
        let mut router = self.router.write().await;

        let report = self.monitor.check_health(router.registry());
        match report.status {
            SystemStatus::Healthy => {
                debug!(services = report.services_checked, "Health cycle: all services active");
            }
            SystemStatus::Degraded => {
                if self.auto_repair {
                    let repairs = self.monitor.auto_repair(router.registry_mut());
                    info!(
                        issues = report.issues.len(),
                        repairs = repairs.len(),
                        "Health cycle: degraded, repaired"
                    );
                } else {
                    info!(
                        issues = report.issues.len(),
                        "Health cycle: degraded, auto-repair disabled"
                    );
                }
            }
        }
    }
}
