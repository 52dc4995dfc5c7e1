//! Intermesh host — thin wiring around the integration core
//!
//! Registers a small demo topology, drives a few messages and compute
//! tasks through it, and runs the health monitor loop until ctrl-c.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (config from INTERMESH_CONFIG / ./intermesh.toml)
//! cargo run --release
//!
//! # One health cycle and exit
//! cargo run --release -- --oneshot
//! ```
//!
//! # Environment Variables
//!
//! - `INTERMESH_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: info)

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::info;

use intermesh::compute::ComputeEngine;
use intermesh::config::MeshConfig;
use intermesh::health::{HealthMonitor, MonitorLoop};
use intermesh::router::Router;
use intermesh::types::{task_kinds, ComputeTask, Payload, ServiceConfig, ServiceStatus};

#[derive(Parser, Debug)]
#[command(name = "intermesh")]
#[command(about = "In-process service integration core")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides INTERMESH_CONFIG)
    #[arg(long)]
    config: Option<String>,

    /// Override the monitor check interval in seconds
    #[arg(long)]
    interval: Option<f64>,

    /// Run a single check+repair cycle and exit
    #[arg(long)]
    oneshot: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => MeshConfig::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => MeshConfig::load().context("failed to load config")?,
    };
    if let Some(interval) = args.interval {
        config.monitor.check_interval_secs = interval;
    }

    // Demo topology: a compute collaborator plus two plain services
    let mut router = Router::new();
    router.register_service("compute", "processing", "local://compute", ServiceConfig::new());
    router.register_service("telemetry", "monitoring", "local://telemetry", ServiceConfig::new());
    router.register_service("api", "gateway", "", ServiceConfig::new());

    // Drive the compute collaborator from a message payload
    let mut engine = ComputeEngine::new(&config.compute);
    let task = ComputeTask::of_kind(task_kinds::HYBRID_COMPUTE);
    let payload: Payload = serde_json::to_value(&task)
        .ok()
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();
    let message = router.send_message("api", "compute", payload.clone());
    info!(status = %message.status, "Compute task message routed");
    let result = engine.process(&task);
    info!(task = %result.task_type, status = ?result.status, "Compute task processed");

    router.broadcast("api", payload);

    // Simulate a fault for the monitor to repair
    router.registry_mut().set_status("telemetry", ServiceStatus::Inactive);

    let interval = Duration::from_secs_f64(config.monitor.check_interval_secs.max(0.1));
    let monitor = HealthMonitor::with_interval(interval);
    let router = Arc::new(RwLock::new(router));
    let mut monitor_loop = MonitorLoop::new(router.clone(), monitor, config.monitor.auto_repair);

    if args.oneshot {
        monitor_loop.run_cycle().await;
    } else {
        let cancel = CancellationToken::new();
        let shutdown = cancel.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown requested");
            shutdown.cancel();
        });
        let monitor = monitor_loop.run(cancel).await;
        let summary = monitor.report();
        info!(
            status = %summary.status,
            faults = summary.faults_detected,
            repairs = summary.repairs_executed,
            "Monitor summary"
        );
    }

    let report = router.read().await.report();
    info!(
        services = report.services_registered,
        messages = report.messages_processed,
        pending = report.pending_messages,
        "Integration report"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
