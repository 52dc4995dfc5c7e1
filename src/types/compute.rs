//! Compute engine task and result types
//!
//! Tasks arrive as message payloads, so the task kind is a free-form
//! string rather than a closed enum: unknown kinds must produce an error
//! result, not a deserialization failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known task kind strings dispatched by the compute engine.
pub mod task_kinds {
    /// Simulated-annealing style stochastic search
    pub const QUANTUM_OPTIMIZE: &str = "quantum_optimize";
    /// Placeholder model inference
    pub const ML_INFERENCE: &str = "ml_inference";
    /// Optimization composed with inference
    pub const HYBRID_COMPUTE: &str = "hybrid_compute";
    /// Engine self-report
    pub const HEALTH_CHECK: &str = "health_check";
}

/// Direction of the optimization objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Keep the lowest-scoring candidate seen
    #[default]
    Minimize,
    /// Keep the highest-scoring candidate seen
    Maximize,
}

/// Input data for a compute task. All fields default so a task built
/// from a sparse payload still dispatches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskData {
    /// Optimization direction
    pub objective: Objective,
    /// Nominal problem dimensionality (carried through, not yet used by
    /// the stub search)
    pub dimensions: usize,
}

impl Default for TaskData {
    fn default() -> Self {
        Self {
            objective: Objective::Minimize,
            dimensions: 4,
        }
    }
}

/// Tuning parameters for a compute task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskParams {
    /// Candidate samples for the stochastic search
    pub iterations: u32,
    /// Model name for inference
    pub model: String,
}

impl Default for TaskParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            model: "default".to_string(),
        }
    }
}

/// One unit of work submitted to the compute engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeTask {
    /// Task kind string, see [`task_kinds`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Input data
    #[serde(default)]
    pub data: TaskData,
    /// Tuning parameters
    #[serde(default)]
    pub parameters: TaskParams,
}

impl ComputeTask {
    /// Task with the given kind and all-default data/parameters.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: TaskData::default(),
            parameters: TaskParams::default(),
        }
    }
}

/// Completion status of a processed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    Error,
}

/// Output of a stochastic optimization run.
///
/// Best-effort heuristic search only — there is no convergence
/// guarantee, and the score is not comparable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationOutput {
    /// Best candidate score seen under the objective
    pub best_score: f64,
    /// Candidates sampled
    pub iterations: u32,
    /// Variance parameter after geometric cooling
    pub final_temperature: f64,
    /// Method tag for report consumers
    pub method: String,
}

/// Output of the placeholder inference call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceOutput {
    /// Model name echoed from the task parameters
    pub model: String,
    /// Fixed placeholder prediction
    pub prediction: String,
    /// Fixed placeholder confidence
    pub confidence: f64,
}

/// Output of a hybrid run: both sub-results plus a combined score.
///
/// `hybrid_score` is best_score × confidence — an arbitrary,
/// non-normalized metric carried for report continuity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HybridOutput {
    pub quantum: OptimizationOutput,
    pub classical: InferenceOutput,
    pub hybrid_score: f64,
}

/// Engine self-report produced by the `health_check` task kind.
///
/// This is the compute backend's own liveness snapshot; it is unrelated
/// to the service-level HealthMonitor despite the naming overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendHealth {
    pub version: String,
    pub status: SystemBackendStatus,
    pub uptime_seconds: f64,
    pub total_operations: u64,
    pub backend: String,
    pub optimization_level: u8,
}

/// Backend status for [`BackendHealth`]. The stub backend is always
/// healthy; the variant exists for report shape stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemBackendStatus {
    Healthy,
}

/// Typed output of a processed task, tagged by task family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Optimization(OptimizationOutput),
    Inference(InferenceOutput),
    Hybrid(HybridOutput),
    Health(BackendHealth),
}

/// Result of one `process` call, appended to the processing log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// Kind string of the submitted task
    pub task_type: String,
    /// Completed or error
    pub status: TaskStatus,
    /// Output, present on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<TaskOutput>,
    /// Error detail, present on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the task finished
    pub timestamp: DateTime<Utc>,
    /// Wall-clock processing time in seconds
    pub duration_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_payload_deserializes_with_defaults() {
        let task: ComputeTask =
            serde_json::from_str(r#"{"type": "quantum_optimize"}"#).unwrap();
        assert_eq!(task.kind, task_kinds::QUANTUM_OPTIMIZE);
        assert_eq!(task.data.objective, Objective::Minimize);
        assert_eq!(task.data.dimensions, 4);
        assert_eq!(task.parameters.iterations, 100);
        assert_eq!(task.parameters.model, "default");
    }

    #[test]
    fn objective_roundtrips_lowercase() {
        let task: ComputeTask = serde_json::from_str(
            r#"{"type": "quantum_optimize", "data": {"objective": "maximize"}}"#,
        )
        .unwrap();
        assert_eq!(task.data.objective, Objective::Maximize);
    }
}
