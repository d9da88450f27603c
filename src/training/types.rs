use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for one training run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct JobId(pub String);

impl JobId {
    /// Generates a new random UUID v4-based JobId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of the single training slot.
///
/// `Succeeded` and `Failed` are settled states: like `Idle`, they accept a new job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum JobStatus {
    /// No job has run since startup.
    Idle,
    /// A job holds the slot.
    Running {
        job_id: JobId,
        started_at: DateTime<Utc>,
    },
    /// The last job returned data.
    Succeeded {
        job_id: JobId,
        finished_at: DateTime<Utc>,
    },
    /// The last job returned an error or panicked.
    Failed {
        job_id: JobId,
        finished_at: DateTime<Utc>,
        error: String,
    },
}

impl JobStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, JobStatus::Running { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    pub fold: f64,
    pub call: f64,
    pub raise: f64,
}

/// Output of a finished training run, as served by `GET /data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingData {
    pub timestamp: DateTime<Utc>,
    pub model_version: String,
    pub strategy_metrics: StrategyMetrics,
    /// Two-decimal string, e.g. `"0.42"`.
    pub win_rate: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResponse {
    pub message: String,
    pub data: TrainingData,
}
