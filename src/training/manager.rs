//! Training Job Manager
//!
//! Owns the one training slot and the last successful result.
//!
//! ## State Machine
//! `Idle -> Running -> (Succeeded | Failed)`, and from either settled state back to
//! `Running` on the next start. A start while `Running` is rejected immediately; there
//! is no queue. Only a success replaces the remembered result.

use super::trainer::TrainFn;
use super::types::{JobId, JobStatus, TrainingData};
use crate::error::JobError;

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct JobState {
    status: JobStatus,
    last_result: Option<TrainingData>,
}

pub struct JobManager {
    state: RwLock<JobState>,
    trainer: TrainFn,
}

impl JobManager {
    pub fn new(trainer: TrainFn) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(JobState {
                status: JobStatus::Idle,
                last_result: None,
            }),
            trainer,
        })
    }

    /// Runs one training job to completion and returns its data.
    ///
    /// The job runs on its own task and settles the slot itself, so the slot is
    /// released even if the caller stops waiting.
    pub async fn start(self: &Arc<Self>) -> Result<TrainingData, JobError> {
        let job_id = self.begin().await?;
        tracing::info!("Training job {} started", job_id.0);

        let manager = Arc::clone(self);
        let job = tokio::spawn(async move {
            let outcome = match tokio::spawn((manager.trainer)()).await {
                Ok(Ok(data)) => Ok(data),
                Ok(Err(e)) => Err(JobError::Failed(e.to_string())),
                Err(e) => Err(JobError::Failed(format!("training task aborted: {}", e))),
            };
            manager.settle(&job_id, &outcome).await;
            outcome
        });

        match job.await {
            Ok(outcome) => outcome,
            Err(e) => Err(JobError::Failed(format!("training task aborted: {}", e))),
        }
    }

    /// Claims the slot. The check and the transition happen under one write lock.
    async fn begin(&self) -> Result<JobId, JobError> {
        let mut state = self.state.write().await;
        if state.status.is_running() {
            tracing::warn!("Rejected training start: a job is already running");
            return Err(JobError::AlreadyRunning);
        }

        let job_id = JobId::new();
        state.status = JobStatus::Running {
            job_id: job_id.clone(),
            started_at: Utc::now(),
        };
        Ok(job_id)
    }

    async fn settle(&self, job_id: &JobId, outcome: &Result<TrainingData, JobError>) {
        let mut state = self.state.write().await;
        let finished_at = Utc::now();

        state.status = match outcome {
            Ok(data) => {
                state.last_result = Some(data.clone());
                tracing::info!("Training job {} succeeded", job_id.0);
                JobStatus::Succeeded {
                    job_id: job_id.clone(),
                    finished_at,
                }
            }
            Err(e) => {
                tracing::error!("Training job {} failed: {}", job_id.0, e);
                JobStatus::Failed {
                    job_id: job_id.clone(),
                    finished_at,
                    error: e.to_string(),
                }
            }
        };
    }

    pub async fn status(&self) -> JobStatus {
        self.state.read().await.status.clone()
    }

    pub async fn is_running(&self) -> bool {
        self.state.read().await.status.is_running()
    }

    /// Data of the most recent successful job, if any.
    pub async fn last_result(&self) -> Option<TrainingData> {
        self.state.read().await.last_result.clone()
    }
}
