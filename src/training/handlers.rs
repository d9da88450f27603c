use super::manager::JobManager;
use super::types::{JobStatus, TrainResponse, TrainingData};
use crate::error::ApiError;

use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /train`: runs a job and answers once it settles.
pub async fn handle_train(
    Extension(jobs): Extension<Arc<JobManager>>,
) -> Result<Json<TrainResponse>, ApiError> {
    let data = jobs.start().await?;

    Ok(Json(TrainResponse {
        message: "Training completed successfully.".to_string(),
        data,
    }))
}

/// `GET /data`
pub async fn handle_get_data(
    Extension(jobs): Extension<Arc<JobManager>>,
) -> Result<Json<TrainingData>, ApiError> {
    jobs.last_result()
        .await
        .map(Json)
        .ok_or(ApiError::NoTrainingData)
}

/// `GET /train/status`
pub async fn handle_training_status(
    Extension(jobs): Extension<Arc<JobManager>>,
) -> Json<JobStatus> {
    Json(jobs.status().await)
}
