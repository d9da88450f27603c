//! Error Types
//!
//! One `thiserror` enum per concern. Only `ApiError` knows about HTTP; the
//! others are mapped onto it at the handler boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures while loading the catalog at startup.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog item '{name}' has an invalid price: {price}")]
    InvalidPrice { name: String, price: f64 },
}

/// Failures while assembling the service configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("An API key is required (set server.api_key or MY_API_KEY)")]
    MissingApiKey,
}

/// Failures of a training job.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum JobError {
    #[error("A training job is already in progress")]
    AlreadyRunning,

    #[error("Training failed: {0}")]
    Failed(String),
}

/// Errors reported at the HTTP boundary.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Query parameter is required")]
    Validation,

    #[error("API key is required")]
    MissingApiKey,

    #[error("Forbidden: Invalid API key")]
    InvalidApiKey,

    #[error("Training is already in progress.")]
    Conflict,

    #[error("An error occurred during training.")]
    TrainingFailed(String),

    #[error("No training data available yet.")]
    NoTrainingData,

    #[error("Something broke!")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey => StatusCode::UNAUTHORIZED,
            ApiError::InvalidApiKey => StatusCode::FORBIDDEN,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NoTrainingData => StatusCode::NOT_FOUND,
            ApiError::TrainingFailed(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::AlreadyRunning => ApiError::Conflict,
            JobError::Failed(detail) => ApiError::TrainingFailed(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // Training endpoints answer with `message`, the search API with `error`.
            ApiError::Conflict | ApiError::NoTrainingData => {
                json!({ "message": self.to_string() })
            }
            ApiError::TrainingFailed(detail) => {
                json!({ "message": self.to_string(), "error": detail })
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                json!({ "error": self.to_string() })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
