//! Router Assembly
//!
//! Wires the search, training and health endpoints into one `axum::Router`, with the
//! API-key middleware on `/api` routes, request logging on everything, and handler
//! panics answered as a generic 500.

use crate::auth::{require_api_key, ApiKey};
use crate::catalog::types::Catalog;
use crate::error::ApiError;
use crate::search::engine::SearchEngine;
use crate::search::handlers::handle_clothing_search;
use crate::search::interpreter::QueryInterpreter;
use crate::training::handlers::{handle_get_data, handle_train, handle_training_status};
use crate::training::manager::JobManager;
use crate::training::trainer::TrainFn;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// Everything the handlers share. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub api_key: ApiKey,
    pub engine: SearchEngine,
    pub jobs: Arc<JobManager>,
}

impl AppState {
    pub fn new(api_key: ApiKey, catalog: Catalog, trainer: TrainFn) -> Self {
        Self {
            api_key,
            engine: SearchEngine::new(Arc::new(catalog), QueryInterpreter::default()),
            jobs: JobManager::new(trainer),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalog_items: usize,
}

pub fn build_router(state: AppState) -> Router {
    build_router_with(state, Router::new())
}

/// Like `build_router`, with `extra` routes mounted under the same layers.
pub fn build_router_with(state: AppState, extra: Router) -> Router {
    let api = Router::new()
        .route("/api/clothing-search", post(handle_clothing_search))
        .route_layer(middleware::from_fn_with_state(
            state.api_key.clone(),
            require_api_key,
        ));

    Router::new()
        .merge(api)
        .route("/train", post(handle_train))
        .route("/train/status", get(handle_training_status))
        .route("/data", get(handle_get_data))
        .route("/health", get(handle_health))
        .merge(extra)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_request))
        .layer(Extension(state.engine))
        .layer(Extension(state.jobs))
}

async fn handle_health(Extension(engine): Extension<SearchEngine>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        catalog_items: engine.catalog().len(),
    })
}

/// Turns a handler panic into a generic 500; the detail only goes to the log.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

/// Logs method and path only; header values may carry the API key.
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;

    tracing::info!("{} {} -> {}", method, uri, response.status().as_u16());
    response
}
