use super::engine::SearchEngine;
use super::types::SearchRequest;
use crate::catalog::types::CatalogItem;
use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

/// `POST /api/clothing-search`
///
/// Authentication has already run as middleware by the time this is called.
pub async fn handle_clothing_search(
    Extension(engine): Extension<SearchEngine>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let query = match payload {
        Ok(Json(SearchRequest { query: Some(query) })) if !query.is_empty() => query,
        Ok(_) => {
            tracing::info!("No query provided");
            return Err(ApiError::Validation);
        }
        // Unparseable bodies and non-string queries are client errors here (400),
        // not the generic 500 that unexpected failures get.
        Err(rejection) => {
            tracing::info!("Rejected search body: {}", rejection.body_text());
            return Err(ApiError::Validation);
        }
    };

    tracing::info!("Processing query: {}", query);
    let outcome = engine.search(&query);

    Ok(Json(outcome.results))
}
