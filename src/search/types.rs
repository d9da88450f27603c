use crate::catalog::types::CatalogItem;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/clothing-search`.
///
/// `query` is optional at the type level so a missing field can be reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Structured fields derived from one free-text query. At most one value per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedCriteria {
    pub color: Option<String>,
    pub item_type: Option<String>,
    pub target_price: Option<f64>,
}

impl ExtractedCriteria {
    /// True when nothing was extracted, i.e. the filter keeps the whole catalog.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.item_type.is_none() && self.target_price.is_none()
    }
}

/// Result of running one query through the interpreter and the filter.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub criteria: ExtractedCriteria,
    pub results: Vec<CatalogItem>,
}
