use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../data/clothing_sheet.json");

/// A single clothing item as it appears in the catalog file and in search responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl CatalogItem {
    /// Creates an item with only the required fields set.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            color: None,
            size: None,
            brand: None,
        }
    }
}

/// Ordered, immutable list of catalog items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wraps already validated items, keeping their order.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parses a JSON array of items.
    ///
    /// Every price must be a finite, non-negative number.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(text)?;

        if let Some(bad) = items
            .iter()
            .find(|item| !item.price.is_finite() || item.price < 0.0)
        {
            return Err(CatalogError::InvalidPrice {
                name: bad.name.clone(),
                price: bad.price,
            });
        }

        Ok(Self { items })
    }

    /// Reads and parses a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&text)?;

        tracing::info!(
            "Loaded {} catalog items from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
