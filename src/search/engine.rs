use super::interpreter::QueryInterpreter;
use super::types::SearchOutcome;
use crate::catalog::filter::filter;
use crate::catalog::types::Catalog;
use std::sync::Arc;

/// Runs queries against a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    interpreter: Arc<QueryInterpreter>,
}

impl SearchEngine {
    pub fn new(catalog: Arc<Catalog>, interpreter: QueryInterpreter) -> Self {
        Self {
            catalog,
            interpreter: Arc::new(interpreter),
        }
    }

    /// Interprets `query`, then filters the catalog with the extracted criteria.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let criteria = self.interpreter.interpret(query);
        tracing::info!(
            "Extracted criteria: color={:?} type={:?} price={:?}",
            criteria.color,
            criteria.item_type,
            criteria.target_price
        );

        let results = filter(self.catalog.items(), &criteria);
        tracing::info!("Found {} results", results.len());

        SearchOutcome { criteria, results }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
