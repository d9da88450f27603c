//! Catalog Module
//!
//! The fixed, read-only collection of clothing items that every search runs against.
//!
//! ## Overview
//! The catalog is loaded once at startup (from a JSON file or the copy bundled into the
//! binary) and shared behind an `Arc`. Nothing mutates it afterwards, so any number of
//! requests can read it concurrently without coordination.
//!
//! ## Submodules
//! - **`types`**: `CatalogItem` and the `Catalog` container with its loaders.
//! - **`filter`**: Narrowing predicates that turn extracted criteria into a result list.

pub mod filter;
pub mod types;
