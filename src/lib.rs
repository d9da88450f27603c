//! Clothing Search Service Library
//!
//! Core modules behind the `clothing-search` binary (`main.rs`).
//!
//! ## Modules
//! - **`catalog`**: The read-only item catalog, its loaders and the criteria filter.
//! - **`search`**: Query interpretation (color, item type, price) and the search endpoint.
//! - **`training`**: A single-slot simulated training job with its endpoints.
//! - **`auth`**: Shared-secret (`x-api-key`) middleware.
//! - **`app`**: Shared state and router assembly.
//! - **`config`**, **`error`**, **`logging`**: Ambient plumbing.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod training;
