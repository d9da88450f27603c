//! Search Service Module
//!
//! Turns a free-text query into catalog results.
//!
//! ## Overview
//! A query flows through two pure stages: the **interpreter** extracts at most one color,
//! one item type and one target price; the catalog **filter** keeps the items matching
//! every extracted field. The HTTP handler only validates input and serializes output.
//!
//! ## Submodules
//! - **`interpreter`**: Vocabulary rule tables and price extraction.
//! - **`engine`**: Glues the interpreter to the shared catalog.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod interpreter;
pub mod types;
