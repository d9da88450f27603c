//! Training Job Module
//!
//! A placeholder for a future model-training component: one simulated job slot behind
//! `POST /train`, with the last result served by `GET /data`.
//!
//! ## Submodules
//! - **`types`**: Job identifiers, the job state machine and the training payload.
//! - **`trainer`**: The type-erased trainer function and the simulated implementation.
//! - **`manager`**: Single-slot admission, execution and result bookkeeping.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod handlers;
pub mod manager;
pub mod trainer;
pub mod types;
