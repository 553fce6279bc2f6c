//! Mock image classification service.
//!
//! Accepts a multipart upload with optional `tags`, `metadata` and
//! `request_id` fields, deletes the uploaded file, and answers with a fixed
//! classification report. Stands in for a model-backed classifier during
//! integration testing.

pub mod app;
pub mod classifier;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod telemetry;
pub mod upload;

pub use app::{configure, AppState};
pub use config::Settings;
