//! Shared types for the restaurant server
//!
//! Common types used by the server and its clients: persisted entity
//! models, request payloads, aggregation views, the unified error system
//! and the response envelope.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::{ApiResponse, ErrorBody, ErrorResponse};
