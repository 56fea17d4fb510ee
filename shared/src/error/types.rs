//! Application error type

use super::codes::ErrorCode;
use crate::response::ErrorResponse;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error every request boundary converts into, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending fields, identifiers)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a validation error naming the offending field
    pub fn invalid_field(field: &str, msg: impl Into<String>) -> Self {
        Self::validation(msg).with_detail("field", field)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a dangling foreign key error naming the referenced entity type
    pub fn reference_not_found(entity: impl Into<String>) -> Self {
        let e = entity.into();
        Self::with_message(ErrorCode::ReferenceNotFound, format!("{} was not found", e))
            .with_detail("entity", e)
    }

    /// The order behind a view has no item rows
    pub fn no_order_details(order_id: impl Into<String>) -> Self {
        let id = order_id.into();
        Self::with_message(
            ErrorCode::NoOrderDetails,
            format!("order {} has no item details", id),
        )
        .with_detail("order_id", id)
    }

    /// Create a store read error
    pub fn store_read(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreReadFailed, msg)
    }

    /// Create a store write error
    pub fn store_write(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreWriteFailed, msg)
    }

    /// Create a deadline expiry error
    pub fn timeout(deadline_ms: u64) -> Self {
        Self::new(ErrorCode::RequestTimeout).with_detail("deadline_ms", deadline_ms)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Whether the error is the caller's fault
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Server-side failures are logged once here; client errors are not
        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                details = ?self.details,
                "Server error occurred"
            );
        }

        let body = ErrorResponse::from_error(&self);
        (status, Json(body)).into_response()
    }
}
