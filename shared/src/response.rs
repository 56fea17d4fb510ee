//! API Response types
//!
//! Every response body is one of two shapes:
//! ```json
//! { "success": true, "message": "Success", "data": { ... } }
//! ```
//! ```json
//! { "error": { "code": 404, "description": "not_found", "message": "food not found" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
            data,
        }
    }
}

/// Error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error payload: HTTP status code, error kind and message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub description: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            error: ErrorBody {
                code: err.http_status().as_u16(),
                description: err.code.kind().to_string(),
                message: err.message.clone(),
            },
        }
    }
}
