//! Unified error system
//!
//! This module provides the error handling used at every request boundary:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order / invoice errors
//! - 6xxx: Menu / food errors
//! - 7xxx: Table errors
//! - 9xxx: System (store) errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "price exceeds the maximum");
//!
//! // Create an error with details
//! let err = AppError::reference_not_found("menu").with_detail("menu_id", "abc");
//! assert_eq!(err.code, ErrorCode::ReferenceNotFound);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
