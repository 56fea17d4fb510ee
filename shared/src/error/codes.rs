//! Unified error codes
//!
//! This module defines all error codes used by the server and its clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / invoice errors
//! - 6xxx: Menu / food errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// A foreign key does not resolve to an existing record
    ReferenceNotFound = 9,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order item not found
    OrderItemNotFound = 4006,
    /// The order has no items to build a view from
    NoOrderDetails = 4008,
    /// Invoice not found
    InvoiceNotFound = 4101,

    // ==================== 6xxx: Menu / Food ====================
    /// Food not found
    FoodNotFound = 6001,
    /// Food has invalid price
    FoodInvalidPrice = 6002,
    /// Menu not found
    MenuNotFound = 6101,
    /// Menu active window is invalid
    MenuInvalidWindow = 6102,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Reading from the document store failed
    StoreReadFailed = 9002,
    /// Writing to the document store failed
    StoreWriteFailed = 9003,
    /// The request deadline elapsed
    RequestTimeout = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::ReferenceNotFound => "Referenced record not found",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::NoOrderDetails => "Order has no item details",
            ErrorCode::InvoiceNotFound => "Invoice not found",

            // Menu / Food
            ErrorCode::FoodNotFound => "Food not found",
            ErrorCode::FoodInvalidPrice => "Food has invalid price",
            ErrorCode::MenuNotFound => "Menu not found",
            ErrorCode::MenuInvalidWindow => "Invalid date range",

            // Table
            ErrorCode::TableNotFound => "Table not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StoreReadFailed => "Failed to read from the store",
            ErrorCode::StoreWriteFailed => "Failed to write to the store",
            ErrorCode::RequestTimeout => "Request deadline exceeded",
        }
    }

    /// Machine-readable error kind, used as the `description` of error bodies
    pub const fn kind(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::FoodInvalidPrice
            | ErrorCode::MenuInvalidWindow => "validation_failed",
            ErrorCode::ReferenceNotFound => "reference_not_found",
            ErrorCode::NotFound
            | ErrorCode::OrderNotFound
            | ErrorCode::OrderItemNotFound
            | ErrorCode::InvoiceNotFound
            | ErrorCode::FoodNotFound
            | ErrorCode::MenuNotFound
            | ErrorCode::TableNotFound => "not_found",
            ErrorCode::NoOrderDetails => "no_order_details",
            ErrorCode::StoreReadFailed => "store_read_failed",
            ErrorCode::StoreWriteFailed => "store_write_failed",
            ErrorCode::RequestTimeout => "request_timeout",
            ErrorCode::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            9 => Ok(ErrorCode::ReferenceNotFound),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4008 => Ok(ErrorCode::NoOrderDetails),
            4101 => Ok(ErrorCode::InvoiceNotFound),

            // Menu / Food
            6001 => Ok(ErrorCode::FoodNotFound),
            6002 => Ok(ErrorCode::FoodInvalidPrice),
            6101 => Ok(ErrorCode::MenuNotFound),
            6102 => Ok(ErrorCode::MenuInvalidWindow),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StoreReadFailed),
            9003 => Ok(ErrorCode::StoreWriteFailed),
            9004 => Ok(ErrorCode::RequestTimeout),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
