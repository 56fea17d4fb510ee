//! Input validation helpers
//!
//! Payload shapes carry `validator` rules; these helpers turn rule failures
//! and malformed bodies into `ValidationFailed` errors naming the fields.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use shared::ErrorCode;
use validator::Validate;

use crate::utils::{AppError, AppResult};

/// Entity names: menu, food, category
pub const MAX_NAME_LEN: usize = 200;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Largest accepted unit price magnitude
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Unwrap a JSON body, mapping decode failures to `ValidationFailed`
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| AppError::validation(format!("Invalid request body: {}", rejection.body_text())))
}

/// Run a payload's `validator` rules
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        AppError::validation(format!("Invalid fields: {}", fields.join(", ")))
            .with_detail("fields", Value::from(fields))
    })
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(field, format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.chars().count()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.chars().count()),
        ));
    }
    Ok(())
}

/// Reject non-finite prices and prices beyond `MAX_PRICE`
pub fn validate_price(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_field(field, format!("{field} must be a finite number")));
    }
    if value.abs() > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::FoodInvalidPrice,
            format!("{field} exceeds maximum allowed value of {MAX_PRICE}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}
