//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub table_id: String,
    /// Seating capacity
    pub number_of_guests: i64,
    pub table_number: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TableCreate {
    #[validate(required, range(min = 1))]
    pub number_of_guests: Option<i64>,
    #[validate(required, range(min = 1))]
    pub table_number: Option<i64>,
}

/// Update table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub table_number: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_guests_rejected() {
        let payload = TableCreate {
            number_of_guests: Some(0),
            table_number: Some(4),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("number_of_guests"));
        assert!(!errors.field_errors().contains_key("table_number"));
    }

    #[test]
    fn test_update_may_be_empty() {
        assert!(TableUpdate::default().validate().is_ok());
    }
}
