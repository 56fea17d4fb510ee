//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One `{food_id}` line carried on the order document.
///
/// The most-ordered ranking unwinds these lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OrderLine {
    #[validate(length(min = 1))]
    pub food_id: String,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    /// Optional table reference
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    /// Defaults to the creation time
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1))]
    pub table_id: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<OrderLine>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub items: Option<Vec<OrderLine>>,
}
