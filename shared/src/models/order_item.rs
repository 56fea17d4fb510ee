//! Order Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: String,
    pub order_id: String,
    pub food_id: String,
    pub quantity: i64,
    /// Copied from the food price when the item is created
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderItemCreate {
    #[validate(required, length(min = 1))]
    pub order_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub food_id: Option<String>,
    /// At most 9999 per line
    #[validate(required, range(min = 1, max = 9999))]
    pub quantity: Option<i64>,
}
