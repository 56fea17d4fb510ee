//! Aggregation output shapes
//!
//! Read-only views assembled from several collections; never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Food;

/// One page of the food listing plus the collection size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedFoodResult {
    pub total_count: u64,
    pub food_items: Vec<Food>,
}

/// Ranking entry: how many order lines reference a food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostOrderedFood {
    pub food_id: String,
    pub total_orders: u64,
}

/// One enriched order item line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemLine {
    pub order_item_id: String,
    pub food_id: String,
    /// Empty when the food has since been deleted
    pub food_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// `quantity * unit_price`, 2 dp
    pub amount: f64,
}

/// All items of one order with the amount due
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemsSummary {
    pub order_id: String,
    pub item_count: u64,
    pub payment_due: f64,
    /// Resolved through the order's table; absent for takeaway orders
    pub table_number: Option<i64>,
    pub order_items: Vec<OrderItemLine>,
}

/// Invoice plus the order details it bills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceView {
    pub invoice_id: String,
    pub order_id: String,
    /// Payment method wire name, or the literal `"null"` when unset
    pub payment_method: String,
    pub payment_status: String,
    pub payment_due_date: DateTime<Utc>,
    pub payment_due: f64,
    pub table_number: Option<i64>,
    pub order_details: Vec<OrderItemLine>,
}
