//! Order Item Repository

use shared::ErrorCode;
use shared::models::OrderItem;

use super::Entity;
use crate::db::collections;

impl Entity for OrderItem {
    const COLLECTION: &'static str = collections::ORDER_ITEM;
    const ID_FIELD: &'static str = "order_item_id";
    const LABEL: &'static str = "order item";
    const NOT_FOUND: ErrorCode = ErrorCode::OrderItemNotFound;
}
