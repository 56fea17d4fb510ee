//! Order Repository

use shared::ErrorCode;
use shared::models::Order;

use super::Entity;
use crate::db::collections;

impl Entity for Order {
    const COLLECTION: &'static str = collections::ORDER;
    const ID_FIELD: &'static str = "order_id";
    const LABEL: &'static str = "order";
    const NOT_FOUND: ErrorCode = ErrorCode::OrderNotFound;
}
