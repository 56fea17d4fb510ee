//! Order Item API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order-items", get(handler::list).post(handler::create))
        .route("/order-items/order/{order_id}", get(handler::by_order))
        .route(
            "/order-items/{order_item_id}",
            get(handler::get_by_id).delete(handler::delete),
        )
}
