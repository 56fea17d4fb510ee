//! Invoice API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/invoice", get(handler::list).post(handler::create))
        .route(
            "/invoice/{invoice_id}",
            get(handler::get_view)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
