//! Food API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/food", get(handler::list).post(handler::create))
        .route("/food/most-ordered", get(handler::most_ordered))
        .route(
            "/food/{food_id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
